//! Parsing tab-separated word/tag corpora.

use std::path::Path;

use tracing::info;

use crate::error::CorpusError;

/// One sentence: ordered (word, tag) pairs.
pub type Sentence = Vec<(String, String)>;

/// Parses corpus text into sentences.
///
/// Each non-blank line must be `word<TAB>tag`; blank lines delimit sentences.
/// Consecutive blank lines and leading/trailing blank lines are ignored, as
/// is a `\r` before the line break. An empty input yields an empty vector;
/// whether that is an error is the estimator's call, not the reader's.
///
/// # Errors
///
/// Returns [`CorpusError::MalformedLine`] with the 1-based line number when a
/// line does not have exactly two tab-separated fields or either field is
/// empty.
pub fn parse_corpus(text: &str) -> Result<Vec<Sentence>, CorpusError> {
    let mut sentences = Vec::new();
    let mut current: Sentence = Vec::new();

    for (i, raw) in text.lines().enumerate() {
        let line = raw.strip_suffix('\r').unwrap_or(raw);
        if line.trim().is_empty() {
            if !current.is_empty() {
                sentences.push(std::mem::take(&mut current));
            }
            continue;
        }

        let (word, tag) = line.split_once('\t').ok_or_else(|| CorpusError::MalformedLine {
            line: i + 1,
            content: line.to_string(),
        })?;
        let word = word.trim();
        let tag = tag.trim();
        // exactly two fields: a second tab would otherwise hide in the tag
        if word.is_empty() || tag.is_empty() || tag.contains('\t') {
            return Err(CorpusError::MalformedLine {
                line: i + 1,
                content: line.to_string(),
            });
        }
        current.push((word.to_string(), tag.to_string()));
    }
    if !current.is_empty() {
        sentences.push(current);
    }

    Ok(sentences)
}

/// Reads and parses a corpus file.
///
/// # Errors
///
/// Returns [`CorpusError::FileNotFound`] if the path does not exist,
/// [`CorpusError::Io`] for other read failures, and everything
/// [`parse_corpus`] can return.
pub fn read_corpus(path: &Path) -> Result<Vec<Sentence>, CorpusError> {
    if !path.exists() {
        return Err(CorpusError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let text = std::fs::read_to_string(path).map_err(|e| CorpusError::Io {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    let sentences = parse_corpus(&text)?;
    info!(
        path = %path.display(),
        n_sentences = sentences.len(),
        n_tokens = sentences.iter().map(Vec::len).sum::<usize>(),
        "corpus loaded"
    );
    Ok(sentences)
}
