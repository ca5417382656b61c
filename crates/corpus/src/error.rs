//! Error types for the hermes-corpus crate.

use std::path::PathBuf;

/// Error type for all fallible operations in the hermes-corpus crate.
#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    /// Returned when the corpus file does not exist on disk.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// Path that could not be found.
        path: PathBuf,
    },

    /// Wraps an I/O error while reading the corpus file.
    #[error("i/o error reading {}: {reason}", path.display())]
    Io {
        /// Path being read when the failure occurred.
        path: PathBuf,
        /// Description of the underlying failure.
        reason: String,
    },

    /// Returned when a non-blank line is not `word<TAB>tag`.
    #[error("malformed line {line}: expected 'word<TAB>tag', got '{content}'")]
    MalformedLine {
        /// 1-based line number.
        line: usize,
        /// The offending line content.
        content: String,
    },
}
