//! Maximum-likelihood parameter estimation from a tagged corpus.

use tracing::debug;

use crate::alphabet::Alphabet;
use crate::config::{EstimatorConfig, Smoothing};
use crate::error::HmmError;
use crate::model::HmmModel;

/// One training sentence: ordered (observation, state) pairs.
pub type TaggedSentence = Vec<(String, String)>;

/// Estimates an [`HmmModel`] from tagged sentences by frequency counting.
///
/// Counting: the first state of each sentence increments a start count, each
/// adjacent state pair increments a transition count, and every
/// (observation, state) pair increments an emission count. Each count table
/// is then normalised over its conditioning key, applying the configured
/// [`Smoothing`] pseudo-count first.
///
/// The state and vocabulary alphabets are built in first-occurrence order
/// over the corpus; that order is the model's canonical (tie-breaking) order.
///
/// Zero-length sentences contribute nothing and are skipped. A state that is
/// only ever sentence-final has no outgoing transition counts; under
/// [`Smoothing::None`] its transition row is normalised to uniform so the
/// model stays row-stochastic.
///
/// # Errors
///
/// Returns [`HmmError::InvalidSmoothing`] for an invalid configuration and
/// [`HmmError::EmptyTrainingSet`] if no non-empty sentence is supplied.
pub fn estimate_model(
    sentences: &[TaggedSentence],
    config: &EstimatorConfig,
) -> Result<HmmModel, HmmError> {
    config.validate()?;

    let sentences: Vec<&TaggedSentence> = sentences.iter().filter(|s| !s.is_empty()).collect();
    if sentences.is_empty() {
        return Err(HmmError::EmptyTrainingSet);
    }

    // Pass 1: build the alphabets in first-occurrence order.
    let mut states = Alphabet::new();
    let mut vocab = Alphabet::new();
    for sentence in &sentences {
        for (word, tag) in sentence.iter() {
            states.intern(tag);
            vocab.intern(word);
        }
    }
    let n = states.len();
    let v = vocab.len();

    // Pass 2: accumulate counts.
    let mut start_counts = vec![0.0_f64; n];
    let mut trans_counts = vec![0.0_f64; n * n];
    let mut emit_counts = vec![0.0_f64; n * v];
    for sentence in &sentences {
        let tag_ids: Vec<usize> = sentence
            .iter()
            .map(|(_, tag)| states.index_of(tag).expect("tag interned in pass 1"))
            .collect();

        start_counts[tag_ids[0]] += 1.0;
        for w in tag_ids.windows(2) {
            trans_counts[w[0] * n + w[1]] += 1.0;
        }
        for ((word, _), &tag) in sentence.iter().zip(&tag_ids) {
            let sym = vocab.index_of(word).expect("word interned in pass 1");
            emit_counts[tag * v + sym] += 1.0;
        }
    }

    // Normalise each conditioned distribution.
    let eps = match config.smoothing() {
        Smoothing::None => 0.0,
        Smoothing::Additive(e) => e,
    };
    let start = normalize_counts(&start_counts, eps);
    let mut transition = Vec::with_capacity(n * n);
    let mut emission = Vec::with_capacity(n * v);
    for s in 0..n {
        transition.extend(normalize_counts(&trans_counts[s * n..(s + 1) * n], eps));
        emission.extend(normalize_counts(&emit_counts[s * v..(s + 1) * v], eps));
    }

    debug!(
        n_sentences = sentences.len(),
        n_states = n,
        n_symbols = v,
        "estimated HMM parameters"
    );

    HmmModel::from_parts(states, vocab, start, transition, emission)
}

/// Normalises one count row with additive pseudo-count `eps`.
///
/// Each entry becomes `(count + eps) / (total + k * eps)` where `k` is the
/// row length. A row with zero total mass falls back to uniform.
fn normalize_counts(counts: &[f64], eps: f64) -> Vec<f64> {
    let k = counts.len() as f64;
    let total: f64 = counts.iter().sum::<f64>() + k * eps;
    if total > 0.0 {
        counts.iter().map(|&c| (c + eps) / total).collect()
    } else {
        counts.iter().map(|_| 1.0 / k).collect()
    }
}
