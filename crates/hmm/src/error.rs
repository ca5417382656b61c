//! Error types for the hermes-hmm crate.

/// Error type for all fallible operations in the hermes-hmm crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum HmmError {
    /// Returned when the estimator is given no (non-empty) sentences.
    #[error("training corpus contains no sentences")]
    EmptyTrainingSet,

    /// Returned when the decoder is given an empty observation sequence.
    #[error("observation sequence is empty")]
    EmptyObservationSequence,

    /// Returned when an observation is not in the model's vocabulary.
    #[error("unknown observation: '{symbol}'")]
    UnknownObservation {
        /// The observation symbol (or out-of-range index) that failed lookup.
        symbol: String,
    },

    /// Returned when a state name is not in the model's state set.
    #[error("unknown state: '{symbol}'")]
    UnknownState {
        /// The state name that failed lookup.
        symbol: String,
    },

    /// Returned when a probability distribution fails validation.
    #[error("malformed distribution: {reason}")]
    MalformedDistribution {
        /// Description of the problem.
        reason: String,
    },

    /// Returned when a smoothing pseudo-count is non-finite or non-positive.
    #[error("invalid smoothing epsilon: {value} (must be finite and > 0)")]
    InvalidSmoothing {
        /// The invalid pseudo-count.
        value: f64,
    },

    /// Returned when a model component has an unexpected length.
    #[error("dimension '{name}' mismatch: expected {expected}, got {got}")]
    DimensionMismatch {
        /// Name of the component.
        name: &'static str,
        /// Expected length.
        expected: usize,
        /// Actual length.
        got: usize,
    },
}
