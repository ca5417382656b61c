//! Configuration for parameter estimation.

use crate::error::HmmError;

/// Zero-count policy applied before normalising count tables.
///
/// An unseen (state, state) or (state, observation) pair has a raw count of
/// zero; whether that becomes probability zero or a small smoothed mass is an
/// explicit choice, not a hidden constant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Smoothing {
    /// Normalise raw counts as-is. Unseen pairs get probability 0.0 exactly.
    ///
    /// Suitable when the training data is known to cover every pair the
    /// decoder will see, e.g. the worked health example.
    None,
    /// Additive (Laplace) smoothing: the pseudo-count is added to every
    /// start, transition, and emission count before normalising, so every
    /// pair over the observed alphabets keeps non-zero mass.
    Additive(f64),
}

/// Configuration for [`estimate_model`](crate::estimate::estimate_model).
///
/// # Example
///
/// ```
/// use hermes_hmm::{EstimatorConfig, Smoothing};
///
/// let config = EstimatorConfig::new().with_smoothing(Smoothing::Additive(0.5));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct EstimatorConfig {
    smoothing: Smoothing,
}

impl EstimatorConfig {
    /// Creates a configuration with defaults.
    ///
    /// Default: `smoothing = Smoothing::None`.
    pub fn new() -> Self {
        Self {
            smoothing: Smoothing::None,
        }
    }

    /// Sets the zero-count policy.
    pub fn with_smoothing(mut self, smoothing: Smoothing) -> Self {
        self.smoothing = smoothing;
        self
    }

    /// Returns the zero-count policy.
    pub fn smoothing(&self) -> Smoothing {
        self.smoothing
    }

    /// Validates this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HmmError::InvalidSmoothing`] if an additive pseudo-count is
    /// non-finite or non-positive.
    pub fn validate(&self) -> Result<(), HmmError> {
        if let Smoothing::Additive(eps) = self.smoothing {
            if !eps.is_finite() || eps <= 0.0 {
                return Err(HmmError::InvalidSmoothing { value: eps });
            }
        }
        Ok(())
    }
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self::new()
    }
}
