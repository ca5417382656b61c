//! The probability table of a discrete hidden Markov model.

use serde::{Deserialize, Serialize};

use crate::alphabet::Alphabet;
use crate::error::HmmError;

/// Tolerance for checking that a conditioned distribution sums to 1.
pub const SUM_TOLERANCE: f64 = 1e-9;

/// A validated, immutable discrete hidden Markov model.
///
/// Holds the state and vocabulary alphabets together with the start,
/// transition, and emission distributions. Matrices are stored dense and
/// row-major: `transition[from * n_states + to]`,
/// `emission[state * n_symbols + symbol]`.
///
/// A model is validated once at construction and read-only afterwards; it can
/// serve any number of decode calls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HmmModel {
    /// Hidden states in canonical (tie-breaking) order.
    states: Alphabet,
    /// Observation vocabulary in first-seen order.
    vocab: Alphabet,
    /// Start probabilities, one per state.
    start: Vec<f64>,
    /// Row-major `n_states x n_states` transition matrix.
    transition: Vec<f64>,
    /// Row-major `n_states x n_symbols` emission matrix.
    emission: Vec<f64>,
}

impl HmmModel {
    /// Builds a model from its parts, validating dimensions and distributions.
    ///
    /// # Errors
    ///
    /// Returns [`HmmError::DimensionMismatch`] if any vector length does not
    /// match the alphabet sizes, and [`HmmError::MalformedDistribution`] if
    /// the alphabets are empty, any probability is non-finite or outside
    /// `[0, 1]`, or any conditioned distribution does not sum to 1 within
    /// [`SUM_TOLERANCE`].
    pub fn from_parts(
        states: Alphabet,
        vocab: Alphabet,
        start: Vec<f64>,
        transition: Vec<f64>,
        emission: Vec<f64>,
    ) -> Result<Self, HmmError> {
        let model = Self {
            states,
            vocab,
            start,
            transition,
            emission,
        };
        model.validate()?;
        Ok(model)
    }

    /// Validates that the model is internally consistent.
    ///
    /// Checks that the alphabets are non-empty, that every vector length
    /// matches the alphabet sizes, that all probabilities are finite and in
    /// `[0, 1]`, that the start distribution sums to 1, and that every
    /// transition and emission row sums to 1, all within [`SUM_TOLERANCE`].
    ///
    /// Deserialized models must pass through this before use: serde fills
    /// the fields directly, so this is the only guard against a JSON file
    /// with mismatched vector lengths.
    pub fn validate(&self) -> Result<(), HmmError> {
        let n = self.states.len();
        let v = self.vocab.len();

        if n == 0 {
            return Err(HmmError::MalformedDistribution {
                reason: "model has no states".to_string(),
            });
        }
        if v == 0 {
            return Err(HmmError::MalformedDistribution {
                reason: "model has an empty vocabulary".to_string(),
            });
        }
        if self.start.len() != n {
            return Err(HmmError::DimensionMismatch {
                name: "start",
                expected: n,
                got: self.start.len(),
            });
        }
        if self.transition.len() != n * n {
            return Err(HmmError::DimensionMismatch {
                name: "transition",
                expected: n * n,
                got: self.transition.len(),
            });
        }
        if self.emission.len() != n * v {
            return Err(HmmError::DimensionMismatch {
                name: "emission",
                expected: n * v,
                got: self.emission.len(),
            });
        }

        check_distribution(&self.start, "start")?;
        for s in 0..n {
            check_distribution(self.transition_row(s), &format!("transition[{}]", self.states.symbol(s)))?;
            check_distribution(self.emission_row(s), &format!("emission[{}]", self.states.symbol(s)))?;
        }
        Ok(())
    }

    /// Number of hidden states.
    pub fn n_states(&self) -> usize {
        self.states.len()
    }

    /// Number of observation symbols in the vocabulary.
    pub fn n_symbols(&self) -> usize {
        self.vocab.len()
    }

    /// The state alphabet, in canonical order.
    pub fn states(&self) -> &Alphabet {
        &self.states
    }

    /// The observation vocabulary.
    pub fn vocab(&self) -> &Alphabet {
        &self.vocab
    }

    /// Start probability of state `s`.
    pub fn start(&self, s: usize) -> f64 {
        self.start[s]
    }

    /// Probability of transitioning from state `from` to state `to`.
    pub fn transition(&self, from: usize, to: usize) -> f64 {
        self.transition[from * self.n_states() + to]
    }

    /// Probability that state `s` emits symbol `o`.
    pub fn emission(&self, s: usize, o: usize) -> f64 {
        self.emission[s * self.n_symbols() + o]
    }

    /// The outgoing transition distribution of state `s`.
    pub fn transition_row(&self, s: usize) -> &[f64] {
        let n = self.n_states();
        &self.transition[s * n..(s + 1) * n]
    }

    /// The emission distribution of state `s`.
    pub fn emission_row(&self, s: usize) -> &[f64] {
        let v = self.n_symbols();
        &self.emission[s * v..(s + 1) * v]
    }

    /// Resolves a state name to its index.
    ///
    /// # Errors
    ///
    /// Returns [`HmmError::UnknownState`] if the name is not in the state set.
    pub fn state_index(&self, name: &str) -> Result<usize, HmmError> {
        self.states
            .index_of(name)
            .ok_or_else(|| HmmError::UnknownState {
                symbol: name.to_string(),
            })
    }

    /// Resolves an observation symbol to its vocabulary index.
    ///
    /// # Errors
    ///
    /// Returns [`HmmError::UnknownObservation`] if the symbol is not in the
    /// vocabulary.
    pub fn symbol_index(&self, symbol: &str) -> Result<usize, HmmError> {
        self.vocab
            .index_of(symbol)
            .ok_or_else(|| HmmError::UnknownObservation {
                symbol: symbol.to_string(),
            })
    }

    /// Maps a path of state indices to state names.
    ///
    /// # Panics
    ///
    /// Panics if any index is out of range.
    pub fn state_names(&self, path: &[usize]) -> Vec<&str> {
        path.iter().map(|&s| self.states.symbol(s)).collect()
    }
}

/// Checks one probability distribution: finite, in `[0, 1]`, sums to ~1.
fn check_distribution(probs: &[f64], name: &str) -> Result<(), HmmError> {
    let mut sum = 0.0;
    for (i, &p) in probs.iter().enumerate() {
        if !p.is_finite() {
            return Err(HmmError::MalformedDistribution {
                reason: format!("{name}[{i}] is not finite: {p}"),
            });
        }
        if !(0.0..=1.0).contains(&p) {
            return Err(HmmError::MalformedDistribution {
                reason: format!("{name}[{i}] = {p} is outside [0, 1]"),
            });
        }
        sum += p;
    }
    if (sum - 1.0).abs() > SUM_TOLERANCE {
        return Err(HmmError::MalformedDistribution {
            reason: format!("{name} sums to {sum}, expected ~1.0"),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The Healthy/Fever model from the worked health-diagnosis example.
    fn health_model() -> HmmModel {
        let states: Alphabet = ["Healthy", "Fever"].into_iter().collect();
        let vocab: Alphabet = ["normal", "cold", "dizzy"].into_iter().collect();
        HmmModel::from_parts(
            states,
            vocab,
            vec![0.6, 0.4],
            vec![
                0.7, 0.3, // Healthy -> Healthy, Fever
                0.4, 0.6, // Fever   -> Healthy, Fever
            ],
            vec![
                0.5, 0.4, 0.1, // Healthy: normal, cold, dizzy
                0.1, 0.3, 0.6, // Fever:   normal, cold, dizzy
            ],
        )
        .unwrap()
    }

    #[test]
    fn accessors() {
        let m = health_model();
        assert_eq!(m.n_states(), 2);
        assert_eq!(m.n_symbols(), 3);
        assert!((m.start(0) - 0.6).abs() < 1e-12);
        assert!((m.transition(0, 1) - 0.3).abs() < 1e-12);
        assert!((m.transition(1, 0) - 0.4).abs() < 1e-12);
        assert!((m.emission(0, 2) - 0.1).abs() < 1e-12);
        assert!((m.emission(1, 2) - 0.6).abs() < 1e-12);
        assert_eq!(m.transition_row(0), &[0.7, 0.3]);
        assert_eq!(m.emission_row(1), &[0.1, 0.3, 0.6]);
    }

    #[test]
    fn name_lookups() {
        let m = health_model();
        assert_eq!(m.state_index("Fever").unwrap(), 1);
        assert_eq!(m.symbol_index("dizzy").unwrap(), 2);
        assert!(matches!(
            m.state_index("Dead"),
            Err(HmmError::UnknownState { .. })
        ));
        assert!(matches!(
            m.symbol_index("sneeze"),
            Err(HmmError::UnknownObservation { .. })
        ));
        assert_eq!(m.state_names(&[0, 0, 1]), vec!["Healthy", "Healthy", "Fever"]);
    }

    #[test]
    fn rejects_bad_start_sum() {
        let states: Alphabet = ["a", "b"].into_iter().collect();
        let vocab: Alphabet = ["x"].into_iter().collect();
        let err = HmmModel::from_parts(
            states,
            vocab,
            vec![0.5, 0.4],
            vec![0.5, 0.5, 0.5, 0.5],
            vec![1.0, 1.0],
        )
        .unwrap_err();
        assert!(matches!(err, HmmError::MalformedDistribution { .. }));
        assert!(err.to_string().contains("start"));
    }

    #[test]
    fn rejects_bad_transition_row() {
        let states: Alphabet = ["a", "b"].into_iter().collect();
        let vocab: Alphabet = ["x"].into_iter().collect();
        let err = HmmModel::from_parts(
            states,
            vocab,
            vec![0.5, 0.5],
            vec![0.9, 0.3, 0.5, 0.5], // first row sums to 1.2
            vec![1.0, 1.0],
        )
        .unwrap_err();
        assert!(err.to_string().contains("transition[a]"));
    }

    #[test]
    fn rejects_out_of_range_probability() {
        let states: Alphabet = ["a", "b"].into_iter().collect();
        let vocab: Alphabet = ["x"].into_iter().collect();
        let err = HmmModel::from_parts(
            states,
            vocab,
            vec![1.5, -0.5],
            vec![0.5, 0.5, 0.5, 0.5],
            vec![1.0, 1.0],
        )
        .unwrap_err();
        assert!(err.to_string().contains("outside [0, 1]"));
    }

    #[test]
    fn rejects_non_finite_probability() {
        let states: Alphabet = ["a"].into_iter().collect();
        let vocab: Alphabet = ["x"].into_iter().collect();
        let err = HmmModel::from_parts(states, vocab, vec![f64::NAN], vec![1.0], vec![1.0])
            .unwrap_err();
        assert!(err.to_string().contains("not finite"));
    }

    #[test]
    fn rejects_dimension_mismatch() {
        let states: Alphabet = ["a", "b"].into_iter().collect();
        let vocab: Alphabet = ["x"].into_iter().collect();
        let err = HmmModel::from_parts(
            states,
            vocab,
            vec![1.0], // should be length 2
            vec![0.5, 0.5, 0.5, 0.5],
            vec![1.0, 1.0],
        )
        .unwrap_err();
        assert!(matches!(
            err,
            HmmError::DimensionMismatch {
                name: "start",
                expected: 2,
                got: 1,
            }
        ));
    }

    #[test]
    fn rejects_empty_states() {
        let err = HmmModel::from_parts(
            Alphabet::new(),
            ["x"].into_iter().collect(),
            vec![],
            vec![],
            vec![],
        )
        .unwrap_err();
        assert!(err.to_string().contains("no states"));
    }

    #[test]
    fn serde_json_round_trip() {
        let m = health_model();
        let json = serde_json::to_string(&m).unwrap();
        let back: HmmModel = serde_json::from_str(&json).unwrap();
        back.validate().unwrap();
        assert_eq!(back.n_states(), 2);
        assert_eq!(back.state_index("Fever").unwrap(), 1);
        assert!((back.emission(1, 2) - 0.6).abs() < 1e-12);
    }

    #[test]
    fn validate_rejects_deserialized_short_vectors() {
        // serde bypasses from_parts, so validate() alone must catch this
        let json = r#"{
            "states": ["a", "b"],
            "vocab": ["x"],
            "start": [1.0],
            "transition": [0.5, 0.5, 0.5, 0.5],
            "emission": [1.0, 1.0]
        }"#;
        let m: HmmModel = serde_json::from_str(json).unwrap();
        match m.validate() {
            Err(HmmError::DimensionMismatch { name, expected, got }) => {
                assert_eq!(name, "start");
                assert_eq!(expected, 2);
                assert_eq!(got, 1);
            }
            other => panic!("expected DimensionMismatch, got {other:?}"),
        }
    }

    #[test]
    fn model_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<HmmModel>();
    }
}
