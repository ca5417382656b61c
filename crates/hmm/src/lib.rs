//! Discrete hidden Markov models: estimation and Viterbi decoding.
//!
//! This crate covers two tightly coupled pieces:
//!
//! - the **parameter estimator**, which turns a corpus of tagged sentences
//!   into normalised start, transition, and emission distributions with an
//!   explicit zero-count policy ([`Smoothing`]);
//! - the **Viterbi decoder**, which finds the most probable hidden-state path
//!   for an observation sequence by dynamic programming over a [`Trellis`],
//!   with deterministic first-in-state-order tie-breaking.
//!
//! # Pipeline
//!
//! ```text
//!  ┌──────────────┐     ┌────────────────┐     ┌──────────────────┐
//!  │   corpus      │────▶│   estimate     │────▶│     viterbi      │
//!  │ (sentences)   │     │ (count, norm)  │     │ (decode paths)   │
//!  └──────────────┘     └────────────────┘     └──────────────────┘
//! ```
//!
//! # Quick start
//!
//! ```
//! use hermes_hmm::{EstimatorConfig, estimate_model, decode_tokens};
//!
//! let corpus = vec![vec![
//!     ("the".to_string(), "DT".to_string()),
//!     ("dog".to_string(), "NN".to_string()),
//! ]];
//! let model = estimate_model(&corpus, &EstimatorConfig::new()).unwrap();
//! let decoded = decode_tokens(&model, &["the", "dog"]).unwrap();
//! assert_eq!(model.state_names(&decoded.path), vec!["DT", "NN"]);
//! ```
//!
//! Probabilities are plain products (no log-space, no renormalisation); see
//! [`decode`] for the underflow caveat on long sequences.

pub mod alphabet;
pub mod config;
pub mod error;
pub mod estimate;
pub mod model;
pub mod sample;
pub mod trellis;
pub mod viterbi;

pub use alphabet::Alphabet;
pub use config::{EstimatorConfig, Smoothing};
pub use error::HmmError;
pub use estimate::{TaggedSentence, estimate_model};
pub use model::HmmModel;
pub use sample::sample_sequence;
pub use trellis::Trellis;
pub use viterbi::{Decoded, decode, decode_tokens};
