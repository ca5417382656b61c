//! # hermes-corpus
//!
//! Read tagged training corpora from tab-separated text files. Each line is
//! `word<TAB>tag`; blank lines delimit sentences. Bridges files into the
//! `Vec<(String, String)>` sentences the estimator consumes.

mod error;
mod reader;

pub use error::CorpusError;
pub use reader::{Sentence, parse_corpus, read_corpus};
