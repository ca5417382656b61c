//! Ordered symbol alphabets for states and observations.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// An ordered, deduplicated set of symbols with index lookup.
///
/// Insertion order is the canonical order of the alphabet. For hidden states
/// this order is load-bearing: the Viterbi decoder breaks probability ties by
/// taking the earliest state in it, so two models built from the same data in
/// the same order decode identically.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct Alphabet {
    symbols: Vec<String>,
    index: HashMap<String, usize>,
}

impl Alphabet {
    /// Creates an empty alphabet.
    pub fn new() -> Self {
        Self {
            symbols: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Returns the index of `symbol`, inserting it at the end if absent.
    pub fn intern(&mut self, symbol: &str) -> usize {
        if let Some(&i) = self.index.get(symbol) {
            return i;
        }
        let i = self.symbols.len();
        self.symbols.push(symbol.to_string());
        self.index.insert(symbol.to_string(), i);
        i
    }

    /// Returns the index of `symbol`, or `None` if it is not in the alphabet.
    pub fn index_of(&self, symbol: &str) -> Option<usize> {
        self.index.get(symbol).copied()
    }

    /// Returns the symbol at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn symbol(&self, index: usize) -> &str {
        &self.symbols[index]
    }

    /// Number of symbols in the alphabet.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Returns `true` if the alphabet contains no symbols.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Iterates over the symbols in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.symbols.iter().map(String::as_str)
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Vec<String>> for Alphabet {
    /// Rebuilds the index map; later duplicates are dropped.
    fn from(symbols: Vec<String>) -> Self {
        let mut alphabet = Alphabet::new();
        for s in &symbols {
            alphabet.intern(s);
        }
        alphabet
    }
}

impl From<Alphabet> for Vec<String> {
    fn from(alphabet: Alphabet) -> Self {
        alphabet.symbols
    }
}

impl FromIterator<String> for Alphabet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<'a> FromIterator<&'a str> for Alphabet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut alphabet = Alphabet::new();
        for s in iter {
            alphabet.intern(s);
        }
        alphabet
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intern_preserves_insertion_order() {
        let mut a = Alphabet::new();
        assert_eq!(a.intern("Healthy"), 0);
        assert_eq!(a.intern("Fever"), 1);
        assert_eq!(a.intern("Healthy"), 0);
        assert_eq!(a.len(), 2);
        assert_eq!(a.symbol(0), "Healthy");
        assert_eq!(a.symbol(1), "Fever");
    }

    #[test]
    fn index_of_missing_symbol() {
        let a: Alphabet = ["normal", "cold"].into_iter().collect();
        assert_eq!(a.index_of("cold"), Some(1));
        assert_eq!(a.index_of("dizzy"), None);
    }

    #[test]
    fn iter_in_canonical_order() {
        let a: Alphabet = ["NN", "VB", "DT"].into_iter().collect();
        let collected: Vec<&str> = a.iter().collect();
        assert_eq!(collected, vec!["NN", "VB", "DT"]);
    }

    #[test]
    fn from_vec_drops_duplicates() {
        let a = Alphabet::from(vec!["a".to_string(), "b".to_string(), "a".to_string()]);
        assert_eq!(a.len(), 2);
        assert_eq!(a.index_of("a"), Some(0));
        assert_eq!(a.index_of("b"), Some(1));
    }

    #[test]
    fn empty_alphabet() {
        let a = Alphabet::new();
        assert!(a.is_empty());
        assert_eq!(a.len(), 0);
        assert_eq!(a.index_of("x"), None);
    }

    #[test]
    fn serde_round_trip_rebuilds_index() {
        let a: Alphabet = ["Healthy", "Fever"].into_iter().collect();
        let json = serde_json::to_string(&a).unwrap();
        assert_eq!(json, r#"["Healthy","Fever"]"#);
        let b: Alphabet = serde_json::from_str(&json).unwrap();
        assert_eq!(b.index_of("Fever"), Some(1));
        assert_eq!(b.symbol(0), "Healthy");
    }
}
