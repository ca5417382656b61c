//! The dynamic-programming table built by the Viterbi decoder.

/// One trellis cell: best path probability and its predecessor state.
#[derive(Debug, Clone, Copy)]
struct Cell {
    prob: f64,
    back: Option<usize>,
}

/// A dense `T x n_states` table of Viterbi DP cells.
///
/// Allocated once per decode call, sized up front, and owned exclusively by
/// that call's result. Cell `(t, s)` holds the probability of the best path
/// over `obs[0..=t]` ending in state `s`, and the predecessor state of that
/// path (`None` at `t = 0`).
#[derive(Debug, Clone)]
pub struct Trellis {
    n_states: usize,
    cells: Vec<Cell>,
}

impl Trellis {
    /// Creates a zeroed trellis for `t_len` time steps over `n_states` states.
    pub(crate) fn new(t_len: usize, n_states: usize) -> Self {
        Self {
            n_states,
            cells: vec![
                Cell {
                    prob: 0.0,
                    back: None,
                };
                t_len * n_states
            ],
        }
    }

    fn idx(&self, t: usize, s: usize) -> usize {
        assert!(s < self.n_states, "state {s} out of range ({})", self.n_states);
        let i = t * self.n_states + s;
        assert!(i < self.cells.len(), "time step {t} out of range");
        i
    }

    pub(crate) fn set(&mut self, t: usize, s: usize, prob: f64, back: Option<usize>) {
        let i = self.idx(t, s);
        self.cells[i] = Cell { prob, back };
    }

    /// Number of time steps (the observation sequence length).
    pub fn len(&self) -> usize {
        if self.n_states == 0 {
            0
        } else {
            self.cells.len() / self.n_states
        }
    }

    /// Returns `true` if the trellis has no time steps.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of states per time step.
    pub fn n_states(&self) -> usize {
        self.n_states
    }

    /// Best path probability for state `s` at time `t`.
    ///
    /// # Panics
    ///
    /// Panics if `t` or `s` is out of range.
    pub fn prob(&self, t: usize, s: usize) -> f64 {
        self.cells[self.idx(t, s)].prob
    }

    /// Backpointer for state `s` at time `t` (`None` at `t = 0`).
    ///
    /// # Panics
    ///
    /// Panics if `t` or `s` is out of range.
    pub fn back(&self, t: usize, s: usize) -> Option<usize> {
        self.cells[self.idx(t, s)].back
    }
}
