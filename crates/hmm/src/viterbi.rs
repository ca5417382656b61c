//! Viterbi decoding: the most probable hidden-state path.

use tracing::debug;

use crate::error::HmmError;
use crate::model::HmmModel;
use crate::trellis::Trellis;

/// The result of a successful decode.
#[derive(Debug, Clone)]
pub struct Decoded {
    /// Most probable state sequence, one state index per observation.
    pub path: Vec<usize>,
    /// Joint probability of `path` given the observations.
    pub prob: f64,
    /// The full DP table, for inspection or display.
    pub trellis: Trellis,
}

/// Decodes the most probable state path for a sequence of vocabulary indices.
///
/// Probabilities are plain products with no per-step renormalisation, so they
/// shrink monotonically with the sequence length and can underflow to zero
/// for long inputs. Callers that need long sequences should work in log-space
/// instead; the plain product form is the baseline contract here.
///
/// Ties are broken deterministically: whenever two predecessor states yield
/// exactly equal products, the one earlier in the model's canonical state
/// order wins, and likewise for the final state selection.
///
/// # Errors
///
/// Returns [`HmmError::EmptyObservationSequence`] if `obs` is empty, and
/// [`HmmError::UnknownObservation`] if any index is outside the vocabulary.
pub fn decode(model: &HmmModel, obs: &[usize]) -> Result<Decoded, HmmError> {
    if obs.is_empty() {
        return Err(HmmError::EmptyObservationSequence);
    }
    for &o in obs {
        if o >= model.n_symbols() {
            return Err(HmmError::UnknownObservation {
                symbol: format!("#{o}"),
            });
        }
    }

    let n = model.n_states();
    let t_len = obs.len();
    let mut trellis = Trellis::new(t_len, n);

    // Initialisation.
    for s in 0..n {
        trellis.set(0, s, model.start(s) * model.emission(s, obs[0]), None);
    }

    // Recursion. Scanning predecessors in canonical order with a strict `>`
    // keeps the first maximum, so exact ties resolve to the earliest state.
    for t in 1..t_len {
        for s in 0..n {
            let mut best = f64::NEG_INFINITY;
            let mut best_prev = 0;
            for p in 0..n {
                let cand = trellis.prob(t - 1, p) * model.transition(p, s);
                if cand > best {
                    best = cand;
                    best_prev = p;
                }
            }
            trellis.set(t, s, best * model.emission(s, obs[t]), Some(best_prev));
        }
    }

    // Termination: first state in canonical order with the maximal final
    // probability.
    let mut last = 0;
    let mut prob = f64::NEG_INFINITY;
    for s in 0..n {
        let p = trellis.prob(t_len - 1, s);
        if p > prob {
            prob = p;
            last = s;
        }
    }

    // Backtrace.
    let mut path = vec![0usize; t_len];
    path[t_len - 1] = last;
    for t in (1..t_len).rev() {
        path[t - 1] = trellis
            .back(t, path[t])
            .expect("every cell past t=0 has a backpointer");
    }

    debug!(t_len, prob, "viterbi decode complete");

    Ok(Decoded {
        path,
        prob,
        trellis,
    })
}

/// Decodes a sequence of observation tokens.
///
/// Resolves each token through the model's vocabulary, then calls [`decode`].
///
/// # Errors
///
/// Returns [`HmmError::UnknownObservation`] naming the first token that is
/// not in the vocabulary, plus everything [`decode`] can return.
pub fn decode_tokens<S: AsRef<str>>(model: &HmmModel, tokens: &[S]) -> Result<Decoded, HmmError> {
    let obs = tokens
        .iter()
        .map(|t| model.symbol_index(t.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;
    decode(model, &obs)
}
