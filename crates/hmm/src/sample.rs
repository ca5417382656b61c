//! Sampling observation sequences from a model.

use crate::model::HmmModel;

/// Draws a hidden-state path and observation sequence of length `len`.
///
/// The first state is drawn from the start distribution, each following state
/// from the previous state's transition row, and each observation from its
/// state's emission row. Returns `(states, observations)` as index vectors;
/// both are empty when `len == 0`.
///
/// Deterministic for a seeded RNG, which is how the tests use it.
pub fn sample_sequence(
    model: &HmmModel,
    len: usize,
    rng: &mut impl rand::Rng,
) -> (Vec<usize>, Vec<usize>) {
    let mut states = Vec::with_capacity(len);
    let mut obs = Vec::with_capacity(len);

    let mut prev: Option<usize> = None;
    for _ in 0..len {
        let state = match prev {
            None => {
                let start: Vec<f64> = (0..model.n_states()).map(|s| model.start(s)).collect();
                sample_index(&start, rng)
            }
            Some(p) => sample_index(model.transition_row(p), rng),
        };
        states.push(state);
        obs.push(sample_index(model.emission_row(state), rng));
        prev = Some(state);
    }

    (states, obs)
}

/// Samples an index from a probability row, using cumulative CDF.
///
/// Draws a uniform random number and walks the row's cumulative distribution,
/// returning the first index whose cumulative probability meets or exceeds
/// the draw. Falls back to the last index if rounding prevents a match.
fn sample_index(row: &[f64], rng: &mut impl rand::Rng) -> usize {
    let u: f64 = rng.random();
    let mut cumulative = 0.0;
    for (i, &p) in row.iter().enumerate() {
        cumulative += p;
        if cumulative >= u {
            return i;
        }
    }
    row.len() - 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::Alphabet;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    /// Model that always starts in state 0, self-loops, and emits symbol 0.
    fn one_hot_model() -> HmmModel {
        let states: Alphabet = ["a", "b"].into_iter().collect();
        let vocab: Alphabet = ["x", "y"].into_iter().collect();
        HmmModel::from_parts(
            states,
            vocab,
            vec![1.0, 0.0],
            vec![1.0, 0.0, 0.0, 1.0],
            vec![1.0, 0.0, 0.0, 1.0],
        )
        .unwrap()
    }

    fn mixed_model() -> HmmModel {
        let states: Alphabet = ["a", "b"].into_iter().collect();
        let vocab: Alphabet = ["x", "y"].into_iter().collect();
        HmmModel::from_parts(
            states,
            vocab,
            vec![0.5, 0.5],
            vec![0.8, 0.2, 0.3, 0.7],
            vec![0.6, 0.4, 0.1, 0.9],
        )
        .unwrap()
    }

    // 1. length_correctness
    #[test]
    fn length_correctness() {
        let model = mixed_model();
        let mut rng = StdRng::seed_from_u64(42);
        let (states, obs) = sample_sequence(&model, 100, &mut rng);
        assert_eq!(states.len(), 100);
        assert_eq!(obs.len(), 100);
        assert!(states.iter().all(|&s| s < model.n_states()));
        assert!(obs.iter().all(|&o| o < model.n_symbols()));
    }

    // 2. empty_length
    #[test]
    fn empty_length() {
        let model = mixed_model();
        let mut rng = StdRng::seed_from_u64(42);
        let (states, obs) = sample_sequence(&model, 0, &mut rng);
        assert!(states.is_empty());
        assert!(obs.is_empty());
    }

    // 3. deterministic_with_seed
    #[test]
    fn deterministic_with_seed() {
        let model = mixed_model();
        let mut rng1 = StdRng::seed_from_u64(123);
        let mut rng2 = StdRng::seed_from_u64(123);
        assert_eq!(
            sample_sequence(&model, 50, &mut rng1),
            sample_sequence(&model, 50, &mut rng2)
        );
    }

    // 4. one_hot_model_is_forced
    #[test]
    fn one_hot_model_is_forced() {
        let model = one_hot_model();
        let mut rng = StdRng::seed_from_u64(7);
        let (states, obs) = sample_sequence(&model, 20, &mut rng);
        assert!(states.iter().all(|&s| s == 0));
        assert!(obs.iter().all(|&o| o == 0));
    }

    // 5. sample_index_distribution
    #[test]
    fn sample_index_distribution() {
        let row = [0.5, 0.3, 0.2];
        let mut rng = StdRng::seed_from_u64(42);
        let n = 10_000;
        let mut counts = [0usize; 3];
        for _ in 0..n {
            counts[sample_index(&row, &mut rng)] += 1;
        }
        for (i, &expected) in row.iter().enumerate() {
            let freq = counts[i] as f64 / n as f64;
            assert!(
                (freq - expected).abs() < 0.03,
                "index {i} frequency {freq}, expected ~{expected}"
            );
        }
    }
}
