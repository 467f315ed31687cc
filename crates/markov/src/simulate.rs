//! Markov chain path simulation.

use crate::error::DiscretizeError;
use crate::transition::TransitionMatrix;

/// Simulates a path of state indices.
///
/// # Arguments
///
/// * `matrix` - Transition matrix of the chain.
/// * `length` - Number of states to draw.
/// * `initial` - The state before the first simulated step.
/// * `rng` - Random number generator.
///
/// # Errors
///
/// Returns [`DiscretizeError::InvalidState`] if `initial >= matrix.n()`.
pub fn simulate_path(
    matrix: &TransitionMatrix,
    length: usize,
    initial: usize,
    rng: &mut impl rand::Rng,
) -> Result<Vec<usize>, DiscretizeError> {
    let mut out = vec![0; length];
    simulate_path_into(matrix, initial, rng, &mut out)?;
    Ok(out)
}

/// Simulates state indices into a pre-allocated buffer.
///
/// `out[0]` is the successor of `initial`; each later element is drawn from
/// the row of its predecessor.
///
/// # Errors
///
/// Returns [`DiscretizeError::InvalidState`] if `initial >= matrix.n()`.
pub fn simulate_path_into(
    matrix: &TransitionMatrix,
    initial: usize,
    rng: &mut impl rand::Rng,
    out: &mut [usize],
) -> Result<(), DiscretizeError> {
    if initial >= matrix.n() {
        return Err(DiscretizeError::InvalidState {
            index: initial,
            n: matrix.n(),
        });
    }
    let mut prev = initial;
    for slot in out.iter_mut() {
        let next = matrix.sample(prev, rng);
        *slot = next;
        prev = next;
    }
    Ok(())
}
