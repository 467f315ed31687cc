//! Rouwenhorst (1995) discretization.
//!
//! The grid spans `±sigma_z * sqrt(n - 1)` and the transition matrix is
//! grown one state at a time from the 2-state base `[[p, 1-p], [1-q, q]]`
//! with `p = q = (1 + rho) / 2`:
//!
//! ```text
//!  M_k = p * [M 0]  + (1-p) * [0 M]  + (1-q) * [0 0]  + q * [0 0]
//!            [0 0]            [0 0]            [M 0]        [0 M]
//! ```
//!
//! after which every interior row of `M_k` is halved. The chain matches the
//! conditional mean and variance of the process for any `n`.

use tracing::debug;

use crate::chain::MarkovChain;
use crate::error::DiscretizeError;
use crate::grid::Grid;
use crate::params::Ar1Params;
use crate::transition::TransitionMatrix;

/// Discretizes an AR(1) process with Rouwenhorst's method.
///
/// Convenience wrapper over [`rouwenhorst`] taking the parameters directly.
///
/// # Example
///
/// ```
/// use arkov_markov::discretize_rouwenhorst;
///
/// let chain = discretize_rouwenhorst(2, 0.95, 0.007).unwrap();
/// let row = chain.matrix().row(0);
/// assert!((row[0] - 0.975).abs() < 1e-12);
/// assert!((row[1] - 0.025).abs() < 1e-12);
/// ```
pub fn discretize_rouwenhorst(
    n: usize,
    rho: f64,
    sigma_e: f64,
) -> Result<MarkovChain, DiscretizeError> {
    rouwenhorst(&Ar1Params::new(n, rho, sigma_e))
}

/// Discretizes an AR(1) process with Rouwenhorst's method.
///
/// `n == 1` yields the degenerate chain with grid `[0.0]` and matrix `[[1]]`.
/// The span `m` of `params` is ignored.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`DiscretizeError::TooFewStates`] | `n == 0` |
/// | [`DiscretizeError::NonFiniteParameter`] | `rho` or `sigma_e` is NaN or infinite |
/// | [`DiscretizeError::NonStationary`] | `abs(rho) >= 1` |
/// | [`DiscretizeError::InvalidSigma`] | `sigma_e <= 0` |
/// | [`DiscretizeError::DegenerateGrid`] | `sigma_z * sqrt(n - 1)` overflows or underflows |
#[tracing::instrument(skip_all, fields(n = params.n(), rho = params.rho()))]
pub fn rouwenhorst(params: &Ar1Params) -> Result<MarkovChain, DiscretizeError> {
    params.validate_process(1)?;

    let n = params.n();
    let sigma_z = params.sigma_z();
    let z_max = sigma_z * ((n - 1) as f64).sqrt();
    let grid = Grid::symmetric(n, z_max)?;

    let p = (1.0 + params.rho()) / 2.0;
    let matrix = rouwenhorst_matrix(n, p, p);

    debug!(sigma_z, z_max, p, "rouwenhorst chain built");
    Ok(MarkovChain::new(grid, matrix))
}

/// Builds the `n x n` Rouwenhorst matrix for persistence parameters `p`, `q`.
fn rouwenhorst_matrix(n: usize, p: f64, q: f64) -> TransitionMatrix {
    if n == 1 {
        return TransitionMatrix::from_row_major(1, vec![1.0]);
    }

    let mut prev = TransitionMatrix::from_row_major(2, vec![p, 1.0 - p, 1.0 - q, q]);
    for k in 3..=n {
        let mut next = TransitionMatrix::zeros(k);
        for a in 0..k {
            for b in 0..k {
                let v = p * embedded(&prev, a, b, 0, 0)
                    + (1.0 - p) * embedded(&prev, a, b, 0, 1)
                    + (1.0 - q) * embedded(&prev, a, b, 1, 0)
                    + q * embedded(&prev, a, b, 1, 1);
                next.set(a, b, v);
            }
        }
        // Interior rows receive two unit-weight contributions.
        for a in 1..k - 1 {
            for v in next.row_mut(a) {
                *v /= 2.0;
            }
        }
        prev = next;
    }
    prev
}

/// Entry `(a, b)` of `m` embedded in a zero matrix one size larger at
/// offset `(row_off, col_off)`.
fn embedded(m: &TransitionMatrix, a: usize, b: usize, row_off: usize, col_off: usize) -> f64 {
    match (a.checked_sub(row_off), b.checked_sub(col_off)) {
        (Some(i), Some(j)) if i < m.n() && j < m.n() => m.prob(i, j),
        _ => 0.0,
    }
}
