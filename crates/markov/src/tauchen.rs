//! Tauchen (1986) discretization.
//!
//! States sit on a uniform grid spanning `±m` unconditional standard
//! deviations. The probability of moving from `z_i` to `z_j` is the normal
//! mass of `rho * z_i + e` falling in the bin of half-width `d / 2` around
//! `z_j`; the first and last bins extend to `-inf` and `+inf`.

use arkov_stats::normal_cdf;
use tracing::debug;

use crate::chain::MarkovChain;
use crate::error::DiscretizeError;
use crate::grid::Grid;
use crate::params::Ar1Params;
use crate::transition::TransitionMatrix;

/// Discretizes an AR(1) process with Tauchen's method.
///
/// Convenience wrapper over [`tauchen`] taking the parameters directly.
///
/// # Example
///
/// ```
/// use arkov_markov::discretize_tauchen;
///
/// let chain = discretize_tauchen(5, 0.95, 0.007, 3.0).unwrap();
/// assert_eq!(chain.n(), 5);
/// assert!(chain.matrix().validate().is_ok());
/// ```
pub fn discretize_tauchen(
    n: usize,
    rho: f64,
    sigma_e: f64,
    m: f64,
) -> Result<MarkovChain, DiscretizeError> {
    tauchen(&Ar1Params::new(n, rho, sigma_e).with_span(m))
}

/// Discretizes an AR(1) process with Tauchen's method.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`DiscretizeError::TooFewStates`] | `n < 2` |
/// | [`DiscretizeError::NonFiniteParameter`] | `rho`, `sigma_e` or `m` is NaN or infinite |
/// | [`DiscretizeError::NonStationary`] | `abs(rho) >= 1` |
/// | [`DiscretizeError::InvalidSigma`] | `sigma_e <= 0` |
/// | [`DiscretizeError::InvalidSpan`] | `m <= 0` |
/// | [`DiscretizeError::DegenerateGrid`] | `m * sigma_z` overflows or is too small to separate `n` points |
#[tracing::instrument(skip_all, fields(n = params.n(), rho = params.rho(), m = params.m()))]
pub fn tauchen(params: &Ar1Params) -> Result<MarkovChain, DiscretizeError> {
    params.validate_process(2)?;
    params.validate_span()?;

    let n = params.n();
    let rho = params.rho();
    let sigma_e = params.sigma_e();
    let sigma_z = params.sigma_z();

    let z_max = params.m() * sigma_z;
    let grid = Grid::symmetric(n, z_max)?;
    let z = grid.values();
    let d = grid.step();
    let half = d / 2.0;

    // Bin j covers [edge[j - 1], edge[j]) with the outer edges at -inf / +inf.
    // Adjacent bins share one CDF value so every row telescopes to 1.
    let edges: Vec<f64> = z[..n - 1].iter().map(|&zj| zj + half).collect();
    let mut cdf_at = vec![0.0; n - 1];

    let mut matrix = TransitionMatrix::zeros(n);
    for (i, &zi) in z.iter().enumerate() {
        let mean = rho * zi;
        for (c, &edge) in cdf_at.iter_mut().zip(&edges) {
            *c = normal_cdf((edge - mean) / sigma_e);
        }
        let mut lower = 0.0;
        for j in 0..n {
            let upper = if j == n - 1 { 1.0 } else { cdf_at[j] };
            matrix.set(i, j, upper - lower);
            lower = upper;
        }
    }

    debug!(sigma_z, z_max, step = d, "tauchen chain built");
    Ok(MarkovChain::new(grid, matrix))
}
