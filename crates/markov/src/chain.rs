//! Discretized Markov chains and their implied moments.

use serde::Serialize;

use crate::error::DiscretizeError;
use crate::grid::Grid;
use crate::transition::TransitionMatrix;

/// A finite-state Markov chain approximating an AR(1) process.
///
/// Produced fresh by each discretizer call; holds no state beyond its data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkovChain {
    grid: Grid,
    matrix: TransitionMatrix,
}

/// Unconditional moments implied by a chain under its stationary distribution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChainMoments {
    /// Stationary mean of the state value.
    pub mean: f64,
    /// Stationary standard deviation of the state value.
    pub sd: f64,
    /// Lag-1 autocorrelation; `None` when the stationary variance is zero.
    pub autocorrelation: Option<f64>,
}

impl MarkovChain {
    pub(crate) fn new(grid: Grid, matrix: TransitionMatrix) -> Self {
        debug_assert_eq!(grid.len(), matrix.n());
        Self { grid, matrix }
    }

    /// Returns the number of states.
    pub fn n(&self) -> usize {
        self.grid.len()
    }

    /// Returns the state grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the transition matrix.
    pub fn matrix(&self) -> &TransitionMatrix {
        &self.matrix
    }

    /// Consumes the chain, returning its grid and matrix.
    pub fn into_parts(self) -> (Grid, TransitionMatrix) {
        (self.grid, self.matrix)
    }

    /// Maps a path of state indices to grid values.
    ///
    /// # Errors
    ///
    /// Returns [`DiscretizeError::InvalidState`] for an index `>= n`.
    pub fn values(&self, path: &[usize]) -> Result<Vec<f64>, DiscretizeError> {
        let mut out = vec![0.0; path.len()];
        self.values_into(path, &mut out)?;
        Ok(out)
    }

    /// Maps a path of state indices to grid values in a pre-allocated buffer.
    ///
    /// # Errors
    ///
    /// Returns [`DiscretizeError::BufferLengthMismatch`] if
    /// `out.len() != path.len()`, or [`DiscretizeError::InvalidState`] for an
    /// index `>= n`.
    pub fn values_into(&self, path: &[usize], out: &mut [f64]) -> Result<(), DiscretizeError> {
        if out.len() != path.len() {
            return Err(DiscretizeError::BufferLengthMismatch {
                expected: path.len(),
                got: out.len(),
            });
        }
        for (slot, &index) in out.iter_mut().zip(path) {
            *slot = self
                .grid
                .get(index)
                .ok_or(DiscretizeError::InvalidState {
                    index,
                    n: self.n(),
                })?;
        }
        Ok(())
    }

    /// Computes the stationary mean, standard deviation and lag-1
    /// autocorrelation implied by the chain.
    ///
    /// # Errors
    ///
    /// Propagates [`DiscretizeError::SingularSystem`] from
    /// [`TransitionMatrix::stationary_distribution`].
    pub fn moments(&self) -> Result<ChainMoments, DiscretizeError> {
        let pi = self.matrix.stationary_distribution()?;
        let z = self.grid.values();

        let mean: f64 = pi.iter().zip(z).map(|(p, zi)| p * zi).sum();
        let second: f64 = pi.iter().zip(z).map(|(p, zi)| p * zi * zi).sum();
        let variance = (second - mean * mean).max(0.0);

        // E[z_t * z_{t+1}] = sum_i pi_i z_i E[z' | z_i]
        let cross: f64 = self
            .matrix
            .rows()
            .zip(pi.iter().zip(z))
            .map(|(row, (p, zi))| {
                let cond_mean: f64 = row.iter().zip(z).map(|(q, zj)| q * zj).sum();
                p * zi * cond_mean
            })
            .sum();

        let autocorrelation = if variance > 0.0 {
            Some((cross - mean * mean) / variance)
        } else {
            None
        };

        Ok(ChainMoments {
            mean,
            sd: variance.sqrt(),
            autocorrelation,
        })
    }
}
