//! Row-stochastic transition matrices.

use serde::{Serialize, Serializer};

use crate::error::DiscretizeError;

/// Tolerance on row sums accepted by [`TransitionMatrix::validate`].
pub const ROW_SUM_TOL: f64 = 1e-9;

/// Slack allowed on entries just outside `[0, 1]` from rounding.
const ENTRY_TOL: f64 = 1e-12;

/// Pivots smaller than this mark the stationary system as singular.
const PIVOT_TOL: f64 = 1e-14;

/// An `n x n` row-stochastic transition matrix.
///
/// Entry `(i, j)` is the probability of moving from state `i` to state `j`.
/// Storage is a single row-major `Vec<f64>`.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionMatrix {
    n: usize,
    probs: Vec<f64>,
}

impl TransitionMatrix {
    /// An `n x n` matrix of zeros.
    pub(crate) fn zeros(n: usize) -> Self {
        Self {
            n,
            probs: vec![0.0; n * n],
        }
    }

    /// Wraps row-major storage of length `n * n`.
    pub(crate) fn from_row_major(n: usize, probs: Vec<f64>) -> Self {
        debug_assert_eq!(probs.len(), n * n);
        Self { n, probs }
    }

    /// Builds a matrix from explicit rows and validates it.
    ///
    /// # Errors
    ///
    /// Returns [`DiscretizeError::InvalidMatrix`] if `rows` is empty, not
    /// square, or not row-stochastic.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self, DiscretizeError> {
        let n = rows.len();
        if n == 0 {
            return Err(DiscretizeError::InvalidMatrix {
                reason: "matrix has no rows".to_string(),
            });
        }
        let mut probs = Vec::with_capacity(n * n);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != n {
                return Err(DiscretizeError::InvalidMatrix {
                    reason: format!("row {i} has {} entries, expected {n}", row.len()),
                });
            }
            probs.extend_from_slice(row);
        }
        let m = Self { n, probs };
        m.validate()?;
        Ok(m)
    }

    /// Returns the number of states.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Returns the probability of moving from state `from` to state `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is `>= n`.
    pub fn prob(&self, from: usize, to: usize) -> f64 {
        assert!(from < self.n && to < self.n, "index out of range");
        self.probs[from * self.n + to]
    }

    /// Returns the transition probabilities out of state `from`.
    ///
    /// # Panics
    ///
    /// Panics if `from >= n`.
    pub fn row(&self, from: usize) -> &[f64] {
        &self.probs[from * self.n..(from + 1) * self.n]
    }

    /// Iterates over the rows in state order.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.probs.chunks_exact(self.n)
    }

    pub(crate) fn set(&mut self, from: usize, to: usize, p: f64) {
        self.probs[from * self.n + to] = p;
    }

    pub(crate) fn row_mut(&mut self, from: usize) -> &mut [f64] {
        &mut self.probs[from * self.n..(from + 1) * self.n]
    }

    /// Validates that the matrix is row-stochastic.
    ///
    /// Checks that all values are finite, in `[0, 1]`, and that each row
    /// sums to 1.0 within [`ROW_SUM_TOL`].
    pub fn validate(&self) -> Result<(), DiscretizeError> {
        for (i, row) in self.rows().enumerate() {
            let mut sum = 0.0;
            for (j, &p) in row.iter().enumerate() {
                if !p.is_finite() {
                    return Err(DiscretizeError::InvalidMatrix {
                        reason: format!("probs[{i}][{j}] is not finite: {p}"),
                    });
                }
                if !(-ENTRY_TOL..=1.0 + ENTRY_TOL).contains(&p) {
                    return Err(DiscretizeError::InvalidMatrix {
                        reason: format!("probs[{i}][{j}] = {p} is outside [0, 1]"),
                    });
                }
                sum += p;
            }
            if (sum - 1.0).abs() > ROW_SUM_TOL {
                return Err(DiscretizeError::InvalidMatrix {
                    reason: format!("row {i} sums to {sum}, expected ~1.0"),
                });
            }
        }
        Ok(())
    }

    /// Samples the next state given the current state.
    ///
    /// Draws a uniform random number and walks the row's cumulative
    /// distribution, returning the first state whose cumulative probability
    /// meets or exceeds the draw. Falls back to the last state if rounding
    /// prevents a match.
    ///
    /// # Panics
    ///
    /// Panics if `from >= n`.
    pub fn sample(&self, from: usize, rng: &mut impl rand::Rng) -> usize {
        let u: f64 = rng.random();
        let mut cumulative = 0.0;
        for (j, &p) in self.row(from).iter().enumerate() {
            cumulative += p;
            if cumulative >= u {
                return j;
            }
        }
        self.n - 1
    }

    /// Solves for the stationary distribution `pi` with `pi P = pi`, `sum(pi) = 1`.
    ///
    /// The system `(P^T - I) pi = 0` has its last equation replaced by the
    /// normalisation and is solved by Gaussian elimination with partial
    /// pivoting. Tiny negative entries from rounding are clamped to zero and
    /// the result renormalised.
    ///
    /// # Errors
    ///
    /// Returns [`DiscretizeError::SingularSystem`] if the chain has no unique
    /// stationary distribution (e.g. it is reducible).
    pub fn stationary_distribution(&self) -> Result<Vec<f64>, DiscretizeError> {
        let n = self.n;

        // a[r][c] = P[c][r] - delta(r, c), last row = ones.
        let mut a = vec![0.0; n * n];
        for r in 0..n - 1 {
            for c in 0..n {
                let delta = if r == c { 1.0 } else { 0.0 };
                a[r * n + c] = self.probs[c * n + r] - delta;
            }
        }
        a[(n - 1) * n..].fill(1.0);
        let mut b = vec![0.0; n];
        b[n - 1] = 1.0;

        let mut pi = solve_dense(n, a, b)?;

        for p in pi.iter_mut() {
            if *p < 0.0 {
                *p = 0.0;
            }
        }
        let total: f64 = pi.iter().sum();
        if !total.is_finite() || total <= 0.0 {
            return Err(DiscretizeError::SingularSystem);
        }
        for p in pi.iter_mut() {
            *p /= total;
        }
        Ok(pi)
    }
}

impl Serialize for TransitionMatrix {
    /// Serialises as a sequence of rows.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.rows())
    }
}

/// Solves `a x = b` for a dense row-major `n x n` system.
fn solve_dense(n: usize, mut a: Vec<f64>, mut b: Vec<f64>) -> Result<Vec<f64>, DiscretizeError> {
    for col in 0..n {
        // Partial pivoting
        let pivot_row = (col..n)
            .max_by(|&r1, &r2| a[r1 * n + col].abs().total_cmp(&a[r2 * n + col].abs()))
            .unwrap_or(col);
        if a[pivot_row * n + col].abs() < PIVOT_TOL {
            return Err(DiscretizeError::SingularSystem);
        }
        if pivot_row != col {
            for c in 0..n {
                a.swap(pivot_row * n + c, col * n + c);
            }
            b.swap(pivot_row, col);
        }

        let pivot = a[col * n + col];
        for r in col + 1..n {
            let factor = a[r * n + col] / pivot;
            if factor == 0.0 {
                continue;
            }
            for c in col..n {
                a[r * n + c] -= factor * a[col * n + c];
            }
            b[r] -= factor * b[col];
        }
    }

    // Back substitution
    let mut x = vec![0.0; n];
    for r in (0..n).rev() {
        let tail: f64 = (r + 1..n).map(|c| a[r * n + c] * x[c]).sum();
        x[r] = (b[r] - tail) / a[r * n + r];
    }
    Ok(x)
}
