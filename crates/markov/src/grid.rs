//! Discrete state grids.

use serde::Serialize;

use crate::error::DiscretizeError;

/// Strictly increasing grid of state values, symmetric about zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Grid {
    values: Vec<f64>,
}

impl Grid {
    /// Builds `n` equally spaced points on `[-half_width, half_width]`.
    ///
    /// The lower half is computed as `-half_width + i * step` and mirrored,
    /// so `grid[i] == -grid[n - 1 - i]` holds exactly and the middle point
    /// of an odd grid is exactly 0. A single-point grid is `[0.0]`.
    ///
    /// Fails with [`DiscretizeError::DegenerateGrid`] when the points are not
    /// finite and strictly increasing, e.g. an overflowing half-width or one
    /// so small that neighbouring points round together.
    pub(crate) fn symmetric(n: usize, half_width: f64) -> Result<Self, DiscretizeError> {
        let mut values = vec![0.0; n];
        if n > 1 {
            let step = 2.0 * half_width / (n - 1) as f64;
            for i in 0..n / 2 {
                let v = -half_width + i as f64 * step;
                values[i] = v;
                values[n - 1 - i] = -v;
            }
        }
        let ordered = values.windows(2).all(|w| w[0] < w[1]);
        if !ordered || values.iter().any(|v| !v.is_finite()) {
            return Err(DiscretizeError::DegenerateGrid { n, half_width });
        }
        Ok(Self { values })
    }

    /// Returns the grid values in increasing order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Returns the number of grid points.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the grid has no points.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the value at `index`, or `None` if out of range.
    pub fn get(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied()
    }

    /// Returns the distance between neighbouring points (0 for a single point).
    pub fn step(&self) -> f64 {
        match self.values.as_slice() {
            [first, .., last] => (last - first) / (self.values.len() - 1) as f64,
            _ => 0.0,
        }
    }
}
