//! AR(1) process parameters.

use serde::Serialize;

use crate::error::DiscretizeError;

/// Default number of grid points.
pub const DEFAULT_N: usize = 5;
/// Default AR(1) coefficient.
pub const DEFAULT_RHO: f64 = 0.95;
/// Default innovation standard deviation.
pub const DEFAULT_SIGMA_E: f64 = 0.007;
/// Default Tauchen grid span, in unconditional standard deviations.
pub const DEFAULT_SPAN: f64 = 3.0;

/// Parameters of the AR(1) process `z' = rho * z + e`, `e ~ N(0, sigma_e^2)`,
/// together with the size of the discrete grid.
///
/// The record is immutable once built; use the builder methods to derive
/// variants. `m` is only read by the Tauchen method.
///
/// # Example
///
/// ```
/// use arkov_markov::Ar1Params;
///
/// let params = Ar1Params::new(7, 0.9, 0.01).with_span(2.5);
/// assert!(params.validate().is_ok());
/// assert_eq!(params.n(), 7);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Ar1Params {
    n: usize,
    rho: f64,
    sigma_e: f64,
    m: f64,
}

impl Ar1Params {
    /// Creates a parameter record with the default Tauchen span `m = 3`.
    pub fn new(n: usize, rho: f64, sigma_e: f64) -> Self {
        Self {
            n,
            rho,
            sigma_e,
            m: DEFAULT_SPAN,
        }
    }

    /// Sets the Tauchen grid span (number of unconditional standard deviations).
    pub fn with_span(mut self, m: f64) -> Self {
        self.m = m;
        self
    }

    /// Sets the number of grid points.
    pub fn with_n(mut self, n: usize) -> Self {
        self.n = n;
        self
    }

    /// Returns the number of grid points.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Returns the AR(1) coefficient.
    pub fn rho(&self) -> f64 {
        self.rho
    }

    /// Returns the innovation standard deviation.
    pub fn sigma_e(&self) -> f64 {
        self.sigma_e
    }

    /// Returns the Tauchen grid span.
    pub fn m(&self) -> f64 {
        self.m
    }

    /// Unconditional standard deviation of the process,
    /// `sigma_e / sqrt(1 - rho^2)`.
    ///
    /// Only meaningful once [`validate`](Self::validate) has passed.
    pub fn sigma_z(&self) -> f64 {
        self.sigma_e / (1.0 - self.rho * self.rho).sqrt()
    }

    /// Validates the process parameters shared by every method.
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`DiscretizeError::TooFewStates`] | `n == 0` |
    /// | [`DiscretizeError::NonFiniteParameter`] | `rho` or `sigma_e` is NaN or infinite |
    /// | [`DiscretizeError::NonStationary`] | `abs(rho) >= 1` |
    /// | [`DiscretizeError::InvalidSigma`] | `sigma_e <= 0` |
    /// | [`DiscretizeError::NonFiniteParameter`] | `sigma_z` overflows |
    pub fn validate(&self) -> Result<(), DiscretizeError> {
        self.validate_process(1)
    }

    /// Checks `n >= min_states` and the process invariants.
    pub(crate) fn validate_process(&self, min_states: usize) -> Result<(), DiscretizeError> {
        if self.n < min_states {
            return Err(DiscretizeError::TooFewStates {
                n: self.n,
                min: min_states,
            });
        }
        if !self.rho.is_finite() {
            return Err(DiscretizeError::NonFiniteParameter { name: "rho" });
        }
        if !self.sigma_e.is_finite() {
            return Err(DiscretizeError::NonFiniteParameter { name: "sigma_e" });
        }
        if self.rho.abs() >= 1.0 {
            return Err(DiscretizeError::NonStationary { rho: self.rho });
        }
        if self.sigma_e <= 0.0 {
            return Err(DiscretizeError::InvalidSigma {
                sigma_e: self.sigma_e,
            });
        }
        if !self.sigma_z().is_finite() {
            return Err(DiscretizeError::NonFiniteParameter { name: "sigma_z" });
        }
        Ok(())
    }

    /// Checks the Tauchen span `m`.
    pub(crate) fn validate_span(&self) -> Result<(), DiscretizeError> {
        if !self.m.is_finite() {
            return Err(DiscretizeError::NonFiniteParameter { name: "m" });
        }
        if self.m <= 0.0 {
            return Err(DiscretizeError::InvalidSpan { m: self.m });
        }
        Ok(())
    }
}

impl Default for Ar1Params {
    /// Standard quarterly calibration of US productivity:
    /// `n = 5`, `rho = 0.95`, `sigma_e = 0.007`, `m = 3`.
    fn default() -> Self {
        Self::new(DEFAULT_N, DEFAULT_RHO, DEFAULT_SIGMA_E)
    }
}
