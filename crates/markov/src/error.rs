//! Error types for the arkov-markov crate.

/// Error type for all fallible operations in the arkov-markov crate.
///
/// Parameter variants are raised eagerly, before any arithmetic, so a
/// discretizer never returns a chain containing NaN.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DiscretizeError {
    /// Returned when the number of grid points is below the method minimum.
    #[error("too few states: got {n}, need at least {min}")]
    TooFewStates {
        /// Number of states requested.
        n: usize,
        /// Minimum number of states for the method.
        min: usize,
    },

    /// Returned when the AR(1) coefficient is outside the open interval (-1, 1).
    #[error("non-stationary process: rho = {rho} (must satisfy |rho| < 1)")]
    NonStationary {
        /// The offending AR(1) coefficient.
        rho: f64,
    },

    /// Returned when the innovation standard deviation is not positive.
    #[error("invalid innovation std: sigma_e = {sigma_e} (must be > 0)")]
    InvalidSigma {
        /// The offending standard deviation.
        sigma_e: f64,
    },

    /// Returned when the Tauchen grid span is not positive.
    #[error("invalid grid span: m = {m} (must be > 0)")]
    InvalidSpan {
        /// The offending number of standard deviations.
        m: f64,
    },

    /// Returned when a parameter is NaN or infinite.
    #[error("parameter {name} is not finite")]
    NonFiniteParameter {
        /// Name of the parameter.
        name: &'static str,
    },

    /// Returned when the grid half-width cannot hold `n` distinct finite points.
    #[error("degenerate grid: {n} states on +/-{half_width} are not finite and strictly increasing")]
    DegenerateGrid {
        /// Number of grid points.
        n: usize,
        /// Half-width of the grid.
        half_width: f64,
    },

    /// Returned when a state index is outside `0..n`.
    #[error("invalid state index {index} for a chain with {n} states")]
    InvalidState {
        /// The offending index.
        index: usize,
        /// Number of states in the chain.
        n: usize,
    },

    /// Returned when a pre-allocated buffer has the wrong length.
    #[error("buffer length mismatch: expected {expected}, got {got}")]
    BufferLengthMismatch {
        /// Expected buffer length.
        expected: usize,
        /// Actual buffer length.
        got: usize,
    },

    /// Returned when a transition matrix is not row-stochastic.
    #[error("invalid transition matrix: {reason}")]
    InvalidMatrix {
        /// Description of the problem.
        reason: String,
    },

    /// Returned when the stationary-distribution system has no unique solution.
    #[error("stationary distribution system is singular")]
    SingularSystem,
}
