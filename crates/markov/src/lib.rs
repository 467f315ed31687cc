//! Finite-state Markov chain approximations of AR(1) processes.
//!
//! Discretizes `z' = rho * z + e`, `e ~ N(0, sigma_e^2)`, into a grid of
//! `n` states and an `n x n` transition matrix, using either Tauchen's
//! (1986) or Rouwenhorst's (1995) method.
//!
//! # Pipeline
//!
//! ```text
//!  ┌──────────────┐     ┌──────────────────────┐     ┌──────────────────┐
//!  │  Ar1Params   │────▶│  tauchen /           │────▶│  MarkovChain     │
//!  │  (validate)  │     │  rouwenhorst         │     │  grid + matrix   │
//!  └──────────────┘     └──────────────────────┘     └──────────────────┘
//!                                                       │          │
//!                                                   moments()  simulate_path()
//! ```
//!
//! # Quick start
//!
//! ```rust
//! use arkov_markov::{Ar1Params, Method, discretize_tauchen};
//!
//! let chain = discretize_tauchen(5, 0.95, 0.007, 3.0).unwrap();
//! assert_eq!(chain.grid().len(), 5);
//!
//! let params = Ar1Params::new(9, 0.9, 0.01);
//! let chain = Method::Rouwenhorst.discretize(&params).unwrap();
//! let moments = chain.moments().unwrap();
//! assert!((moments.autocorrelation.unwrap() - 0.9).abs() < 1e-9);
//! ```

pub mod chain;
pub mod error;
pub mod grid;
pub mod method;
pub mod params;
pub mod rouwenhorst;
pub mod simulate;
pub mod tauchen;
pub mod transition;

pub use chain::{ChainMoments, MarkovChain};
pub use error::DiscretizeError;
pub use grid::Grid;
pub use method::Method;
pub use params::Ar1Params;
pub use rouwenhorst::{discretize_rouwenhorst, rouwenhorst};
pub use simulate::{simulate_path, simulate_path_into};
pub use tauchen::{discretize_tauchen, tauchen};
pub use transition::TransitionMatrix;
