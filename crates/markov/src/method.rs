//! Discretization method selection.

use std::fmt;

use serde::Serialize;

use crate::chain::MarkovChain;
use crate::error::DiscretizeError;
use crate::params::Ar1Params;
use crate::rouwenhorst::rouwenhorst;
use crate::tauchen::tauchen;

/// Available discretization methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    /// Tauchen (1986): uniform grid over `±m` standard deviations.
    Tauchen,
    /// Rouwenhorst (1995): recursive construction over `±sqrt(n-1)` standard deviations.
    Rouwenhorst,
}

impl Method {
    /// Both methods in declaration order.
    pub const ALL: [Method; 2] = [Self::Tauchen, Self::Rouwenhorst];

    /// Runs this method on `params`.
    pub fn discretize(self, params: &Ar1Params) -> Result<MarkovChain, DiscretizeError> {
        match self {
            Self::Tauchen => tauchen(params),
            Self::Rouwenhorst => rouwenhorst(params),
        }
    }

    /// Smallest grid this method accepts.
    pub fn min_states(self) -> usize {
        match self {
            Self::Tauchen => 2,
            Self::Rouwenhorst => 1,
        }
    }

    /// Lowercase method name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Tauchen => "tauchen",
            Self::Rouwenhorst => "rouwenhorst",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
