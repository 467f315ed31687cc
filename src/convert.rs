//! Pure conversion functions: TOML config and CLI flags -> crate API types.

use anyhow::{Result, bail};

use arkov_markov::{Ar1Params, Method};

use crate::cli::ProcessArgs;
use crate::config::ProcessToml;
use crate::report::OutputFormat;

/// Parses a discretization method name into the corresponding enum variant.
pub fn parse_method(s: &str) -> Result<Method> {
    match s.to_lowercase().as_str() {
        "tauchen" => Ok(Method::Tauchen),
        "rouwenhorst" => Ok(Method::Rouwenhorst),
        other => bail!("unknown discretization method: {other:?}"),
    }
}

/// Parses an output format name into the corresponding enum variant.
pub fn parse_format(s: &str) -> Result<OutputFormat> {
    match s.to_lowercase().as_str() {
        "text" => Ok(OutputFormat::Text),
        "json" => Ok(OutputFormat::Json),
        other => bail!("unknown output format: {other:?}"),
    }
}

/// Builds [`Ar1Params`] from the `[process]` table, with CLI flags taking
/// precedence over file values.
pub fn build_params(process: &ProcessToml, args: &ProcessArgs, m: Option<f64>) -> Ar1Params {
    Ar1Params::new(
        args.n.unwrap_or(process.n),
        args.rho.unwrap_or(process.rho),
        args.sigma_e.unwrap_or(process.sigma_e),
    )
    .with_span(m.unwrap_or(process.m))
}
