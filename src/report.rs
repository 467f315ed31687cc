//! Human-readable and JSON rendering of discretization results.

use std::fmt::Write as _;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use arkov_markov::{Ar1Params, ChainMoments, MarkovChain, Method};

/// Report output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Fixed-width text with 4 decimals.
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// JSON view of a discretization.
#[derive(Debug, Serialize)]
pub struct ChainReport<'a> {
    pub method: Method,
    pub params: &'a Ar1Params,
    pub sigma_z: f64,
    #[serde(flatten)]
    pub chain: &'a MarkovChain,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub moments: Option<ChainMoments>,
}

/// JSON view of a simulated path.
#[derive(Debug, Serialize)]
pub struct SimulationReport<'a> {
    pub method: Method,
    pub params: &'a Ar1Params,
    pub initial: usize,
    pub seed: Option<u64>,
    pub states: &'a [usize],
    pub values: &'a [f64],
}

fn join_fixed(values: &[f64]) -> String {
    values
        .iter()
        .map(|v| format!("{v:.4}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Renders the grid on one line and the matrix one row per line, 4 decimals.
pub fn render_chain_text(chain: &MarkovChain, moments: Option<&ChainMoments>) -> String {
    let mut out = String::new();
    out.push_str("Grids are\n");
    out.push_str(&join_fixed(chain.grid().values()));
    out.push_str("\n\nTransition Prob Matrix is\n");
    for row in chain.matrix().rows() {
        out.push_str(&join_fixed(row));
        out.push('\n');
    }
    if let Some(m) = moments {
        out.push_str("\nImplied moments\n");
        // Writing to a String cannot fail.
        let _ = writeln!(out, "mean {:.4}", m.mean);
        let _ = writeln!(out, "sd {:.4}", m.sd);
        match m.autocorrelation {
            Some(r) => {
                let _ = writeln!(out, "autocorrelation {r:.4}");
            }
            None => out.push_str("autocorrelation undefined\n"),
        }
    }
    out
}

/// Renders simulated values one per line, 4 decimals.
pub fn render_path_text(values: &[f64]) -> String {
    let mut out = String::with_capacity(values.len() * 8);
    for v in values {
        let _ = writeln!(out, "{v:.4}");
    }
    out
}

/// Serializes any report as pretty JSON with a trailing newline.
pub fn render_json<T: Serialize>(report: &T) -> Result<String> {
    let mut s = serde_json::to_string_pretty(report).context("failed to serialize report")?;
    s.push('\n');
    Ok(s)
}

/// Writes the report to `path`, or stdout when `None`.
pub fn emit(path: Option<&Path>, content: &str) -> Result<()> {
    match path {
        Some(p) => std::fs::write(p, content)
            .with_context(|| format!("failed to write report: {}", p.display())),
        None => {
            print!("{content}");
            Ok(())
        }
    }
}
