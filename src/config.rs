use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use arkov_markov::params::{DEFAULT_N, DEFAULT_RHO, DEFAULT_SIGMA_E, DEFAULT_SPAN};

/// Top-level arkov configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct ArkovConfig {
    /// AR(1) process and grid settings.
    #[serde(default)]
    pub process: ProcessToml,

    /// Simulation settings.
    #[serde(default)]
    pub simulate: SimulateToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProcessToml {
    #[serde(default = "default_n")]
    pub n: usize,
    #[serde(default = "default_rho")]
    pub rho: f64,
    #[serde(default = "default_sigma_e")]
    pub sigma_e: f64,
    #[serde(default = "default_m")]
    pub m: f64,
}

impl Default for ProcessToml {
    fn default() -> Self {
        Self {
            n: default_n(),
            rho: default_rho(),
            sigma_e: default_sigma_e(),
            m: default_m(),
        }
    }
}

fn default_n() -> usize {
    DEFAULT_N
}
fn default_rho() -> f64 {
    DEFAULT_RHO
}
fn default_sigma_e() -> f64 {
    DEFAULT_SIGMA_E
}
fn default_m() -> f64 {
    DEFAULT_SPAN
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SimulateToml {
    #[serde(default = "default_method")]
    pub method: String,
    #[serde(default = "default_length")]
    pub length: usize,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub initial: Option<usize>,
}

impl Default for SimulateToml {
    fn default() -> Self {
        Self {
            method: default_method(),
            length: default_length(),
            seed: None,
            initial: None,
        }
    }
}

fn default_method() -> String {
    "rouwenhorst".to_string()
}
fn default_length() -> usize {
    1000
}

/// Loads the configuration file, or the defaults when no path is given.
pub fn load(path: Option<&Path>) -> Result<ArkovConfig> {
    let Some(path) = path else {
        return Ok(ArkovConfig::default());
    };
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    toml::from_str(&toml_str)
        .with_context(|| format!("failed to parse TOML config: {}", path.display()))
}
