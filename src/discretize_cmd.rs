//! Discretize commands: build a chain and print its grid and matrix.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use arkov_markov::{Ar1Params, Method};

use crate::cli::{OutputArgs, ProcessArgs, RouwenhorstArgs, TauchenArgs};
use crate::config;
use crate::convert;
use crate::report::{self, ChainReport, OutputFormat};

/// Run the `tauchen` subcommand.
pub fn run_tauchen(args: TauchenArgs) -> Result<()> {
    run(Method::Tauchen, &args.process, args.m, args.moments, &args.output)
}

/// Run the `rouwenhorst` subcommand.
pub fn run_rouwenhorst(args: RouwenhorstArgs) -> Result<()> {
    run(Method::Rouwenhorst, &args.process, None, args.moments, &args.output)
}

fn run(
    method: Method,
    process: &ProcessArgs,
    m: Option<f64>,
    with_moments: bool,
    output: &OutputArgs,
) -> Result<()> {
    let _cmd = info_span!("discretize", %method).entered();

    // 1. Resolve parameters: config file, then CLI overrides
    let cfg = config::load(process.config.as_deref())?;
    let params = convert::build_params(&cfg.process, process, m);
    let format = convert::parse_format(&output.format)?;
    log_params(method, &params);

    // 2. Discretize
    let chain = method
        .discretize(&params)
        .with_context(|| format!("{method} discretization failed"))?;

    // 3. Optional moments
    let moments = if with_moments {
        let moments = chain
            .moments()
            .context("failed to compute implied moments")?;
        info!(
            mean = moments.mean,
            sd = moments.sd,
            autocorrelation = ?moments.autocorrelation,
            "implied moments"
        );
        Some(moments)
    } else {
        None
    };

    // 4. Render
    let content = match format {
        OutputFormat::Text => report::render_chain_text(&chain, moments.as_ref()),
        OutputFormat::Json => report::render_json(&ChainReport {
            method,
            params: &params,
            sigma_z: params.sigma_z(),
            chain: &chain,
            moments,
        })?,
    };
    report::emit(output.output.as_deref(), &content)
}

pub(crate) fn log_params(method: Method, params: &Ar1Params) {
    match method {
        Method::Tauchen => info!(
            n = params.n(),
            rho = params.rho(),
            sigma_e = params.sigma_e(),
            m = params.m(),
            "discretizing"
        ),
        Method::Rouwenhorst => info!(
            n = params.n(),
            rho = params.rho(),
            sigma_e = params.sigma_e(),
            "discretizing"
        ),
    }
}
