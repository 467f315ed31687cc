//! Simulate command: draw a path from a discretized chain.

use anyhow::{Context, Result};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{info, info_span};

use arkov_markov::simulate_path;
use arkov_stats::{lag1_autocorrelation, mean, sd};

use crate::cli::SimulateArgs;
use crate::config;
use crate::convert;
use crate::discretize_cmd::log_params;
use crate::report::{self, OutputFormat, SimulationReport};

/// Run the `simulate` subcommand.
pub fn run(args: SimulateArgs) -> Result<()> {
    let _cmd = info_span!("simulate").entered();

    // 1. Resolve settings: config file, then CLI overrides
    let cfg = config::load(args.process.config.as_deref())?;
    let params = convert::build_params(&cfg.process, &args.process, args.m);
    let method_name = args.method.as_deref().unwrap_or(&cfg.simulate.method);
    let method = convert::parse_method(method_name)?;
    let format = convert::parse_format(&args.output.format)?;
    let length = args.length.unwrap_or(cfg.simulate.length);
    let seed = args.seed.or(cfg.simulate.seed);
    log_params(method, &params);

    // 2. Discretize
    let chain = method
        .discretize(&params)
        .with_context(|| format!("{method} discretization failed"))?;
    let initial = args
        .initial
        .or(cfg.simulate.initial)
        .unwrap_or(chain.n() / 2);

    // 3. Create seeded RNG
    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    };

    // 4. Simulate
    let states = simulate_path(chain.matrix(), length, initial, &mut rng)
        .context("simulation failed")?;
    let values = chain.values(&states)?;
    info!(
        length,
        initial,
        mean = mean(&values),
        sd = sd(&values),
        acf1 = ?lag1_autocorrelation(&values),
        "simulation complete"
    );

    // 5. Render
    let content = match format {
        OutputFormat::Text => report::render_path_text(&values),
        OutputFormat::Json => report::render_json(&SimulationReport {
            method,
            params: &params,
            initial,
            seed,
            states: &states,
            values: &values,
        })?,
    };
    report::emit(args.output.output.as_deref(), &content)
}
