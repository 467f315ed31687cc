use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// arkov: discretize AR(1) processes into finite Markov chains.
#[derive(Parser)]
#[command(
    name = "arkov",
    version,
    about = "Discretize AR(1) processes into finite-state Markov chains"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Discretize with Tauchen's method (1986).
    Tauchen(TauchenArgs),
    /// Discretize with Rouwenhorst's method (1995).
    Rouwenhorst(RouwenhorstArgs),
    /// Simulate a path from a discretized chain.
    Simulate(SimulateArgs),
}

/// Process parameters shared by every subcommand.
///
/// Each flag overrides the corresponding `[process]` key of the config file.
#[derive(clap::Args)]
pub struct ProcessArgs {
    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Number of grid points.
    #[arg(short = 'n', long = "states")]
    pub n: Option<usize>,

    /// AR(1) coefficient, in (-1, 1).
    #[arg(long, allow_negative_numbers = true)]
    pub rho: Option<f64>,

    /// Standard deviation of the innovation.
    #[arg(long = "sigma-e", allow_negative_numbers = true)]
    pub sigma_e: Option<f64>,
}

/// Output options shared by every subcommand.
#[derive(clap::Args)]
pub struct OutputArgs {
    /// Output format: "text" or "json".
    #[arg(short, long, default_value = "text")]
    pub format: String,

    /// Write the report to this file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `tauchen` subcommand.
#[derive(clap::Args)]
pub struct TauchenArgs {
    #[command(flatten)]
    pub process: ProcessArgs,

    /// Grid span in unconditional standard deviations.
    #[arg(short, long = "span", allow_negative_numbers = true)]
    pub m: Option<f64>,

    /// Also report the stationary moments implied by the chain.
    #[arg(long)]
    pub moments: bool,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Arguments for the `rouwenhorst` subcommand.
#[derive(clap::Args)]
pub struct RouwenhorstArgs {
    #[command(flatten)]
    pub process: ProcessArgs,

    /// Also report the stationary moments implied by the chain.
    #[arg(long)]
    pub moments: bool,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Arguments for the `simulate` subcommand.
#[derive(clap::Args)]
pub struct SimulateArgs {
    #[command(flatten)]
    pub process: ProcessArgs,

    /// Discretization method: "tauchen" or "rouwenhorst".
    #[arg(long)]
    pub method: Option<String>,

    /// Grid span in unconditional standard deviations (Tauchen only).
    #[arg(short, long = "span", allow_negative_numbers = true)]
    pub m: Option<f64>,

    /// Number of periods to simulate.
    #[arg(short, long)]
    pub length: Option<usize>,

    /// RNG seed; drawn from the OS when absent.
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Initial state index; defaults to the middle state.
    #[arg(short, long)]
    pub initial: Option<usize>,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn negative_values_reach_validation() {
        let cli = Cli::try_parse_from([
            "arkov", "tauchen", "--rho", "-0.5", "--sigma-e", "-1", "--span", "-2",
        ])
        .unwrap();
        let Command::Tauchen(args) = cli.command else {
            panic!("expected tauchen subcommand");
        };
        assert_eq!(args.process.rho, Some(-0.5));
        assert_eq!(args.process.sigma_e, Some(-1.0));
        assert_eq!(args.m, Some(-2.0));
    }

    #[test]
    fn simulate_accepts_negative_span() {
        let cli = Cli::try_parse_from(["arkov", "simulate", "-m", "-3", "--sigma-e", "-0.1"])
            .unwrap();
        let Command::Simulate(args) = cli.command else {
            panic!("expected simulate subcommand");
        };
        assert_eq!(args.m, Some(-3.0));
        assert_eq!(args.process.sigma_e, Some(-0.1));
    }
}
