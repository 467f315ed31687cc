mod cli;
mod config;
mod convert;
mod discretize_cmd;
mod logging;
mod report;
mod simulate_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Tauchen(args) => discretize_cmd::run_tauchen(args),
        Command::Rouwenhorst(args) => discretize_cmd::run_rouwenhorst(args),
        Command::Simulate(args) => simulate_cmd::run(args),
    }
}
