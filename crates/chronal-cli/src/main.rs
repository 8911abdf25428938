//! Chronal command-line runner.
//!
//! Loads seed coordinates from a text file, answers both classifier queries
//! and prints the results. `check` runs the headless self-check harness
//! instead: no input file, everything in-process.
//!
//! Usage:
//!   chronal solve [INPUT] [--limit N] [--sequential] [--config FILE] [--json]
//!   chronal check [--verbose]

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

mod check;
mod input;
mod solve;

pub const TITLE: &str = "Day 6: Chronal Coordinates";

/// Nearest-seed region classifier.
#[derive(Parser)]
#[command(name = "chronal", version, about = "Nearest-seed region classifier")]
struct Cli {
    /// Log at debug level (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Classify the seeds in INPUT and print both answers.
    Solve(SolveArgs),
    /// Run the built-in self-check harness.
    Check,
}

#[derive(Args)]
pub struct SolveArgs {
    /// Seed file, one `x, y` per line.
    #[arg(default_value_os_t = input::default_input_path(input::DAY))]
    pub input: PathBuf,

    /// Safe-region distance limit (overrides the config file).
    #[arg(short, long)]
    pub limit: Option<u64>,

    /// Scan rows on one thread.
    #[arg(long)]
    pub sequential: bool,

    /// JSON run configuration.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print the full report as JSON.
    #[arg(long)]
    pub json: bool,

    /// Hide the progress bar.
    #[arg(short, long)]
    pub quiet: bool,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .format_timestamp(None)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Solve(args) => solve::run(&args, cli.verbose),
        Command::Check => {
            if !check::run(cli.verbose) {
                std::process::exit(1);
            }
            Ok(())
        }
    }
}
