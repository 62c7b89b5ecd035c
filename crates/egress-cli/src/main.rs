//! # egress CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.
//! Uses clap derive macros; verbosity flags map onto a tracing
//! `EnvFilter` so `-v`/`-vv`/`-vvv` raise the log level without
//! touching the emitted reports.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use egress_cli::check::{run_check, CheckArgs};
use egress_cli::tables::{run_tables, TablesArgs};

/// Egress evacuation-compliance CLI.
///
/// Computes total building-evacuation time from an egress path and
/// checks it against the regulation's permissible-time limits.
#[derive(Parser, Debug)]
#[command(name = "egress", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a calculation request and report the compliance verdict.
    Check(CheckArgs),

    /// Print the loaded regulation tables.
    Tables(TablesArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let result = match cli.command {
        Commands::Check(args) => run_check(&args),
        Commands::Tables(args) => run_tables(&args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(2)
        }
    }
}
