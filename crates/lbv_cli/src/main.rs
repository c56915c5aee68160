//! lbv: checks a line buffer simulation dump.
//!
//! Provides `lbv check` for the verification report and `lbv signals` for a
//! listing of every signal in a dump.

#![warn(missing_docs)]

mod check;
mod settings;
mod signals;

use std::process;

use clap::{Parser, Subcommand};

/// lbv: two-line pixel buffer waveform checker.
#[derive(Parser, Debug)]
#[command(name = "lbv", version, about = "Line buffer VCD verifier")]
pub struct Cli {
    /// Suppress all output except the report and errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Print skipped checks and their reasons.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to an `lbv.toml` configuration file.
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// The subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Parse a dump and print the verification report.
    Check(CheckArgs),
    /// Parse a dump and list its signals.
    Signals(SignalsArgs),
}

/// Arguments for the `lbv check` subcommand.
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// VCD file to analyze (overrides `[input].path`).
    pub file: Option<String>,

    /// Exit with status 1 when the overall result is FAIL.
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for the `lbv signals` subcommand.
#[derive(Parser, Debug)]
pub struct SignalsArgs {
    /// VCD file to list (overrides `[input].path`).
    pub file: Option<String>,
}

/// Global settings derived from CLI flags.
pub struct GlobalArgs {
    /// Whether to suppress status output.
    pub quiet: bool,
    /// Whether to print skip diagnostics.
    pub verbose: bool,
    /// Optional path to a custom config file.
    pub config: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    let global = GlobalArgs {
        quiet: cli.quiet,
        verbose: cli.verbose,
        config: cli.config,
    };

    let result = match cli.command {
        Command::Check(ref args) => check::run(args, &global),
        Command::Signals(ref args) => signals::run(args, &global),
    };

    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}
