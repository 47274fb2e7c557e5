//! # confparse-cli
//!
//! Print structured data from heterogeneous configuration files as JSON.
//!
//! This is the entry point for the `confparse` binary. It parses arguments,
//! sets up logging and panic reporting, and dispatches to the command handlers.
//! Logs go to stderr; stdout carries only command output.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

mod commands;
mod output;

use commands::{parse::ParseArgs, CommandContext};
use output::errors::ErrorFormatter;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (built ",
    env!("BUILD_DATE"),
    " with ",
    env!("RUSTC_VERSION"),
    ")"
);

/// Print structured data from your configuration files
#[derive(Parser, Debug)]
#[command(
    name = "confparse",
    version,
    long_version = LONG_VERSION,
    about = "Print structured data from your configuration files"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print out structured data from your input files
    Parse(ParseArgs),
    /// List the accepted input formats
    Formats,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    setup_logging(cli.verbose);
    setup_panic_handler();

    debug!("Starting confparse v{}", env!("CARGO_PKG_VERSION"));

    match run_cli(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprint!("{}", ErrorFormatter::new().format_error(&err));
            ExitCode::FAILURE
        }
    }
}

fn run_cli(cli: Cli) -> anyhow::Result<()> {
    let rt = tokio::runtime::Runtime::new()?;

    rt.block_on(async {
        let ctx = CommandContext::new()?;
        commands::dispatch_command(cli.command, &ctx).await
    })
}

fn setup_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "confparse_cli={level},confparse_config={level},confparse_core={level}"
        ))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn setup_panic_handler() {
    std::panic::set_hook(Box::new(|panic_info| {
        error!("confparse encountered an unexpected error: {}", panic_info);
        eprintln!("confparse crashed! This is a bug.");
        eprintln!("Please report this at: https://github.com/confparse/confparse/issues");
        eprintln!("Error: {}", panic_info);
    }));
}
