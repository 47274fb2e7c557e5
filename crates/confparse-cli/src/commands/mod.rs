//! Command implementations and dispatch logic.
//!
//! Each command is an async function that takes its arguments and a shared
//! `CommandContext`.

use anyhow::Context;
use camino::Utf8PathBuf;
use tracing::info;

pub mod formats;
pub mod parse;


use crate::{output::OutputHandler, Commands};

/// Shared context for all commands
pub struct CommandContext {
    pub cwd: Utf8PathBuf,
    pub output: OutputHandler,
}

impl CommandContext {
    /// Create a context for the current directory
    pub fn new() -> anyhow::Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;
        let cwd = Utf8PathBuf::try_from(cwd).context("Current directory is not valid UTF-8")?;

        Ok(Self {
            cwd,
            output: OutputHandler::new(),
        })
    }
}

/// Dispatch a command to its handler
pub async fn dispatch_command(command: Commands, ctx: &CommandContext) -> anyhow::Result<()> {
    match command {
        Commands::Parse(args) => {
            let settings = parse::ParseSettings::from(args);
            info!(
                "Parsing {} source(s) (input: {:?}, combine: {})",
                settings.sources.len(),
                settings.input,
                settings.combine
            );
            parse::execute(settings, ctx).await
        }
        Commands::Formats => {
            info!("Listing input formats");
            formats::execute(ctx).await
        }
    }
}
