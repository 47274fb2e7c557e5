//! Parse command implementation

use anyhow::Context;
use clap::Args;
use confparse_config::{valid_inputs, FsResolver, InputFormat, SourceResolver};
use confparse_core::report::produce_report;
use confparse_core::types::SourceId;
use tracing::debug;

use super::CommandContext;

/// Arguments of `confparse parse`
#[derive(Args, Debug, Clone)]
pub struct ParseArgs {
    /// Files to parse; `-` reads standard input
    #[arg(value_name = "FILE")]
    pub files: Vec<String>,

    #[arg(
        short,
        long,
        env = "CONFPARSE_INPUT",
        value_name = "FORMAT",
        value_parser = parse_format,
        help = input_help()
    )]
    pub input: Option<InputFormat>,

    /// Combine all given config files to be evaluated together
    #[arg(
        long,
        env = "CONFPARSE_COMBINE",
        value_parser = clap::builder::BoolishValueParser::new()
    )]
    pub combine: bool,
}

fn parse_format(value: &str) -> Result<InputFormat, String> {
    value.parse()
}

fn input_help() -> String {
    format!(
        "Input type for given source, especially useful when using stdin, valid options are: {}",
        valid_inputs().join(", ")
    )
}

/// Everything one parse invocation needs
#[derive(Debug, Clone, PartialEq)]
pub struct ParseSettings {
    pub sources: Vec<String>,
    pub input: Option<InputFormat>,
    pub combine: bool,
}

impl From<ParseArgs> for ParseSettings {
    fn from(args: ParseArgs) -> Self {
        let sources = if args.files.is_empty() {
            vec![SourceId::STDIN_MARKER.to_string()]
        } else {
            args.files
        };

        Self {
            sources,
            input: args.input,
            combine: args.combine,
        }
    }
}

/// Resolve and render the sources, then print the report
pub async fn execute(settings: ParseSettings, ctx: &CommandContext) -> anyhow::Result<()> {
    let resolver = FsResolver::with_base_dir(ctx.cwd.clone());
    let report = parse_input(&resolver, &settings)
        .await
        .context("failed during parser process")?;

    ctx.output.print(&report);
    Ok(())
}

/// Resolve every source and render the report, without printing anything
pub async fn parse_input<R: SourceResolver>(
    resolver: &R,
    settings: &ParseSettings,
) -> anyhow::Result<String> {
    let configurations = resolver
        .get_configurations(settings.input, &settings.sources)
        .await
        .context("calling the parser method")?;

    debug!(sources = configurations.len(), "Rendering report");
    let report = produce_report(&configurations, settings.combine).context("parsing configs")?;

    Ok(report)
}
