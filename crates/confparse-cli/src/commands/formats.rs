//! Formats command implementation

use super::CommandContext;
use confparse_config::valid_inputs;

/// Print every accepted input format, one per line
pub async fn execute(ctx: &CommandContext) -> anyhow::Result<()> {
    for input in valid_inputs() {
        ctx.output.print(input);
    }
    Ok(())
}
