//! Error message formatting with actionable suggestions.
//!
//! Renders the whole context chain of a failed command, and a `help:` line when
//! the underlying confparse error has a suggestion.

use super::colors::ColorSupport;
use confparse_core::error::ConfparseError;

/// Error formatter with suggestions
pub struct ErrorFormatter {
    colors: ColorSupport,
}

impl ErrorFormatter {
    /// Create a new error formatter
    pub fn new() -> Self {
        Self::with_colors(ColorSupport::detect())
    }

    pub fn with_colors(colors: ColorSupport) -> Self {
        Self { colors }
    }

    /// Format an error with its cause chain and a suggestion if available
    pub fn format_error(&self, error: &anyhow::Error) -> String {
        let mut output = String::new();

        output.push_str(&self.colors.red("error"));
        output.push_str(": ");
        output.push_str(&error.to_string());
        output.push('\n');

        for cause in error.chain().skip(1) {
            output.push_str(&self.colors.dim("caused by"));
            output.push_str(": ");
            output.push_str(&cause.to_string());
            output.push('\n');
        }

        let suggestion = error
            .chain()
            .find_map(|cause| cause.downcast_ref::<ConfparseError>())
            .and_then(ConfparseError::suggestion);
        if let Some(suggestion) = suggestion {
            output.push('\n');
            output.push_str(&self.colors.cyan("help"));
            output.push_str(": ");
            output.push_str(suggestion);
            output.push('\n');
        }

        output
    }
}

impl Default for ErrorFormatter {
    fn default() -> Self {
        Self::new()
    }
}
