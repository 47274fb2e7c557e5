//! Terminal output.
//!
//! Command output goes to stdout untouched; diagnostics go to stderr, colored
//! when the terminal supports it.

pub mod colors;
pub mod errors;

/// Writes command output to stdout
#[derive(Debug, Default)]
pub struct OutputHandler;

impl OutputHandler {
    /// Create a new output handler
    pub fn new() -> Self {
        Self
    }

    /// Print command output, followed by a newline
    pub fn print(&self, text: &str) {
        println!("{}", text);
    }
}
