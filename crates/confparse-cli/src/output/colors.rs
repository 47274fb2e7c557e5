//! Terminal color support detection and formatting.
//!
//! Respects the NO_COLOR environment variable and only colors stderr when it is
//! a terminal.

use std::env;
use std::io::{self, IsTerminal};

/// Color support detection and formatting
#[derive(Debug, Clone, Copy)]
pub struct ColorSupport {
    enabled: bool,
}

impl ColorSupport {
    /// Detect color support automatically
    pub fn detect() -> Self {
        Self::new(Self::should_use_colors())
    }

    /// Force colors on or off
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    fn should_use_colors() -> bool {
        if env::var_os("NO_COLOR").is_some() {
            return false;
        }

        io::stderr().is_terminal()
    }

    fn paint(&self, code: &str, text: &str) -> String {
        if self.enabled {
            format!("\x1b[{}m{}\x1b[0m", code, text)
        } else {
            text.to_string()
        }
    }

    /// Format text in red
    pub fn red(&self, text: &str) -> String {
        self.paint("31", text)
    }

    /// Format text in cyan
    pub fn cyan(&self, text: &str) -> String {
        self.paint("36", text)
    }

    /// Format text as dim/gray
    pub fn dim(&self, text: &str) -> String {
        self.paint("2", text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_leaves_text_alone() {
        let colors = ColorSupport::new(false);
        assert_eq!(colors.red("error"), "error");
        assert_eq!(colors.dim("caused by"), "caused by");
    }

    #[test]
    fn test_enabled_wraps_in_escape_codes() {
        let colors = ColorSupport::new(true);
        assert_eq!(colors.red("x"), "\x1b[31mx\x1b[0m");
        assert_eq!(colors.cyan("x"), "\x1b[36mx\x1b[0m");
    }
}
