//! Error types and result aliases for confparse operations.
//!
//! Every failure belongs to one of two stages: resolving sources into documents,
//! or serializing documents into the report.

use thiserror::Error;

/// Unified error type for all confparse operations
#[derive(Error, Debug)]
pub enum ConfparseError {
    // Resolution errors
    #[error("Cannot read source '{source_id}': {source}")]
    UnreadableSource {
        source_id: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot determine input format for '{source_id}': {reason}")]
    UnsupportedFormat { source_id: String, reason: String },

    #[error("Failed to parse '{source_id}' as {format}: {message}")]
    MalformedContent {
        source_id: String,
        format: String,
        message: String,
    },

    // Serialization errors
    #[error("Failed to render section '{section}' as JSON: {message}")]
    Serialization { section: String, message: String },
}

/// Which part of an invocation produced an error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorStage {
    /// Reading and parsing sources
    Resolution,
    /// Rendering documents to JSON
    Serialization,
}

/// Result type alias for confparse operations
pub type CoreResult<T> = Result<T, ConfparseError>;

impl ConfparseError {
    /// Create an unreadable source error from std::io::Error
    pub fn unreadable(source_id: impl Into<String>, source: std::io::Error) -> Self {
        Self::UnreadableSource {
            source_id: source_id.into(),
            source,
        }
    }

    /// Create a malformed content error from any displayable parser error
    pub fn malformed(
        source_id: impl Into<String>,
        format: impl std::fmt::Display,
        message: impl std::fmt::Display,
    ) -> Self {
        Self::MalformedContent {
            source_id: source_id.into(),
            format: format.to_string(),
            message: message.to_string(),
        }
    }

    /// Create a serialization error for a report section
    pub fn serialization(section: impl Into<String>, message: impl std::fmt::Display) -> Self {
        Self::Serialization {
            section: section.into(),
            message: message.to_string(),
        }
    }

    /// The stage that failed
    pub fn stage(&self) -> ErrorStage {
        match self {
            ConfparseError::Serialization { .. } => ErrorStage::Serialization,
            _ => ErrorStage::Resolution,
        }
    }

    /// Get a user-friendly suggestion for fixing this error
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            ConfparseError::UnreadableSource { .. } => {
                Some("Check that the file exists and is readable")
            },
            ConfparseError::UnsupportedFormat { .. } => {
                Some("Pass the input format explicitly with --input (see 'confparse formats')")
            },
            ConfparseError::MalformedContent { .. } => {
                Some("Fix the syntax error or pass the correct format with --input")
            },
            ConfparseError::Serialization { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_classification() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        assert_eq!(ConfparseError::unreadable("a.yaml", io).stage(), ErrorStage::Resolution);
        assert_eq!(
            ConfparseError::malformed("a.json", "json", "expected value").stage(),
            ErrorStage::Resolution
        );
        assert_eq!(
            ConfparseError::serialization("Combined", "key must be a string").stage(),
            ErrorStage::Serialization
        );
    }

    #[test]
    fn test_messages_name_the_source() {
        let err = ConfparseError::malformed("conf/app.toml", "toml", "expected `=`");
        assert_eq!(
            err.to_string(),
            "Failed to parse 'conf/app.toml' as toml: expected `=`"
        );

        let err = ConfparseError::serialization("b.yaml", "boom");
        assert!(err.to_string().contains("'b.yaml'"));
        assert!(err.suggestion().is_none());
    }

    #[test]
    fn test_unreadable_keeps_io_source() {
        use std::error::Error;

        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = ConfparseError::unreadable("secret.json", io);
        assert!(err.source().is_some());
        assert!(err.suggestion().is_some());
    }
}
