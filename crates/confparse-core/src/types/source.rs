//! Source identifiers.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Label naming the origin of a document: a file path, or `-` for standard input.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SourceId(String);

impl SourceId {
    /// Conventional marker for standard input
    pub const STDIN_MARKER: &'static str = "-";

    /// Create a source identifier, used verbatim as given
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The standard input source
    pub fn stdin() -> Self {
        Self(Self::STDIN_MARKER.to_string())
    }

    /// Whether this identifier denotes standard input
    pub fn is_stdin(&self) -> bool {
        self.0 == Self::STDIN_MARKER
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SourceId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for SourceId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl AsRef<str> for SourceId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for SourceId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stdin_marker() {
        assert!(SourceId::stdin().is_stdin());
        assert!(SourceId::from("-").is_stdin());
        assert!(!SourceId::from("./-").is_stdin());
    }

    #[test]
    fn test_verbatim() {
        let id = SourceId::from("  conf/a b.yaml ");
        assert_eq!(id.as_str(), "  conf/a b.yaml ");
        assert_eq!(id.to_string(), "  conf/a b.yaml ");
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let json = serde_json::to_string(&SourceId::from("a.yaml")).unwrap();
        assert_eq!(json, "\"a.yaml\"");
    }
}
