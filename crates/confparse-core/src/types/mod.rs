//! Core data types handed from source resolution to report rendering.
//!
//! - `Document`: a generic parsed configuration tree
//! - `SourceId`: the label naming where a document came from
//! - `ConfigSet`: every document of one invocation, keyed by source

pub mod config_set;
pub mod source;

// Re-export all public types
pub use config_set::ConfigSet;
pub use source::SourceId;

/// Generic parsed document (null, bool, number, string, sequence or mapping).
///
/// Mapping keys are kept in lexicographic order, so rendering is deterministic.
pub type Document = serde_json::Value;
