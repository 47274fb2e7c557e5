//! # confparse-core
//!
//! Core types and report rendering shared across all confparse crates.
//!
//! This crate provides:
//! - `Document`, `SourceId` and `ConfigSet`, the data handed over by source resolution
//! - `ConfparseError` for unified error handling
//! - `produce_report`, which turns a configuration set into tab-indented JSON sections
//!
//! ## Architecture
//!
//! The crate is organized into modules:
//! - `types`: Core data types (Document, SourceId, ConfigSet)
//! - `error`: Error types and result aliases
//! - `report`: Aggregation and serialization of configuration sets

pub mod error;
pub mod report;
pub mod types;

// Re-export commonly used types
pub use error::{ConfparseError, CoreResult, ErrorStage};
pub use report::{produce_report, produce_report_with_mode, ReportMode, COMBINED_LABEL};
pub use types::{ConfigSet, Document, SourceId};
