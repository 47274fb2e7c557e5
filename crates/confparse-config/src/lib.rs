//! Source resolution for confparse
//!
//! This crate turns a list of source identifiers (file paths, or `-` for standard
//! input) plus an optional format hint into a `ConfigSet` of generic documents,
//! ready to be rendered by `confparse_core::report`.

pub mod format;
pub mod json;
pub mod resolver;
pub mod toml;
pub mod yaml;

// Re-export main types
pub use format::{valid_inputs, InputFormat};
pub use resolver::{read_source, FsResolver, SourceResolver};

use confparse_core::error::ConfparseError;

/// Result type for resolution operations
pub type ConfigResult<T> = Result<T, ConfparseError>;
