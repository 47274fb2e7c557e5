//! JSON sources

use confparse_core::error::ConfparseError;
use confparse_core::types::Document;

use crate::format::InputFormat;
use crate::ConfigResult;

/// Parse a JSON document
pub fn parse(source_id: &str, content: &str) -> ConfigResult<Document> {
    serde_json::from_str(content)
        .map_err(|e| ConfparseError::malformed(source_id, InputFormat::Json, e))
}
