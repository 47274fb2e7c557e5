//! Report rendering: turns a configuration set into labeled JSON sections.
//!
//! Each section is a label line followed by the tab-indented JSON rendering of a
//! document and a trailing newline. In combined mode the whole set is rendered as
//! one object under the `Combined` label; otherwise each source gets its own
//! section, labeled with its identifier, in the set's iteration order.

use crate::error::{ConfparseError, CoreResult};
use crate::types::ConfigSet;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};


/// Label of the single section emitted in combined mode
pub const COMBINED_LABEL: &str = "Combined";

/// One tab per nesting level
const INDENT: &[u8] = b"\t";

/// Escaped carriage return as it appears in serialized JSON text
const ESCAPED_CR: &str = "\\r";

/// How a configuration set is laid out in the report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportMode {
    /// One section holding every source
    Combined,
    /// One section per source
    #[default]
    PerSource,
}

impl From<bool> for ReportMode {
    fn from(combine: bool) -> Self {
        if combine {
            ReportMode::Combined
        } else {
            ReportMode::PerSource
        }
    }
}

/// Render a configuration set as a report.
///
/// Fails on the first document that cannot be represented as JSON; no partial
/// report is returned.
pub fn produce_report<D: Serialize>(set: &ConfigSet<D>, combine: bool) -> CoreResult<String> {
    produce_report_with_mode(set, ReportMode::from(combine))
}

/// Render a configuration set in the given mode
pub fn produce_report_with_mode<D: Serialize>(
    set: &ConfigSet<D>,
    mode: ReportMode,
) -> CoreResult<String> {
    match mode {
        ReportMode::Combined => {
            let block = render_document(COMBINED_LABEL, set)?;
            let mut output = String::with_capacity(COMBINED_LABEL.len() + 1 + block.len());
            push_section(&mut output, COMBINED_LABEL, &block);
            Ok(output)
        }
        ReportMode::PerSource => {
            let mut output = String::new();
            for (source, document) in set {
                let block = render_document(source.as_str(), document)?;
                push_section(&mut output, source.as_str(), &block);
            }
            Ok(output)
        }
    }
}

/// Pretty-print a value with tab indentation, append a newline and sanitize.
///
/// `section` only names the value in error messages.
pub fn render_document<T: Serialize + ?Sized>(section: &str, value: &T) -> CoreResult<String> {
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    value
        .serialize(&mut serializer)
        .map_err(|e| ConfparseError::serialization(section, e))?;
    buf.push(b'\n');

    let text = String::from_utf8(buf).map_err(|e| ConfparseError::serialization(section, e))?;
    Ok(sanitize(&text))
}

/// Remove every literal `\r` (backslash, letter r) from serialized text.
///
/// This is a plain substring removal over the rendered text, so it also applies
/// to a backslash-r pair that came from an escaped backslash.
pub fn sanitize(text: &str) -> String {
    text.replace(ESCAPED_CR, "")
}

fn push_section(output: &mut String, label: &str, block: &str) {
    output.push_str(label);
    output.push('\n');
    output.push_str(block);
}
