//! TOML sources

use confparse_core::error::ConfparseError;
use confparse_core::types::Document;
use serde_json::{Map, Number};

use crate::format::InputFormat;
use crate::ConfigResult;

/// Parse a TOML document into a generic document.
///
/// Datetimes become RFC 3339 strings.
pub fn parse(source_id: &str, content: &str) -> ConfigResult<Document> {
    let table = content.parse::<::toml::Table>().map_err(|e| {
        ConfparseError::malformed(source_id, InputFormat::Toml, describe(&e, content))
    })?;

    table_to_document(source_id, table)
}

fn table_to_document(source_id: &str, table: ::toml::Table) -> ConfigResult<Document> {
    let mut map = Map::new();
    for (key, value) in table {
        map.insert(key, to_document(source_id, value)?);
    }
    Ok(Document::Object(map))
}

fn to_document(source_id: &str, value: ::toml::Value) -> ConfigResult<Document> {
    use ::toml::Value;

    Ok(match value {
        Value::String(s) => Document::String(s),
        Value::Integer(i) => Document::from(i),
        Value::Float(f) => Number::from_f64(f).map(Document::Number).ok_or_else(|| {
            ConfparseError::malformed(
                source_id,
                InputFormat::Toml,
                format!("{} is not representable in JSON", f),
            )
        })?,
        Value::Boolean(b) => Document::Bool(b),
        Value::Datetime(dt) => Document::String(dt.to_string()),
        Value::Array(items) => Document::Array(
            items
                .into_iter()
                .map(|item| to_document(source_id, item))
                .collect::<ConfigResult<Vec<_>>>()?,
        ),
        Value::Table(table) => table_to_document(source_id, table)?,
    })
}

/// Error message with a line/column prefix when the parser knows the location
fn describe(error: &::toml::de::Error, content: &str) -> String {
    match error.span() {
        Some(span) => {
            let (line, column) = line_column(content, span.start);
            format!("{} at line {}, column {}", error.message().trim_end(), line, column)
        }
        None => error.message().trim_end().to_string(),
    }
}

/// 1-based line and column of a byte offset
fn line_column(content: &str, offset: usize) -> (usize, usize) {
    let before = content.get(..offset).unwrap_or(content);
    let line = before.matches('\n').count() + 1;
    let column = before.rsplit('\n').next().map_or(0, |l| l.chars().count()) + 1;
    (line, column)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_tables_and_arrays() {
        let toml = r#"
title = "service"
replicas = 3
ratio = 0.5
enabled = true

[owner]
name = "ops"

[[ports]]
number = 80

[[ports]]
number = 443
"#;

        let doc = parse("svc.toml", toml).unwrap();
        assert_eq!(
            doc,
            json!({
                "title": "service",
                "replicas": 3,
                "ratio": 0.5,
                "enabled": true,
                "owner": {"name": "ops"},
                "ports": [{"number": 80}, {"number": 443}]
            })
        );
    }

    #[test]
    fn test_datetimes_become_strings() {
        let doc = parse("d.toml", "released = 1979-05-27T07:32:00Z\nday = 1979-05-27\n").unwrap();
        assert_eq!(doc["released"], json!("1979-05-27T07:32:00Z"));
        assert_eq!(doc["day"], json!("1979-05-27"));
    }

    #[test]
    fn test_non_finite_floats_are_rejected() {
        let err = parse("f.toml", "x = nan\n").unwrap_err();
        assert!(err.to_string().contains("not representable in JSON"));

        assert!(parse("f.toml", "x = inf\n").is_err());
    }

    #[test]
    fn test_malformed_reports_location() {
        let err = parse("bad.toml", "a = 1\nb = \n").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("'bad.toml'"));
        assert!(message.contains("line 2"));
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(parse("empty.toml", "").unwrap(), json!({}));
    }

    #[test]
    fn test_line_column() {
        assert_eq!(line_column("abc", 0), (1, 1));
        assert_eq!(line_column("abc\nde", 5), (2, 2));
        assert_eq!(line_column("abc", 99), (1, 4));
    }
}
