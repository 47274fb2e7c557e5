//! YAML sources, including multi-document streams

use confparse_core::error::ConfparseError;
use confparse_core::types::Document;
use serde::Deserialize;
use serde_json::{Map, Number};
use serde_yaml::Value;

use crate::format::InputFormat;
use crate::ConfigResult;

/// Parse a YAML stream into a generic document.
///
/// Merge keys (`<<: *anchor`) are folded into their mapping. A stream holding
/// several `---` separated documents becomes a sequence of those documents; an
/// empty stream becomes null.
pub fn parse(source_id: &str, content: &str) -> ConfigResult<Document> {
    let mut documents = Vec::new();
    for document in serde_yaml::Deserializer::from_str(content) {
        let mut value = Value::deserialize(document)
            .map_err(|e| ConfparseError::malformed(source_id, InputFormat::Yaml, e))?;
        value
            .apply_merge()
            .map_err(|e| ConfparseError::malformed(source_id, InputFormat::Yaml, e))?;
        documents.push(to_document(source_id, value)?);
    }

    Ok(match documents.len() {
        0 => Document::Null,
        1 => documents.swap_remove(0),
        _ => Document::Array(documents),
    })
}

fn to_document(source_id: &str, value: Value) -> ConfigResult<Document> {
    Ok(match value {
        Value::Null => Document::Null,
        Value::Bool(b) => Document::Bool(b),
        Value::Number(n) => number(source_id, &n)?,
        Value::String(s) => Document::String(s),
        Value::Sequence(items) => Document::Array(
            items
                .into_iter()
                .map(|item| to_document(source_id, item))
                .collect::<ConfigResult<Vec<_>>>()?,
        ),
        Value::Mapping(mapping) => {
            let mut map = Map::new();
            for (key, value) in mapping {
                map.insert(key_string(source_id, key)?, to_document(source_id, value)?);
            }
            Document::Object(map)
        }
        Value::Tagged(tagged) => to_document(source_id, tagged.value)?,
    })
}

fn number(source_id: &str, n: &serde_yaml::Number) -> ConfigResult<Document> {
    if let Some(i) = n.as_i64() {
        return Ok(Document::from(i));
    }
    if let Some(u) = n.as_u64() {
        return Ok(Document::from(u));
    }
    n.as_f64()
        .and_then(Number::from_f64)
        .map(Document::Number)
        .ok_or_else(|| {
            ConfparseError::malformed(
                source_id,
                InputFormat::Yaml,
                format!("{} is not representable in JSON", n),
            )
        })
}

/// Scalar mapping keys are rendered as strings; collections cannot be keys in JSON
fn key_string(source_id: &str, key: Value) -> ConfigResult<String> {
    match key {
        Value::String(s) => Ok(s),
        Value::Null => Ok("null".to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Tagged(tagged) => key_string(source_id, tagged.value),
        Value::Sequence(_) | Value::Mapping(_) => Err(ConfparseError::malformed(
            source_id,
            InputFormat::Yaml,
            "mapping keys must be scalars to be represented in JSON",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_mapping() {
        let yaml = r#"
apiVersion: apps/v1
kind: Deployment
spec:
  replicas: 2
  selector:
    matchLabels:
      app: web
  ports: [80, 443]
  ratio: 0.25
  debug: false
  note: ~
"#;
        let doc = parse("deploy.yaml", yaml).unwrap();
        assert_eq!(
            doc,
            json!({
                "apiVersion": "apps/v1",
                "kind": "Deployment",
                "spec": {
                    "replicas": 2,
                    "selector": {"matchLabels": {"app": "web"}},
                    "ports": [80, 443],
                    "ratio": 0.25,
                    "debug": false,
                    "note": null
                }
            })
        );
    }

    #[test]
    fn test_multi_document_stream() {
        let yaml = "kind: Service\n---\nkind: Deployment\n";
        let doc = parse("all.yaml", yaml).unwrap();
        assert_eq!(doc, json!([{"kind": "Service"}, {"kind": "Deployment"}]));
    }

    #[test]
    fn test_empty_stream_is_null() {
        assert_eq!(parse("empty.yaml", "").unwrap(), Document::Null);
    }

    #[test]
    fn test_scalar_keys_become_strings() {
        let doc = parse("keys.yaml", "1: one\ntrue: yes\n").unwrap();
        assert_eq!(doc, json!({"1": "one", "true": "yes"}));
    }

    #[test]
    fn test_merge_keys_are_resolved() {
        let yaml = "base: &b\n  image: nginx\n  port: 8080\nweb:\n  <<: *b\n  port: 80\n";
        let doc = parse("m.yaml", yaml).unwrap();
        assert_eq!(doc["web"], json!({"image": "nginx", "port": 80}));
        assert_eq!(doc["base"], json!({"image": "nginx", "port": 8080}));
    }

    #[test]
    fn test_tags_are_unwrapped() {
        let doc = parse("tag.yaml", "secret: !vault abc\n").unwrap();
        assert_eq!(doc, json!({"secret": "abc"}));
    }

    #[test]
    fn test_non_finite_numbers_are_rejected() {
        let err = parse("nan.yaml", "x: .nan\n").unwrap_err();
        assert!(err.to_string().contains("not representable in JSON"));
    }

    #[test]
    fn test_collection_keys_are_rejected() {
        assert!(parse("complex.yaml", "? [a, b]\n: c\n").is_err());
    }

    #[test]
    fn test_malformed_names_source() {
        let err = parse("bad.yaml", "a: [1, 2\n").unwrap_err();
        assert!(err.to_string().contains("'bad.yaml'"));
        assert!(err.to_string().contains("yaml"));
    }
}
