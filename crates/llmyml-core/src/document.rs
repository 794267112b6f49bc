//! # Document Loading
//!
//! Turns raw YAML or JSON text into the untyped tree the validator works on.
//!
//! YAML has a richer data model than JSON (tags, non-string keys, anchors).
//! LLM.yml documents use only the JSON-compatible subset, so YAML is parsed
//! with `serde_yaml` and converted into a `serde_json::Value` up front; from
//! then on the schema engine and the linter see a single representation.
//!
//! Parse failures are [`ParseError`]s and are reported before the
//! validation core is ever invoked.

use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::{LoadError, ParseError};

/// Input syntax of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    /// YAML 1.2 (the default for `LLM.yml`).
    Yaml,
    /// Strict JSON.
    Json,
}

impl DocumentFormat {
    /// Pick the syntax from a file extension: `.json` is JSON, anything
    /// else is treated as YAML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Yaml,
        }
    }
}

/// A document read from disk, with the raw size needed by the file-size check.
#[derive(Debug, Clone)]
pub struct LoadedDocument {
    /// Where the document was read from.
    pub path: PathBuf,
    /// Parsed tree.
    pub value: Value,
    /// Size of the raw file in bytes.
    pub byte_len: u64,
}

/// Parse document text in the given syntax.
///
/// # Errors
///
/// Returns [`ParseError`] for malformed input, or for YAML that leaves the
/// JSON-compatible subset (e.g. a mapping used as a map key).
pub fn parse_document(content: &str, format: DocumentFormat) -> Result<Value, ParseError> {
    match format {
        DocumentFormat::Json => Ok(serde_json::from_str(content)?),
        DocumentFormat::Yaml => {
            // An empty YAML stream is a null document, not a syntax error.
            if content.trim().is_empty() {
                return Ok(Value::Null);
            }
            let yaml: serde_yaml::Value = serde_yaml::from_str(content)?;
            yaml_to_json_value(&yaml).map_err(ParseError::new)
        }
    }
}

/// Read, stat and parse a document file.
///
/// # Errors
///
/// Returns [`LoadError::Io`] if the file cannot be read and
/// [`LoadError::Parse`] if its contents are malformed.
pub fn load_document(path: &Path) -> Result<LoadedDocument, LoadError> {
    let io_err = |source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    };

    let content = std::fs::read_to_string(path).map_err(io_err)?;
    let byte_len = std::fs::metadata(path).map_err(io_err)?.len();

    let value = parse_document(&content, DocumentFormat::from_path(path)).map_err(|source| {
        LoadError::Parse {
            path: path.to_path_buf(),
            source,
        }
    })?;

    tracing::debug!(path = %path.display(), byte_len, "loaded document");

    Ok(LoadedDocument {
        path: path.to_path_buf(),
        value,
        byte_len,
    })
}

/// Convert a `serde_yaml::Value` to a `serde_json::Value`.
///
/// Scalar map keys (strings, numbers, booleans) are stringified; tags are
/// dropped and their inner value kept.
fn yaml_to_json_value(yaml: &serde_yaml::Value) -> Result<Value, String> {
    match yaml {
        serde_yaml::Value::Null => Ok(Value::Null),
        serde_yaml::Value::Bool(b) => Ok(Value::Bool(*b)),
        serde_yaml::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(Value::Number(i.into()))
            } else if let Some(u) = n.as_u64() {
                Ok(Value::Number(u.into()))
            } else if let Some(f) = n.as_f64() {
                serde_json::Number::from_f64(f)
                    .map(Value::Number)
                    .ok_or_else(|| format!("number {f} has no JSON representation"))
            } else {
                Err(format!("unsupported YAML number: {n}"))
            }
        }
        serde_yaml::Value::String(s) => Ok(Value::String(s.clone())),
        serde_yaml::Value::Sequence(seq) => seq
            .iter()
            .map(yaml_to_json_value)
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        serde_yaml::Value::Mapping(map) => {
            let mut object = serde_json::Map::with_capacity(map.len());
            for (k, v) in map {
                let key = match k {
                    serde_yaml::Value::String(s) => s.clone(),
                    serde_yaml::Value::Number(n) => n.to_string(),
                    serde_yaml::Value::Bool(b) => b.to_string(),
                    other => return Err(format!("unsupported map key: {other:?}")),
                };
                object.insert(key, yaml_to_json_value(v)?);
            }
            Ok(Value::Object(object))
        }
        serde_yaml::Value::Tagged(tagged) => yaml_to_json_value(&tagged.value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn format_from_extension() {
        assert_eq!(DocumentFormat::from_path(Path::new("LLM.json")), DocumentFormat::Json);
        assert_eq!(DocumentFormat::from_path(Path::new("x.llm.JSON")), DocumentFormat::Json);
        assert_eq!(DocumentFormat::from_path(Path::new("LLM.yml")), DocumentFormat::Yaml);
        assert_eq!(DocumentFormat::from_path(Path::new("LLM.yaml")), DocumentFormat::Yaml);
        assert_eq!(DocumentFormat::from_path(Path::new("LLM")), DocumentFormat::Yaml);
    }

    #[test]
    fn yaml_converts_to_json_tree() {
        let value = parse_document(
            r#"
name: demo
version: "1.0.0"
count: 42
ratio: 0.5
enabled: true
nothing: ~
items:
  - one
  - two
"#,
            DocumentFormat::Yaml,
        )
        .unwrap();

        assert_eq!(value["name"], "demo");
        assert_eq!(value["version"], "1.0.0");
        assert_eq!(value["count"], 42);
        assert_eq!(value["ratio"], 0.5);
        assert_eq!(value["enabled"], true);
        assert!(value["nothing"].is_null());
        assert_eq!(value["items"], json!(["one", "two"]));
    }

    #[test]
    fn yaml_scalar_keys_are_stringified() {
        let value = parse_document("1: a\ntrue: b\n", DocumentFormat::Yaml).unwrap();
        assert_eq!(value["1"], "a");
        assert_eq!(value["true"], "b");
    }

    #[test]
    fn yaml_sequence_key_is_parse_error() {
        let err = parse_document("? [a, b]\n: c\n", DocumentFormat::Yaml).unwrap_err();
        assert!(err.message.contains("unsupported map key"));
    }

    #[test]
    fn empty_yaml_is_null() {
        assert_eq!(parse_document("", DocumentFormat::Yaml).unwrap(), Value::Null);
    }

    #[test]
    fn multiline_block_scalar_keeps_newlines() {
        let value = parse_document("code: |\n  a\n  b\n  c\n", DocumentFormat::Yaml).unwrap();
        assert_eq!(value["code"], "a\nb\nc\n");
    }

    #[test]
    fn malformed_yaml_reports_location() {
        let err = parse_document("name: demo\n  bad: [\n", DocumentFormat::Yaml).unwrap_err();
        assert!(err.line.is_some());
    }

    #[test]
    fn malformed_json_reports_location() {
        let err = parse_document("{\"name\": }", DocumentFormat::Json).unwrap_err();
        assert_eq!(err.line, Some(1));
    }

    #[test]
    fn load_document_reads_size_and_value() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("LLM.yml");
        let content = "name: demo\n";
        std::fs::write(&path, content).unwrap();

        let doc = load_document(&path).unwrap();
        assert_eq!(doc.byte_len, content.len() as u64);
        assert_eq!(doc.value["name"], "demo");
        assert_eq!(doc.path, path);
    }

    #[test]
    fn load_document_missing_file_is_io_error() {
        let err = load_document(Path::new("/nonexistent/LLM.yml")).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }

    #[test]
    fn load_document_bad_json_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("LLM.json");
        std::fs::write(&path, "{ not json").unwrap();
        let err = load_document(&path).unwrap_err();
        assert!(err.parse_error().is_some());
    }
}
