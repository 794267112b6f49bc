//! # Error Types
//!
//! Failures that happen before or around validation. All errors use
//! `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! - [`ParseError`]: malformed YAML/JSON syntax, with line/column when the
//!   parser reports one. Raised before the validation core is reached.
//! - [`LoadError`]: a document file could not be read or parsed.
//! - [`ConfigError`]: a lint configuration file could not be loaded.
//!
//! Schema violations are not errors: they are collected exhaustively into
//! [`crate::ValidationResult::errors`].

use std::path::PathBuf;

use thiserror::Error;

/// Malformed YAML or JSON input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ParseError {
    /// Parser message, without location suffix where the parser allows it.
    pub message: String,
    /// 1-based line of the failure, if known.
    pub line: Option<usize>,
    /// 1-based column of the failure, if known.
    pub column: Option<usize>,
}

impl ParseError {
    /// Parse error without location information.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            line: None,
            column: None,
        }
    }

    /// Parse error at a known position.
    pub fn at(message: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            message: message.into(),
            line: Some(line),
            column: Some(column),
        }
    }

    /// Returns `(line, column)` when both are known.
    pub fn location(&self) -> Option<(usize, usize)> {
        match (self.line, self.column) {
            (Some(line), Some(column)) => Some((line, column)),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ParseError {
    fn from(err: serde_json::Error) -> Self {
        // serde_json reports line 0 for errors not tied to input position.
        if err.line() == 0 {
            return Self::new(err.to_string());
        }
        Self::at(err.to_string(), err.line(), err.column())
    }
}

impl From<serde_yaml::Error> for ParseError {
    fn from(err: serde_yaml::Error) -> Self {
        match err.location() {
            Some(loc) => Self::at(err.to_string(), loc.line(), loc.column()),
            None => Self::new(err.to_string()),
        }
    }
}

/// A document file could not be turned into a parsed tree.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The file could not be read or stat'ed.
    #[error("cannot read {}: {source}", path.display())]
    Io {
        /// Path of the document.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The file contents are not valid YAML/JSON.
    #[error("cannot parse {}: {source}", path.display())]
    Parse {
        /// Path of the document.
        path: PathBuf,
        /// Parser failure with location.
        #[source]
        source: ParseError,
    },
}

impl LoadError {
    /// Path of the document that failed to load.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Io { path, .. } | Self::Parse { path, .. } => path,
        }
    }

    /// The parse failure, if this is one.
    pub fn parse_error(&self) -> Option<&ParseError> {
        match self {
            Self::Parse { source, .. } => Some(source),
            Self::Io { .. } => None,
        }
    }
}

/// A lint configuration file could not be loaded.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("cannot read config {}: {source}", path.display())]
    Io {
        /// Path of the config file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The config file does not deserialize into a `LintConfig`.
    #[error("invalid config {}: {reason}", path.display())]
    Invalid {
        /// Path of the config file.
        path: PathBuf,
        /// Deserializer message.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_from_json_carries_location() {
        let err = serde_json::from_str::<serde_json::Value>("{\n  \"a\": ,\n}").unwrap_err();
        let parsed = ParseError::from(err);
        assert_eq!(parsed.line, Some(2));
        assert!(parsed.column.is_some());
        assert!(parsed.location().is_some());
    }

    #[test]
    fn parse_error_from_yaml_carries_location() {
        let err = serde_yaml::from_str::<serde_yaml::Value>("a: [1, 2\nb: 3").unwrap_err();
        let parsed = ParseError::from(err);
        assert!(parsed.line.is_some());
        assert!(!parsed.message.is_empty());
    }

    #[test]
    fn parse_error_without_location() {
        let err = ParseError::new("unsupported key");
        assert_eq!(err.location(), None);
        assert_eq!(err.to_string(), "unsupported key");
    }

    #[test]
    fn load_error_exposes_path_and_parse_error() {
        let err = LoadError::Parse {
            path: PathBuf::from("LLM.yml"),
            source: ParseError::at("bad indent", 3, 5),
        };
        assert_eq!(err.path(), std::path::Path::new("LLM.yml"));
        assert_eq!(err.parse_error().and_then(ParseError::location), Some((3, 5)));
        assert!(err.to_string().contains("LLM.yml"));
    }

    #[test]
    fn load_error_io_has_no_parse_error() {
        let err = LoadError::Io {
            path: PathBuf::from("missing.yml"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert!(err.parse_error().is_none());
        assert!(err.to_string().contains("missing.yml"));
    }
}
