//! # Lint Configuration
//!
//! Thresholds used by the best-practices linter. Every field has a default,
//! so a config file only needs to name the values it overrides:
//!
//! ```yaml
//! max_code_lines: 30
//! recommended_sections: [decision_tree, error_handling]
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Maximum lines in a code example before `code_length` fires.
pub const DEFAULT_MAX_CODE_LINES: usize = 20;

/// Maximum raw input size in bytes before `file_size` fires (100 KiB).
pub const DEFAULT_MAX_FILE_SIZE: u64 = 100 * 1024;

/// Minimum number of quick-usage examples.
pub const DEFAULT_MIN_USAGE_EXAMPLES: usize = 2;

/// Maximum decision-tree nesting depth before `deep_nesting` fires.
pub const DEFAULT_MAX_DECISION_TREE_DEPTH: usize = 4;

/// Top-level sections every LLM.yml should carry.
pub const DEFAULT_RECOMMENDED_SECTIONS: [&str; 3] =
    ["decision_tree", "common_patterns", "error_handling"];

/// Best-practices linter thresholds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LintConfig {
    /// Lines allowed in one `code` field.
    pub max_code_lines: usize,
    /// Bytes allowed in the raw input file.
    pub max_file_size: u64,
    /// Quick-usage entries expected at minimum.
    pub min_usage_examples: usize,
    /// Deepest decision-tree nesting allowed.
    pub max_decision_tree_depth: usize,
    /// Top-level sections reported when absent, in reporting order.
    pub recommended_sections: Vec<String>,
}

impl Default for LintConfig {
    fn default() -> Self {
        Self {
            max_code_lines: DEFAULT_MAX_CODE_LINES,
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            min_usage_examples: DEFAULT_MIN_USAGE_EXAMPLES,
            max_decision_tree_depth: DEFAULT_MAX_DECISION_TREE_DEPTH,
            recommended_sections: DEFAULT_RECOMMENDED_SECTIONS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl LintConfig {
    /// Load a config file. YAML is a superset of JSON, so both parse here.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read and
    /// [`ConfigError::Invalid`] if it does not deserialize.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml_str(&content).map_err(|e| ConfigError::Invalid {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        tracing::debug!(config = ?config, path = %path.display(), "loaded lint config");
        Ok(config)
    }

    /// Parse a config from YAML (or JSON) text. An empty document yields
    /// the defaults.
    ///
    /// # Errors
    ///
    /// Returns the `serde_yaml` error for malformed text, unknown keys or
    /// mistyped values.
    pub fn from_yaml_str(content: &str) -> Result<Self, serde_yaml::Error> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }
}
