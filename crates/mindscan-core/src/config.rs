//! Rule catalog configuration.
//!
//! A catalog file is a JSON document that adds rules to the built-in
//! catalog or replaces it:
//!
//! ```json
//! {
//!   "replace_builtin": false,
//!   "rules": [
//!     { "category": "anxiety", "kind": "phrase", "terms": ["on edge"] }
//!   ]
//! }
//! ```
//!
//! Categories are the closed [`Emotion`] set; unknown names and unknown
//! fields are rejected when the document is parsed.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::analyzer::{Emotion, PatternAnalyzer, RuleKind};
use crate::error::Result;

/// Catalog configuration document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogConfig {
    /// Use only the configured rules instead of extending the built-in ones.
    #[serde(default)]
    pub replace_builtin: bool,
    /// Rules in evaluation order within each category.
    #[serde(default)]
    pub rules: Vec<RuleConfig>,
}

/// A single rule entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleConfig {
    /// Category the rule scores.
    pub category: Emotion,
    /// How the terms are matched.
    #[serde(default)]
    pub kind: RuleKind,
    /// Literal terms.
    pub terms: Vec<String>,
}

impl CatalogConfig {
    /// Parses a catalog document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a catalog file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&content)?;
        tracing::debug!("Read {} catalog rules from {:?}", config.rules.len(), path);
        Ok(config)
    }

    /// Builds an analyzer, validating every rule.
    pub fn build(&self) -> Result<PatternAnalyzer> {
        PatternAnalyzer::from_config(self)
    }

    /// Serializes the document as pretty JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
