//! Catalog error types.

use thiserror::Error;

use crate::analyzer::{Emotion, RuleKind};

/// Errors raised while loading or building a rule catalog.
///
/// Analysis itself never fails; every defect is reported when the catalog
/// is constructed.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// IO error reading a catalog file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed catalog document.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A rule was declared without any terms.
    #[error("{kind} rule has no terms")]
    EmptyRule { kind: RuleKind },

    /// A term is empty or whitespace only.
    #[error("{kind} rule contains a blank term")]
    BlankTerm { kind: RuleKind },

    /// A term does not fit the declared rule kind.
    #[error("'{term}' is not a valid {kind} term")]
    TermKindMismatch { term: String, kind: RuleKind },

    /// A category ended up with no rules at all.
    #[error("category {0} has no rules")]
    EmptyCategory(Emotion),

    /// A rule inside a category is invalid.
    #[error("invalid {category} rule: {source}")]
    Rule {
        category: Emotion,
        #[source]
        source: Box<CatalogError>,
    },

    /// Compiled pattern rejected by the regex engine.
    #[error("invalid pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Result type for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;
