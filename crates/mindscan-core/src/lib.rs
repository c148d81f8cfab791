//! Mindscan Core - keyword and phrase pattern analysis for emotion scoring.
//!
//! The [`PatternAnalyzer`] scans free-form text for literal keywords and
//! short phrases grouped into four fixed emotion categories and reports a
//! score and the set of matched terms for each of them.
//!
//! This is a demonstration tool. It performs no language understanding:
//! a category scores only when one of its configured terms literally
//! appears in the text.
//!
//! # Example
//!
//! ```
//! use mindscan_core::{Dominant, Emotion, PatternAnalyzer};
//!
//! let analyzer = PatternAnalyzer::builtin();
//! let result = analyzer.analyze("I feel so hopeless and tired, nothing matters.");
//!
//! assert_eq!(result.score(Emotion::Depression), 2);
//! assert_eq!(result.score(Emotion::Positive), 0);
//! assert_eq!(result.dominant(), Dominant::Emotion(Emotion::Depression));
//! ```

pub mod analyzer;
pub mod config;
pub mod error;

pub use analyzer::{
    AnalysisResult, CategoryScore, Dominant, Emotion, EmotionCategory, PatternAnalyzer,
    PatternRule, RuleKind,
};
pub use config::{CatalogConfig, RuleConfig};
pub use error::{CatalogError, Result};
