//! Emotion pattern analysis.
//!
//! A static catalog maps each [`Emotion`] to an ordered list of
//! [`PatternRule`]s. [`PatternAnalyzer::analyze`] evaluates every rule
//! against the normalized text and returns an [`AnalysisResult`] with one
//! entry per category, in catalog order.

mod emotion;
mod normalize;
mod pattern;
mod result;
mod rule;

pub use emotion::Emotion;
pub use normalize::normalize;
pub use pattern::{EmotionCategory, PatternAnalyzer};
pub use result::{AnalysisResult, CategoryScore, Dominant};
pub use rule::{PatternRule, RuleKind};
