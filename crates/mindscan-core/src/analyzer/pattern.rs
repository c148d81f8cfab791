//! Keyword and phrase pattern analyzer.
//!
//! Every rule is a pre-compiled regex built from escaped literal terms,
//! so a call to [`PatternAnalyzer::analyze`] is a fixed number of linear
//! scans over the normalized text.

use std::time::Instant;

use super::normalize::normalize;
use super::{AnalysisResult, CategoryScore, Emotion, PatternRule, RuleKind};
use crate::config::{CatalogConfig, RuleConfig};
use crate::error::{CatalogError, Result};

/// Static rule definition for the built-in catalog.
struct BuiltinRule {
    category: Emotion,
    kind: RuleKind,
    terms: &'static [&'static str],
}

/// Built-in rules, grouped by category in configured order.
const BUILTIN_RULES: &[BuiltinRule] = &[
    BuiltinRule {
        category: Emotion::Depression,
        kind: RuleKind::Word,
        terms: &["sad", "depress", "hopeless", "tired", "exhausted", "lonely", "worthless"],
    },
    BuiltinRule {
        category: Emotion::Depression,
        kind: RuleKind::Phrase,
        terms: &["don't feel", "no point", "cant go on", "give up"],
    },
    BuiltinRule {
        category: Emotion::Anxiety,
        kind: RuleKind::Word,
        terms: &["anxious", "worried", "nervous", "stress", "panic", "fear"],
    },
    BuiltinRule {
        category: Emotion::Anxiety,
        kind: RuleKind::Word,
        terms: &["might"],
    },
    BuiltinRule {
        category: Emotion::Anxiety,
        kind: RuleKind::Phrase,
        terms: &["what if", "could happen", "scared of"],
    },
    BuiltinRule {
        category: Emotion::Anger,
        kind: RuleKind::Word,
        terms: &["angry", "mad", "furious", "rage", "hate", "frustrated"],
    },
    BuiltinRule {
        category: Emotion::Anger,
        kind: RuleKind::Phrase,
        terms: &["can't stand", "fed up", "sick of"],
    },
    BuiltinRule {
        category: Emotion::Positive,
        kind: RuleKind::Word,
        terms: &["happy", "good", "great", "better", "wonderful", "excited"],
    },
    BuiltinRule {
        category: Emotion::Positive,
        kind: RuleKind::Phrase,
        terms: &["looking forward"],
    },
    BuiltinRule {
        category: Emotion::Positive,
        kind: RuleKind::Word,
        terms: &["proud", "grateful", "thankful"],
    },
];

/// Returns the built-in rules as configuration entries.
pub(crate) fn builtin_rule_configs() -> Vec<RuleConfig> {
    BUILTIN_RULES
        .iter()
        .map(|rule| RuleConfig {
            category: rule.category,
            kind: rule.kind,
            terms: rule.terms.iter().map(|t| t.to_string()).collect(),
        })
        .collect()
}

/// A category and its ordered rules.
#[derive(Debug, Clone)]
pub struct EmotionCategory {
    emotion: Emotion,
    rules: Vec<PatternRule>,
}

impl EmotionCategory {
    /// Returns the category.
    pub fn emotion(&self) -> Emotion {
        self.emotion
    }

    /// Returns the rules in evaluation order.
    pub fn rules(&self) -> &[PatternRule] {
        &self.rules
    }

    fn score(&self, text: &str) -> CategoryScore {
        let mut entry = CategoryScore::empty(self.emotion);
        for rule in &self.rules {
            for m in rule.find_iter(text) {
                entry.record(m.as_str());
            }
        }
        entry
    }
}

/// Deterministic keyword and phrase analyzer.
///
/// The catalog is immutable after construction, so one analyzer can be
/// shared across threads and called concurrently without locking.
#[derive(Debug, Clone)]
pub struct PatternAnalyzer {
    categories: Vec<EmotionCategory>,
}

impl PatternAnalyzer {
    /// Creates an analyzer with the built-in catalog.
    pub fn builtin() -> Self {
        Self::from_config(&CatalogConfig::default()).expect("Invalid built-in catalog")
    }

    /// Creates an analyzer from catalog configuration.
    ///
    /// Configured rules are appended after the built-in rules of their
    /// category, or used alone when `replace_builtin` is set. Every
    /// category must end up with at least one rule.
    pub fn from_config(config: &CatalogConfig) -> Result<Self> {
        let mut definitions = if config.replace_builtin {
            Vec::new()
        } else {
            builtin_rule_configs()
        };
        definitions.extend(config.rules.iter().cloned());

        let mut categories = Vec::with_capacity(Emotion::all().len());
        for &emotion in Emotion::all() {
            let rules = definitions
                .iter()
                .filter(|def| def.category == emotion)
                .map(|def| {
                    PatternRule::new(def.kind, &def.terms).map_err(|e| CatalogError::Rule {
                        category: emotion,
                        source: Box::new(e),
                    })
                })
                .collect::<Result<Vec<_>>>()?;

            if rules.is_empty() {
                return Err(CatalogError::EmptyCategory(emotion));
            }

            tracing::debug!("Loaded {} rules for {}", rules.len(), emotion);
            categories.push(EmotionCategory { emotion, rules });
        }

        Ok(Self { categories })
    }

    /// Returns the catalog in configured order.
    pub fn categories(&self) -> &[EmotionCategory] {
        &self.categories
    }

    /// Describes the active catalog as a standalone configuration.
    ///
    /// The result has `replace_builtin` set, so building it reproduces
    /// this catalog exactly.
    pub fn to_config(&self) -> CatalogConfig {
        let rules = self
            .categories
            .iter()
            .flat_map(|category| {
                category.rules.iter().map(|rule| RuleConfig {
                    category: category.emotion,
                    kind: rule.kind(),
                    terms: rule.terms().to_vec(),
                })
            })
            .collect();

        CatalogConfig {
            replace_builtin: true,
            rules,
        }
    }

    /// Analyzes text and scores every category.
    ///
    /// Total over all input: empty or unmatched text yields zero scores
    /// and empty match sets. Matched terms are reported lowercase.
    pub fn analyze(&self, text: &str) -> AnalysisResult {
        let start = Instant::now();
        let normalized = normalize(text);

        let scores = self
            .categories
            .iter()
            .map(|category| category.score(&normalized))
            .collect();
        let result = AnalysisResult::new(scores);

        tracing::trace!(
            chars = normalized.chars().count(),
            matches = result.total_matches(),
            duration_us = start.elapsed().as_micros() as u64,
            "Analyzed text"
        );

        result
    }
}

impl Default for PatternAnalyzer {
    fn default() -> Self {
        Self::builtin()
    }
}
