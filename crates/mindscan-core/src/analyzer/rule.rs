//! Literal pattern rules.

use regex::Regex;
use regex_syntax::is_word_character;
use serde::{Deserialize, Serialize};

use super::normalize::normalize;
use crate::error::{CatalogError, Result};

/// How the terms of a rule are matched against text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    /// Single words, bounded at word edges ("sad" does not match "sadly").
    #[default]
    Word,
    /// Multi-word phrases matched contiguously and bounded at the outer
    /// word edges. Any whitespace run in the text matches a single space
    /// in the phrase.
    Phrase,
    /// Terms matched anywhere, with no boundary check.
    Substring,
}

impl RuleKind {
    /// Returns the kind as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Word => "word",
            Self::Phrase => "phrase",
            Self::Substring => "substring",
        }
    }
}

impl std::fmt::Display for RuleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A compiled rule: one or more literal alternatives of the same kind.
///
/// Terms are normalized the same way analyzed text is, so a rule always
/// matches case-insensitively.
#[derive(Debug, Clone)]
pub struct PatternRule {
    kind: RuleKind,
    terms: Vec<String>,
    regex: Regex,
}

impl PatternRule {
    /// Builds a rule from literal terms.
    ///
    /// Fails when there are no terms, a term is blank, or a term does not
    /// fit `kind` (a `Word` term containing a space, a `Phrase` term
    /// without one).
    pub fn new<S: AsRef<str>>(kind: RuleKind, terms: &[S]) -> Result<Self> {
        if terms.is_empty() {
            return Err(CatalogError::EmptyRule { kind });
        }

        let mut normalized = Vec::with_capacity(terms.len());
        for term in terms {
            let term = normalize(term.as_ref());
            if term.is_empty() {
                return Err(CatalogError::BlankTerm { kind });
            }

            let has_space = term.contains(' ');
            let fits = match kind {
                RuleKind::Word => !has_space,
                RuleKind::Phrase => has_space,
                RuleKind::Substring => true,
            };
            if !fits {
                return Err(CatalogError::TermKindMismatch { term, kind });
            }

            if !normalized.contains(&term) {
                normalized.push(term);
            }
        }

        let regex = Regex::new(&build_pattern(kind, &normalized))?;

        Ok(Self {
            kind,
            terms: normalized,
            regex,
        })
    }

    /// Returns the rule kind.
    pub fn kind(&self) -> RuleKind {
        self.kind
    }

    /// Returns the normalized terms in declaration order.
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Iterates over non-overlapping matches in already normalized text.
    pub fn find_iter<'r, 't>(&'r self, text: &'t str) -> regex::Matches<'r, 't> {
        self.regex.find_iter(text)
    }
}

/// Builds the alternation for a rule.
///
/// Longer terms come first so that a term never loses to a shorter prefix
/// at the same position.
fn build_pattern(kind: RuleKind, terms: &[String]) -> String {
    let mut ordered: Vec<&String> = terms.iter().collect();
    ordered.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()));

    let alternatives: Vec<String> = ordered
        .into_iter()
        .map(|term| {
            let escaped = regex::escape(term);
            match kind {
                RuleKind::Substring => escaped,
                RuleKind::Word | RuleKind::Phrase => {
                    let lead = if term.starts_with(is_word_character) { r"\b" } else { "" };
                    let trail = if term.ends_with(is_word_character) { r"\b" } else { "" };
                    format!("{lead}{escaped}{trail}")
                }
            }
        })
        .collect();

    format!("(?:{})", alternatives.join("|"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matches(rule: &PatternRule, text: &str) -> Vec<String> {
        let text = normalize(text);
        rule.find_iter(&text)
            .map(|m| m.as_str().to_string())
            .collect()
    }

    #[test]
    fn word_rule_respects_boundaries() {
        let rule = PatternRule::new(RuleKind::Word, &["sad"]).unwrap();
        assert_eq!(matches(&rule, "I feel sad."), ["sad"]);
        assert!(matches(&rule, "Sadly, no.").is_empty());
        assert!(matches(&rule, "crusade").is_empty());
    }

    #[test]
    fn word_rule_boundary_after_combining_mark() {
        let rule = PatternRule::new(RuleKind::Word, &["cafe\u{301}"]).unwrap();
        assert!(matches(&rule, "cafe\u{301}teria").is_empty());
        assert_eq!(matches(&rule, "a cafe\u{301} nearby"), ["cafe\u{301}"]);
    }

    #[test]
    fn word_rule_counts_every_occurrence() {
        let rule = PatternRule::new(RuleKind::Word, &["sad", "tired"]).unwrap();
        assert_eq!(matches(&rule, "Sad, tired and SAD"), ["sad", "tired", "sad"]);
    }

    #[test]
    fn phrase_rule_matches_across_whitespace() {
        let rule = PatternRule::new(RuleKind::Phrase, &["give up"]).unwrap();
        assert_eq!(matches(&rule, "I want to GIVE \n  up now"), ["give up"]);
        assert!(matches(&rule, "forgive upstream").is_empty());
    }

    #[test]
    fn phrase_with_apostrophe() {
        let rule = PatternRule::new(RuleKind::Phrase, &["can't stand"]).unwrap();
        assert_eq!(matches(&rule, "I can't stand it"), ["can't stand"]);
        assert_eq!(matches(&rule, "I can\u{2019}t stand it"), ["can't stand"]);
    }

    #[test]
    fn substring_rule_ignores_boundaries() {
        let rule = PatternRule::new(RuleKind::Substring, &["depress"]).unwrap();
        assert_eq!(matches(&rule, "so depressing"), ["depress"]);
    }

    #[test]
    fn longer_term_wins_at_same_position() {
        let rule = PatternRule::new(RuleKind::Substring, &["fear", "fearful"]).unwrap();
        assert_eq!(matches(&rule, "fearful"), ["fearful"]);
    }

    #[test]
    fn terms_are_literal() {
        let rule = PatternRule::new(RuleKind::Substring, &["a.b"]).unwrap();
        assert!(matches(&rule, "axb").is_empty());
        assert_eq!(matches(&rule, "a.b"), ["a.b"]);
    }

    #[test]
    fn terms_are_normalized_and_deduplicated() {
        let rule = PatternRule::new(RuleKind::Phrase, &["Fed   Up", "fed up"]).unwrap();
        assert_eq!(rule.terms(), ["fed up"]);
    }

    #[test]
    fn rejects_empty_rule() {
        let err = PatternRule::new::<&str>(RuleKind::Word, &[]).unwrap_err();
        assert!(matches!(err, CatalogError::EmptyRule { kind: RuleKind::Word }));
    }

    #[test]
    fn rejects_blank_term() {
        let err = PatternRule::new(RuleKind::Word, &["sad", "  "]).unwrap_err();
        assert!(matches!(err, CatalogError::BlankTerm { .. }));
    }

    #[test]
    fn rejects_kind_mismatch() {
        let err = PatternRule::new(RuleKind::Word, &["fed up"]).unwrap_err();
        assert!(matches!(err, CatalogError::TermKindMismatch { .. }));

        let err = PatternRule::new(RuleKind::Phrase, &["angry"]).unwrap_err();
        assert!(matches!(err, CatalogError::TermKindMismatch { .. }));
    }
}
