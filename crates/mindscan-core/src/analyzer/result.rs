//! Analysis results.

use std::collections::BTreeSet;

use serde::Serialize;

use super::Emotion;

/// Score and matched terms for a single category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryScore {
    /// The scored category.
    pub emotion: Emotion,
    /// Total number of rule matches, duplicates included.
    pub score: usize,
    /// Unique matched terms, lowercase, in lexicographic order.
    pub matches: BTreeSet<String>,
}

impl CategoryScore {
    pub(crate) fn empty(emotion: Emotion) -> Self {
        Self {
            emotion,
            score: 0,
            matches: BTreeSet::new(),
        }
    }

    pub(crate) fn record(&mut self, matched: &str) {
        self.score += 1;
        if !self.matches.contains(matched) {
            self.matches.insert(matched.to_string());
        }
    }
}

/// Category with the highest score, or neutral when nothing matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Dominant {
    /// A category scored strictly higher than every earlier category and
    /// at least as high as every later one.
    Emotion(Emotion),
    /// Every category scored zero.
    Neutral,
}

impl Dominant {
    /// Returns the display name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Emotion(emotion) => emotion.name(),
            Self::Neutral => "Neutral",
        }
    }
}

impl std::fmt::Display for Dominant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Result of analyzing one text.
///
/// Holds exactly one [`CategoryScore`] per configured category, in
/// configured order, including categories that scored zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisResult {
    categories: Vec<CategoryScore>,
}

impl AnalysisResult {
    pub(crate) fn new(categories: Vec<CategoryScore>) -> Self {
        Self { categories }
    }

    /// Returns all category scores in configured order.
    pub fn categories(&self) -> &[CategoryScore] {
        &self.categories
    }

    /// Returns the entry for a category.
    pub fn get(&self, emotion: Emotion) -> Option<&CategoryScore> {
        self.categories.iter().find(|c| c.emotion == emotion)
    }

    /// Returns the score for a category.
    pub fn score(&self, emotion: Emotion) -> usize {
        self.get(emotion).map_or(0, |c| c.score)
    }

    /// Returns the unique matched terms for a category.
    pub fn matches(&self, emotion: Emotion) -> Vec<&str> {
        self.get(emotion)
            .map(|c| c.matches.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Total number of matches across all categories.
    pub fn total_matches(&self) -> usize {
        self.categories.iter().map(|c| c.score).sum()
    }

    /// Returns true if nothing matched.
    pub fn is_neutral(&self) -> bool {
        self.total_matches() == 0
    }

    /// Returns the dominant category.
    ///
    /// Ties go to the first category in configured order.
    pub fn dominant(&self) -> Dominant {
        let mut best: Option<&CategoryScore> = None;
        for category in &self.categories {
            if best.map_or(true, |b| category.score > b.score) {
                best = Some(category);
            }
        }

        match best {
            Some(category) if category.score > 0 => Dominant::Emotion(category.emotion),
            _ => Dominant::Neutral,
        }
    }

    /// Returns `(name, score)` pairs in configured order for charting.
    pub fn chart_series(&self) -> Vec<(&'static str, usize)> {
        self.categories
            .iter()
            .map(|c| (c.emotion.name(), c.score))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result_with(scores: &[(Emotion, usize)]) -> AnalysisResult {
        let categories = Emotion::all()
            .iter()
            .map(|&emotion| {
                let mut entry = CategoryScore::empty(emotion);
                let count = scores
                    .iter()
                    .find(|(e, _)| *e == emotion)
                    .map_or(0, |(_, n)| *n);
                for i in 0..count {
                    entry.record(&format!("term{i}"));
                }
                entry
            })
            .collect();
        AnalysisResult::new(categories)
    }

    #[test]
    fn record_counts_duplicates_once_in_set() {
        let mut entry = CategoryScore::empty(Emotion::Anger);
        entry.record("mad");
        entry.record("mad");
        entry.record("hate");
        assert_eq!(entry.score, 3);
        assert_eq!(entry.matches.len(), 2);
    }

    #[test]
    fn dominant_is_highest_score() {
        let result = result_with(&[(Emotion::Anxiety, 1), (Emotion::Positive, 3)]);
        assert_eq!(result.dominant(), Dominant::Emotion(Emotion::Positive));
    }

    #[test]
    fn dominant_tie_goes_to_first_configured() {
        let result = result_with(&[(Emotion::Anger, 2), (Emotion::Anxiety, 2)]);
        assert_eq!(result.dominant(), Dominant::Emotion(Emotion::Anxiety));
    }

    #[test]
    fn dominant_neutral_when_all_zero() {
        let result = result_with(&[]);
        assert_eq!(result.dominant(), Dominant::Neutral);
        assert_eq!(result.dominant().name(), "Neutral");
        assert!(result.is_neutral());
    }

    #[test]
    fn chart_series_follows_configured_order() {
        let result = result_with(&[(Emotion::Positive, 2)]);
        assert_eq!(
            result.chart_series(),
            vec![("Depression", 0), ("Anxiety", 0), ("Anger", 0), ("Positive", 2)]
        );
    }

    #[test]
    fn serializes_with_dominant_names() {
        let json = serde_json::to_value(Dominant::Emotion(Emotion::Anger)).unwrap();
        assert_eq!(json, serde_json::json!({ "emotion": "anger" }));
        let json = serde_json::to_value(Dominant::Neutral).unwrap();
        assert_eq!(json, serde_json::json!("neutral"));
    }
}
