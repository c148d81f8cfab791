//! Emotion categories scored by the analyzer.

use serde::{Deserialize, Serialize};

/// The closed set of emotion categories.
///
/// Declaration order is the configured category order: results, charts and
/// dominant-category tie breaks all follow it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Emotion {
    /// Sadness, hopelessness, exhaustion.
    Depression,
    /// Worry, nervousness, fear.
    Anxiety,
    /// Anger, frustration, resentment.
    Anger,
    /// Happiness, gratitude, optimism.
    Positive,
}

impl Emotion {
    /// Returns all categories in configured order.
    pub fn all() -> &'static [Emotion] {
        &[
            Emotion::Depression,
            Emotion::Anxiety,
            Emotion::Anger,
            Emotion::Positive,
        ]
    }

    /// Returns the display name for this category.
    pub fn name(&self) -> &'static str {
        match self {
            Emotion::Depression => "Depression",
            Emotion::Anxiety => "Anxiety",
            Emotion::Anger => "Anger",
            Emotion::Positive => "Positive",
        }
    }

    /// Returns a description of what this category indicates.
    pub fn description(&self) -> &'static str {
        match self {
            Emotion::Depression => "Sadness, hopelessness, exhaustion or withdrawal",
            Emotion::Anxiety => "Worry, nervousness, fear or anticipation of harm",
            Emotion::Anger => "Anger, frustration or resentment",
            Emotion::Positive => "Happiness, gratitude, pride or optimism",
        }
    }
}

impl std::fmt::Display for Emotion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_returns_configured_order() {
        let names: Vec<_> = Emotion::all().iter().map(|e| e.name()).collect();
        assert_eq!(names, ["Depression", "Anxiety", "Anger", "Positive"]);
    }

    #[test]
    fn serializes_as_snake_case() {
        let json = serde_json::to_string(&Emotion::Positive).unwrap();
        assert_eq!(json, "\"positive\"");

        let parsed: Emotion = serde_json::from_str("\"anxiety\"").unwrap();
        assert_eq!(parsed, Emotion::Anxiety);
    }

    #[test]
    fn rejects_unknown_category() {
        assert!(serde_json::from_str::<Emotion>("\"joy\"").is_err());
    }
}
