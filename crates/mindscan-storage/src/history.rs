//! Session history store.

use chrono::Utc;
use mindscan_core::AnalysisResult;

use crate::error::Result;
use crate::models::AnalysisRecord;

/// Append-only, in-memory list of analyses in insertion order.
///
/// There is no retention limit and nothing is persisted.
#[derive(Debug, Clone, Default)]
pub struct HistoryStore {
    records: Vec<AnalysisRecord>,
    next_id: u64,
}

impl HistoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores an analysis and returns its id.
    ///
    /// Ids increase in insertion order and are never reused, even after
    /// [`clear`](Self::clear).
    pub fn append(&mut self, text: impl Into<String>, result: AnalysisResult) -> u64 {
        self.next_id += 1;
        let record = AnalysisRecord {
            id: self.next_id,
            created_at: Utc::now(),
            text: text.into(),
            result,
        };
        tracing::debug!(id = record.id, "Stored analysis");
        self.records.push(record);
        self.next_id
    }

    /// Returns all records, oldest first.
    pub fn list(&self) -> &[AnalysisRecord] {
        &self.records
    }

    /// Iterates over records, newest first.
    pub fn recent(&self) -> impl Iterator<Item = &AnalysisRecord> {
        self.records.iter().rev()
    }

    /// Returns the record with the given id.
    pub fn get(&self, id: u64) -> Option<&AnalysisRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Returns the most recent record.
    pub fn latest(&self) -> Option<&AnalysisRecord> {
        self.records.last()
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if nothing has been stored.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Drops every record.
    pub fn clear(&mut self) {
        tracing::debug!(count = self.records.len(), "Cleared history");
        self.records.clear();
    }

    /// Serializes all records, oldest first, as a JSON array.
    pub fn export_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.records)?)
    }
}

#[cfg(test)]
mod tests {
    use mindscan_core::{Emotion, PatternAnalyzer};

    use super::*;

    fn store_with(texts: &[&str]) -> HistoryStore {
        let analyzer = PatternAnalyzer::builtin();
        let mut store = HistoryStore::new();
        for text in texts {
            store.append(*text, analyzer.analyze(text));
        }
        store
    }

    #[test]
    fn new_store_is_empty() {
        let store = HistoryStore::new();
        assert!(store.is_empty());
        assert!(store.latest().is_none());
    }

    #[test]
    fn list_keeps_insertion_order() {
        let store = store_with(&["first sad", "second happy", "third angry"]);
        let texts: Vec<_> = store.list().iter().map(|r| r.text.as_str()).collect();
        assert_eq!(texts, ["first sad", "second happy", "third angry"]);
        let ids: Vec<_> = store.list().iter().map(|r| r.id).collect();
        assert_eq!(ids, [1, 2, 3]);
    }

    #[test]
    fn recent_is_newest_first() {
        let store = store_with(&["one", "two"]);
        let texts: Vec<_> = store.recent().map(|r| r.text.as_str()).collect();
        assert_eq!(texts, ["two", "one"]);
        assert_eq!(store.latest().unwrap().text, "two");
    }

    #[test]
    fn records_keep_scores_and_matches() {
        let store = store_with(&["so nervous, what if it fails"]);
        let record = store.get(1).unwrap();
        assert_eq!(record.result.score(Emotion::Anxiety), 2);
        assert_eq!(record.result.matches(Emotion::Anxiety), ["nervous", "what if"]);
    }

    #[test]
    fn ids_not_reused_after_clear() {
        let mut store = store_with(&["a", "b"]);
        store.clear();
        assert!(store.is_empty());

        let id = store.append("c", PatternAnalyzer::builtin().analyze("c"));
        assert_eq!(id, 3);
        assert!(store.get(1).is_none());
    }

    #[test]
    fn export_json_contains_records() {
        let store = store_with(&["I feel great"]);
        let json: serde_json::Value = serde_json::from_str(&store.export_json().unwrap()).unwrap();
        let records = json.as_array().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["text"], "I feel great");
        assert_eq!(records[0]["id"], 1);
        assert!(records[0]["result"]["categories"].is_array());
    }
}
