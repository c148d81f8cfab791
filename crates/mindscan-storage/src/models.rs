//! Data models for storage.

use chrono::{DateTime, Utc};
use mindscan_core::{AnalysisResult, Dominant};
use serde::Serialize;

/// Maximum preview length in characters.
pub const PREVIEW_MAX_CHARS: usize = 100;

/// A stored analysis.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisRecord {
    /// Insertion sequence number, starting at 1.
    pub id: u64,
    /// When the analysis was stored.
    pub created_at: DateTime<Utc>,
    /// The original input text.
    pub text: String,
    /// Scores and matched terms per category.
    pub result: AnalysisResult,
}

impl AnalysisRecord {
    /// Returns the dominant category of the stored result.
    pub fn dominant(&self) -> Dominant {
        self.result.dominant()
    }

    /// Returns a short preview of the input text.
    pub fn preview(&self) -> String {
        create_preview(&self.text, PREVIEW_MAX_CHARS)
    }

    /// Formats the timestamp for display, e.g. `2024-05-01 13:45:10`.
    pub fn timestamp_label(&self) -> String {
        self.created_at.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}

/// Create a preview of text, truncated to `max_chars` characters.
///
/// Control characters are dropped. Appends `...` when the text was cut.
pub fn create_preview(text: &str, max_chars: usize) -> String {
    let mut chars = text.chars().filter(|c| !c.is_control());
    let cleaned: String = chars.by_ref().take(max_chars).collect();

    if chars.next().is_some() {
        format!("{cleaned}...")
    } else {
        cleaned
    }
}
