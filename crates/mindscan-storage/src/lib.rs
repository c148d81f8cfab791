//! Mindscan Storage - in-memory analysis history.
//!
//! The history lives for the lifetime of the process only. It is owned by
//! the presentation layer; the analyzer never touches it.
//!
//! # Example
//!
//! ```
//! use mindscan_core::PatternAnalyzer;
//! use mindscan_storage::HistoryStore;
//!
//! let analyzer = PatternAnalyzer::builtin();
//! let mut history = HistoryStore::new();
//!
//! let text = "I'm so happy today";
//! let id = history.append(text, analyzer.analyze(text));
//!
//! assert_eq!(id, 1);
//! assert_eq!(history.list().len(), 1);
//! ```

pub mod error;
pub mod history;
pub mod models;

pub use error::{Result, StorageError};
pub use history::HistoryStore;
pub use models::{create_preview, AnalysisRecord, PREVIEW_MAX_CHARS};
