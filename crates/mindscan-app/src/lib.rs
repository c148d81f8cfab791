//! Mindscan - keyword-based emotion analysis for free-form text.
//!
//! This crate provides the presentation layer around the analyzer:
//!
//! - Catalog loading (explicit file, default config file, or built-in)
//! - Text reports with an ASCII bar chart of the scores
//! - Interactive sessions with an in-memory analysis history
//!
//! # Usage
//!
//! ```
//! use mindscan_app::report::render_report;
//! use mindscan_core::PatternAnalyzer;
//!
//! let analyzer = PatternAnalyzer::builtin();
//! let report = render_report(&analyzer.analyze("I'm fed up"));
//! assert!(report.contains("Dominant Emotion: Anger"));
//! ```

pub mod catalog;
pub mod report;
pub mod session;

pub use catalog::{default_catalog_path, load_analyzer};
pub use session::{Outcome, Session};
