//! Text rendering of analysis results, history and catalog.

use mindscan_core::{AnalysisResult, CategoryScore, PatternAnalyzer};
use mindscan_storage::HistoryStore;
use serde::Serialize;

/// Shown above every report.
pub const DISCLAIMER: &str = "Note: This is a demonstration tool. For real mental health support, \
                              please consult a licensed professional.";

/// Bar width of the full report chart.
pub const CHART_WIDTH: usize = 40;

/// Bar width of the per-entry history chart.
pub const MINI_CHART_WIDTH: usize = 20;

/// Renders one bar per category in configured order.
///
/// Bars are scaled to the highest score; any non-zero score gets at least
/// one cell.
pub fn render_chart(result: &AnalysisResult, width: usize) -> String {
    let series = result.chart_series();
    let max = series.iter().map(|(_, score)| *score).max().unwrap_or(0);
    let label_width = series.iter().map(|(name, _)| name.len()).max().unwrap_or(0);

    let mut out = String::new();
    for (name, score) in series {
        let bar = "#".repeat(bar_length(score, max, width));
        out.push_str(&format!("{name:<label_width$} | {bar} {score}\n"));
    }
    out
}

fn bar_length(score: usize, max: usize, width: usize) -> usize {
    if score == 0 || max == 0 {
        0
    } else {
        (score * width / max).max(1)
    }
}

/// Renders the full report for one analysis.
pub fn render_report(result: &AnalysisResult) -> String {
    let mut out = String::new();
    out.push_str(DISCLAIMER);
    out.push_str("\n\nEmotion Analysis Scores\n\n");
    out.push_str(&render_chart(result, CHART_WIDTH));

    out.push_str(&format!("\nDominant Emotion: {}\n", result.dominant()));

    out.push_str("\nMatched Keywords:\n");
    let matched: Vec<&CategoryScore> = result
        .categories()
        .iter()
        .filter(|c| !c.matches.is_empty())
        .collect();
    if matched.is_empty() {
        out.push_str("- none\n");
    }
    for category in matched {
        let terms: Vec<&str> = category.matches.iter().map(String::as_str).collect();
        out.push_str(&format!("- {}: {}\n", category.emotion, terms.join(", ")));
    }

    out.push_str("\nRaw Emotion Scores:\n");
    for category in result.categories() {
        out.push_str(&format!("{:<12}{}\n", category.emotion.name(), category.score));
    }

    out
}

#[derive(Serialize)]
struct JsonReport<'a> {
    dominant: &'static str,
    total_matches: usize,
    categories: &'a [CategoryScore],
}

/// Renders an analysis as pretty JSON.
pub fn render_json(result: &AnalysisResult) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&JsonReport {
        dominant: result.dominant().name(),
        total_matches: result.total_matches(),
        categories: result.categories(),
    })
}

/// Renders the session history, newest first.
pub fn render_history(history: &HistoryStore) -> String {
    if history.is_empty() {
        return "No analyses yet.\n".to_string();
    }

    let mut out = format!("Analysis History ({} entries)\n", history.len());
    for record in history.recent() {
        out.push_str(&format!(
            "\nAnalysis {} (#{})\n",
            record.timestamp_label(),
            record.id
        ));
        out.push_str(&format!("Input Text: {}\n", record.preview()));
        out.push_str(&format!("Dominant Emotion: {}\n", record.dominant()));
        for line in render_chart(&record.result, MINI_CHART_WIDTH).lines() {
            out.push_str(&format!("  {line}\n"));
        }
    }
    out
}

/// Renders the active rule catalog.
pub fn render_catalog(analyzer: &PatternAnalyzer) -> String {
    let mut out = String::new();
    for category in analyzer.categories() {
        let emotion = category.emotion();
        out.push_str(&format!("{} - {}\n", emotion, emotion.description()));
        for rule in category.rules() {
            out.push_str(&format!("  {:<9} {}\n", rule.kind().as_str(), rule.terms().join(", ")));
        }
    }
    out
}
