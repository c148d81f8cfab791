//! Interactive analysis session.
//!
//! Each non-blank input line is analyzed, reported and appended to the
//! session history. A few exact-match commands inspect the history.

use std::io::{BufRead, Write};

use anyhow::Context;
use mindscan_core::PatternAnalyzer;
use mindscan_storage::HistoryStore;

use crate::report::{render_history, render_json, render_report};

/// Session help text.
pub const HELP: &str = "Type text to analyze it. Commands:\n  \
                        :history  show previous analyses, newest first\n  \
                        :clear    forget previous analyses\n  \
                        :help     show this help\n  \
                        :quit     exit the session\n";

const PROMPT: &str = "> ";

/// Result of handling one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Text to show the user.
    Output(String),
    /// The user asked to leave.
    Quit,
}

/// An interactive session owning its history.
pub struct Session<'a> {
    analyzer: &'a PatternAnalyzer,
    history: HistoryStore,
    json: bool,
}

impl<'a> Session<'a> {
    /// Creates a session with an empty history.
    pub fn new(analyzer: &'a PatternAnalyzer, json: bool) -> Self {
        Self {
            analyzer,
            history: HistoryStore::new(),
            json,
        }
    }

    /// Returns the session history.
    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    /// Handles one input line.
    ///
    /// Blank lines are rejected before reaching the analyzer.
    pub fn handle_line(&mut self, line: &str) -> anyhow::Result<Outcome> {
        let output = match line.trim() {
            "" if self.json => String::new(),
            "" => "Please enter some text to analyze.\n".to_string(),
            ":quit" | ":exit" | ":q" => return Ok(Outcome::Quit),
            ":help" => HELP.to_string(),
            ":history" if self.json => self.history.export_json()? + "\n",
            ":history" => render_history(&self.history),
            ":clear" => {
                let count = self.history.len();
                self.history.clear();
                format!("Cleared {count} analyses.\n")
            }
            _ => {
                let result = self.analyzer.analyze(line);
                let output = if self.json {
                    render_json(&result)? + "\n"
                } else {
                    render_report(&result)
                };
                let id = self.history.append(line, result);
                tracing::info!(id, "Analyzed input");
                output
            }
        };

        Ok(Outcome::Output(output))
    }

    /// Reads lines until `:quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> anyhow::Result<()> {
        // JSON mode writes nothing but JSON documents
        if !self.json {
            output.write_all(HELP.as_bytes())?;
        }

        let mut lines = input.lines();
        loop {
            if !self.json {
                output.write_all(PROMPT.as_bytes())?;
            }
            output.flush()?;

            let Some(line) = lines.next() else {
                break;
            };
            let line = line.context("Failed to read input")?;

            match self.handle_line(&line)? {
                Outcome::Output(text) => output.write_all(text.as_bytes())?,
                Outcome::Quit => break,
            }
        }

        tracing::debug!(analyses = self.history.len(), "Session ended");
        Ok(())
    }
}
