//! `poimatch-cli` — headless POI match scoring runs.

pub mod exit_codes;
pub mod pipeline;

use exit_codes::{EXIT_LOAD, EXIT_QUERY, EXIT_SCORE, EXIT_WRITE};

/// Structured CLI failure: ranged exit code plus stderr diagnostics.
#[derive(Debug)]
pub struct CliError {
    pub code: u8,
    pub message: String,
    pub hint: Option<String>,
}

impl CliError {
    pub fn load(msg: impl Into<String>) -> Self {
        Self { code: EXIT_LOAD, message: msg.into(), hint: None }
    }

    pub fn query(msg: impl Into<String>) -> Self {
        Self { code: EXIT_QUERY, message: msg.into(), hint: None }
    }

    pub fn score(msg: impl Into<String>) -> Self {
        Self { code: EXIT_SCORE, message: msg.into(), hint: None }
    }

    pub fn write(msg: impl Into<String>) -> Self {
        Self { code: EXIT_WRITE, message: msg.into(), hint: None }
    }

    /// Add a hint to an existing error.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}
