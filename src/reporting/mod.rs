// src/reporting/mod.rs
//! Report sinks for scan results.

pub mod console;
pub mod json;

pub use self::console::ConsoleReporter;
pub use self::json::JsonReporter;

use crate::error::Result;
use crate::types::{FileReport, RunSummary};

/// Receives file reports in scan order, one at a time.
pub trait Reporter {
    /// Called once before the first file.
    ///
    /// # Errors
    /// Returns error if the sink cannot be written.
    fn begin(&mut self) -> Result<()>;

    /// Called once per expected file, found or not.
    ///
    /// # Errors
    /// Returns error if the sink cannot be written.
    fn file(&mut self, report: &FileReport) -> Result<()>;

    /// Called after the last file. Returns the run verdict.
    ///
    /// # Errors
    /// Returns error if the sink cannot be written.
    fn finish(&mut self) -> Result<RunSummary>;
}

/// Run-wide counters, owned by a reporter for the duration of one run.
#[derive(Debug, Clone, Default)]
pub struct Aggregator {
    checked: usize,
    missing: usize,
    warned: usize,
}

impl Aggregator {
    pub fn record(&mut self, report: &FileReport) {
        self.checked += 1;
        if !report.found {
            self.missing += 1;
        } else if report.is_warning() {
            self.warned += 1;
        }
    }

    #[must_use]
    pub fn summary(&self) -> RunSummary {
        RunSummary::new(self.checked, self.missing, self.warned)
    }
}

pub(crate) fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}
