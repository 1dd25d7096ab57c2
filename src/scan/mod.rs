// src/scan/mod.rs
//! Scan pipeline: load each expected file, tally breakpoints and patterns,
//! hand the result to a reporter.

pub mod breakpoints;
pub mod patterns;

pub use self::breakpoints::BreakpointScanner;
pub use self::patterns::PatternClassifier;

use crate::config::{Config, RuleConfig};
use crate::error::Result;
use crate::loader;
use crate::reporting::Reporter;
use crate::types::{FileReport, RunSummary, SourceFile};

/// Compiled rule set. Holds no per-run state.
pub struct Linter {
    breakpoints: BreakpointScanner,
    patterns: PatternClassifier,
}

impl Linter {
    /// Compiles the breakpoint markers and pattern table.
    ///
    /// # Errors
    /// Returns error if any rule fails to compile.
    pub fn new(rules: &RuleConfig) -> Result<Self> {
        Ok(Self {
            breakpoints: BreakpointScanner::new(&rules.breakpoints, &rules.separator)?,
            patterns: PatternClassifier::new(&rules.patterns, &rules.breakpoints)?,
        })
    }

    /// Produces the report for one loaded (or missing) file.
    #[must_use]
    pub fn scan(&self, source: &SourceFile) -> FileReport {
        let Some(text) = source.content.as_deref() else {
            return FileReport::not_found(source.path.clone(), source.load_error.clone());
        };

        let breakpoints = self.breakpoints.scan(text);
        let patterns = self.patterns.classify(text);
        let has_any_responsive_marker = breakpoints.any();

        FileReport {
            path: source.path.clone(),
            found: true,
            breakpoints,
            patterns,
            has_any_responsive_marker,
            error: None,
        }
    }

    /// Runs every expected file through the pipeline in order, streaming each
    /// report to `reporter` before the next file is read.
    ///
    /// # Errors
    /// Returns error only if the reporter fails to write.
    pub fn run<R: Reporter + ?Sized>(&self, config: &Config, reporter: &mut R) -> Result<RunSummary> {
        reporter.begin()?;
        for source in loader::load_all(&config.root, &config.files) {
            let report = self.scan(&source);
            reporter.file(&report)?;
        }
        reporter.finish()
    }

    #[must_use]
    pub fn breakpoint_scanner(&self) -> &BreakpointScanner {
        &self.breakpoints
    }

    #[must_use]
    pub fn pattern_classifier(&self) -> &PatternClassifier {
        &self.patterns
    }
}
