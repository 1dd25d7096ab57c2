//! Machine-readable report: one JSON document written after the last file.

use super::{Aggregator, Reporter};
use crate::error::Result;
use crate::types::{FileReport, RunReport, RunSummary};
use std::io::Write;

/// Writes nothing per file; missing files appear only as `found: false`
/// entries in the final document.
pub struct JsonReporter<W: Write> {
    out: W,
    totals: Aggregator,
    files: Vec<FileReport>,
}

impl<W: Write> JsonReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out, totals: Aggregator::default(), files: Vec::new() }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Reporter for JsonReporter<W> {
    fn begin(&mut self) -> Result<()> {
        Ok(())
    }

    fn file(&mut self, report: &FileReport) -> Result<()> {
        self.totals.record(report);
        self.files.push(report.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<RunSummary> {
        let summary = self.totals.summary();
        let report = RunReport {
            files: std::mem::take(&mut self.files),
            summary,
        };
        serde_json::to_writer_pretty(&mut self.out, &report)?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(summary)
    }
}
