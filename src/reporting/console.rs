//! Human-readable streaming report.
//!
//! Each file's section is written as soon as its report arrives; the summary
//! block and verdict follow the last file.

use super::{pluralize, Aggregator, Reporter};
use crate::error::Result;
use crate::types::{FileReport, RunSummary};
use colored::Colorize;
use std::io::Write;

const BANNER_WIDTH: usize = 40;

pub struct ConsoleReporter<W: Write> {
    out: W,
    totals: Aggregator,
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out, totals: Aggregator::default() }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn banner(&mut self, title: &str) -> Result<()> {
        let rule = "=".repeat(BANNER_WIDTH);
        writeln!(self.out, "{}", rule.cyan())?;
        writeln!(self.out, "{}", title.cyan())?;
        writeln!(self.out, "{}", rule.cyan())?;
        Ok(())
    }

    fn missing(&mut self, report: &FileReport) -> Result<()> {
        let line = match report.error.as_deref() {
            None | Some("not found") => format!("✗ {} not found", report.path.display()),
            Some(reason) => format!("✗ {} unreadable: {reason}", report.path.display()),
        };
        writeln!(self.out, "{}", line.red())?;
        Ok(())
    }

    fn section(&mut self, report: &FileReport) -> Result<()> {
        writeln!(self.out, "{}", format!("Testing: {}", report.display_name()).blue())?;
        writeln!(self.out, "{}", "─".repeat(BANNER_WIDTH))?;

        if report.has_any_responsive_marker {
            writeln!(self.out, "{}", "✓ Responsive classes found".green())?;
            writeln!(self.out, "  Breakpoints: {}", report.breakpoints_used().join(", "))?;
            writeln!(
                self.out,
                "  Total responsive classes: {}",
                report.responsive_class_count()
            )?;
        } else {
            writeln!(self.out, "{}", "⚠ No responsive classes detected".yellow())?;
            writeln!(self.out, "  This component may not be responsive")?;
        }

        writeln!(self.out)?;
        writeln!(self.out, "  Pattern Analysis:")?;
        for entry in report.patterns.nonzero() {
            writeln!(
                self.out,
                "  {} {}: {} {}",
                "✓".green(),
                entry.name,
                entry.count,
                pluralize("instance", entry.count)
            )?;
        }
        writeln!(self.out)?;
        writeln!(self.out)?;
        Ok(())
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn begin(&mut self) -> Result<()> {
        self.banner("Responsive Design Verification")?;
        writeln!(self.out)?;
        Ok(())
    }

    fn file(&mut self, report: &FileReport) -> Result<()> {
        self.totals.record(report);
        if report.found {
            self.section(report)
        } else {
            self.missing(report)
        }
    }

    fn finish(&mut self) -> Result<RunSummary> {
        let summary = self.totals.summary();

        self.banner("Summary")?;
        writeln!(self.out, "Components checked: {}", summary.files_checked)?;
        writeln!(self.out, "Issues found: {}", summary.files_missing)?;
        if summary.files_warned > 0 {
            let warn = format!(
                "Warnings: {} {} without responsive classes",
                summary.files_warned,
                pluralize("component", summary.files_warned)
            );
            writeln!(self.out, "{}", warn.yellow())?;
        }

        writeln!(self.out)?;
        if summary.overall_pass {
            writeln!(self.out, "{}", "✓ All components verified successfully!".green())?;
        } else {
            writeln!(self.out, "{}", "✗ Some issues need attention".red())?;
        }
        writeln!(self.out)?;
        self.out.flush()?;

        Ok(summary)
    }
}
