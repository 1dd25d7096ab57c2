// src/types.rs
use serde::Serialize;
use std::path::{Path, PathBuf};

/// A component source file as loaded for one run.
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub path: PathBuf,
    pub content: Option<String>,
    pub load_error: Option<String>,
}

impl SourceFile {
    #[must_use]
    pub fn loaded(path: PathBuf, content: String) -> Self {
        Self { path, content: Some(content), load_error: None }
    }

    #[must_use]
    pub fn missing(path: PathBuf, reason: String) -> Self {
        Self { path, content: None, load_error: Some(reason) }
    }

    #[must_use]
    pub fn is_found(&self) -> bool {
        self.content.is_some()
    }
}

/// File stem used as the section title (`src/components/Profile.jsx` -> `Profile`).
fn display_name(path: &Path) -> String {
    path.file_stem()
        .map_or_else(|| path.display().to_string(), |s| s.to_string_lossy().into_owned())
}

/// One named count inside a [`Tally`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TallyEntry {
    pub name: String,
    pub count: usize,
}

/// Ordered name -> count mapping. Order follows the rule declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Tally {
    entries: Vec<TallyEntry>,
}

/// Occurrences of each breakpoint marker within one file.
pub type BreakpointTally = Tally;

/// Occurrences of each structural pattern within one file.
pub type PatternTally = Tally;

impl Tally {
    #[must_use]
    pub fn new(entries: Vec<TallyEntry>) -> Self {
        Self { entries }
    }

    pub fn iter(&self) -> impl Iterator<Item = &TallyEntry> {
        self.entries.iter()
    }

    /// Count for `name`, or 0 when the name is not part of the tally.
    #[must_use]
    pub fn get(&self, name: &str) -> usize {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map_or(0, |e| e.count)
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.entries.iter().map(|e| e.count).sum()
    }

    #[must_use]
    pub fn any(&self) -> bool {
        self.entries.iter().any(|e| e.count > 0)
    }

    /// Entries with a non-zero count, in declaration order.
    pub fn nonzero(&self) -> impl Iterator<Item = &TallyEntry> {
        self.entries.iter().filter(|e| e.count > 0)
    }
}

/// Scan result for a single expected file.
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub path: PathBuf,
    pub found: bool,
    pub breakpoints: BreakpointTally,
    pub patterns: PatternTally,
    pub has_any_responsive_marker: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FileReport {
    /// Report for a file that could not be loaded.
    #[must_use]
    pub fn not_found(path: PathBuf, error: Option<String>) -> Self {
        Self {
            path,
            found: false,
            breakpoints: Tally::default(),
            patterns: Tally::default(),
            has_any_responsive_marker: false,
            error,
        }
    }

    /// A found file with no breakpoint markers. Soft condition only.
    #[must_use]
    pub fn is_warning(&self) -> bool {
        self.found && !self.has_any_responsive_marker
    }

    /// Names of breakpoints with at least one occurrence.
    #[must_use]
    pub fn breakpoints_used(&self) -> Vec<&str> {
        self.breakpoints.nonzero().map(|e| e.name.as_str()).collect()
    }

    #[must_use]
    pub fn responsive_class_count(&self) -> usize {
        self.breakpoints.total()
    }

    #[must_use]
    pub fn display_name(&self) -> String {
        display_name(&self.path)
    }
}

/// Aggregate verdict for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub files_checked: usize,
    pub files_missing: usize,
    pub files_warned: usize,
    pub overall_pass: bool,
}

impl RunSummary {
    #[must_use]
    pub fn new(files_checked: usize, files_missing: usize, files_warned: usize) -> Self {
        Self {
            files_checked,
            files_missing,
            files_warned,
            overall_pass: files_missing == 0,
        }
    }
}

/// Full result of a run, as emitted in JSON mode.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub files: Vec<FileReport>,
    pub summary: RunSummary,
}
