// src/config/mod.rs
pub mod io;
pub mod types;

pub use self::types::{BplintToml, PatternRule, RuleConfig};
use crate::error::{BplintError, Result};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "bplint.toml";

/// Effective settings for one run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Project root the expected file paths are relative to.
    pub root: PathBuf,
    /// Expected files, in report order.
    pub files: Vec<PathBuf>,
    pub rules: RuleConfig,
    pub verbose: bool,
    /// Config file the settings came from, if any.
    pub source: Option<PathBuf>,
}

impl Config {
    /// Built-in defaults rooted at `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::from_toml(root.into(), BplintToml::default(), None)
    }

    /// Loads `bplint.toml` (or `explicit`) on top of the defaults.
    ///
    /// # Errors
    /// Returns error if the config file is unreadable or malformed, or if the
    /// resulting rule set is invalid.
    pub fn load(root: impl Into<PathBuf>, explicit: Option<&Path>) -> Result<Self> {
        let root = root.into();
        let config = match io::load_toml_config(&root, explicit)? {
            Some((path, toml)) => Self::from_toml(root, toml, Some(path)),
            None => Self::from_toml(root, BplintToml::default(), None),
        };
        config.validate()?;
        Ok(config)
    }

    fn from_toml(root: PathBuf, toml: BplintToml, source: Option<PathBuf>) -> Self {
        Self {
            root,
            files: toml.files.into_iter().map(PathBuf::from).collect(),
            rules: toml.rules,
            verbose: false,
            source,
        }
    }

    /// Replaces the expected file list when `files` is non-empty.
    pub fn override_files(&mut self, files: Vec<PathBuf>) {
        if !files.is_empty() {
            self.files = files;
        }
    }

    /// Validates the separator and breakpoint names.
    ///
    /// # Errors
    /// Returns error on an empty or whitespace-bearing separator or breakpoint name.
    pub fn validate(&self) -> Result<()> {
        let sep = &self.rules.separator;
        if sep.is_empty() || sep.chars().any(char::is_whitespace) {
            return Err(BplintError::InvalidSeparator(sep.clone()));
        }
        for name in &self.rules.breakpoints {
            if name.is_empty() || name.chars().any(char::is_whitespace) {
                return Err(BplintError::InvalidBreakpoint(name.clone()));
            }
        }
        Ok(())
    }
}
