// src/scan/patterns.rs
//! Named responsive idioms matched as two-part textual co-occurrences.

use crate::config::PatternRule;
use crate::error::{BplintError, Result};
use crate::types::{PatternTally, Tally, TallyEntry};
use regex::Regex;

/// Placeholder expanded to the configured breakpoint alternation.
pub const BREAKPOINT_PLACEHOLDER: &str = "{bp}";

/// Matches nothing; stands in for `{bp}` when no breakpoints are configured.
const NEVER: &str = r"\b\B";

pub struct CompiledPattern {
    pub name: String,
    pub regex: Regex,
}

/// Counts every pattern independently over the same text.
pub struct PatternClassifier {
    patterns: Vec<CompiledPattern>,
}

impl PatternClassifier {
    /// Compiles the pattern table.
    ///
    /// # Errors
    /// Returns error if a fragment is not a valid regular expression.
    pub fn new(rules: &[PatternRule], breakpoints: &[String]) -> Result<Self> {
        let alternation = breakpoint_alternation(breakpoints);
        let patterns = rules
            .iter()
            .map(|rule| {
                let source = compile_source(rule, &alternation);
                let regex = Regex::new(&source).map_err(|source| BplintError::InvalidPattern {
                    name: rule.name.clone(),
                    source,
                })?;
                Ok(CompiledPattern { name: rule.name.clone(), regex })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { patterns })
    }

    #[must_use]
    pub fn classify(&self, text: &str) -> PatternTally {
        Tally::new(
            self.patterns
                .iter()
                .map(|p| TallyEntry {
                    name: p.name.clone(),
                    count: p.regex.find_iter(text).count(),
                })
                .collect(),
        )
    }

    pub fn patterns(&self) -> impl Iterator<Item = &CompiledPattern> {
        self.patterns.iter()
    }
}

/// `(?:base)\s+(?:responsive)` with `{bp}` expanded in both halves.
fn compile_source(rule: &PatternRule, alternation: &str) -> String {
    let base = rule.base.replace(BREAKPOINT_PLACEHOLDER, alternation);
    let responsive = rule.responsive.replace(BREAKPOINT_PLACEHOLDER, alternation);
    format!(r"(?:{base})\s+(?:{responsive})")
}

fn breakpoint_alternation(breakpoints: &[String]) -> String {
    if breakpoints.is_empty() {
        return NEVER.to_string();
    }
    breakpoints
        .iter()
        .map(|b| regex::escape(b))
        .collect::<Vec<_>>()
        .join("|")
}
