// src/scan/breakpoints.rs
//! Counts breakpoint-prefixed utility classes (`md:flex`, `lg:text-xl`).

use crate::error::{BplintError, Result};
use crate::types::{BreakpointTally, Tally, TallyEntry};
use regex::Regex;

struct Marker {
    name: String,
    regex: Regex,
}

/// Matches each breakpoint name used as a class prefix: the name must start
/// at a word boundary and be followed immediately by the separator.
pub struct BreakpointScanner {
    markers: Vec<Marker>,
}

impl BreakpointScanner {
    /// Compiles one marker per breakpoint, in declaration order.
    ///
    /// # Errors
    /// Returns error if the separator is empty or a breakpoint name cannot be
    /// compiled into a marker.
    pub fn new(names: &[String], separator: &str) -> Result<Self> {
        // An empty separator would match bare words like `mdash`.
        if separator.is_empty() {
            return Err(BplintError::InvalidSeparator(separator.to_string()));
        }
        let markers = names
            .iter()
            .map(|name| {
                let regex = Regex::new(&marker_pattern(name, separator)).map_err(|source| {
                    BplintError::InvalidPattern {
                        name: format!("breakpoint {name}"),
                        source,
                    }
                })?;
                Ok(Marker { name: name.clone(), regex })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { markers })
    }

    /// Counts non-overlapping occurrences of every marker in `text`.
    #[must_use]
    pub fn scan(&self, text: &str) -> BreakpointTally {
        Tally::new(
            self.markers
                .iter()
                .map(|m| TallyEntry {
                    name: m.name.clone(),
                    count: m.regex.find_iter(text).count(),
                })
                .collect(),
        )
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.markers.iter().map(|m| m.name.as_str())
    }
}

fn marker_pattern(name: &str, separator: &str) -> String {
    // ASCII word boundary; only anchors when the name starts with a word character.
    let boundary = if name.starts_with(|c: char| c.is_ascii_alphanumeric() || c == '_') {
        r"(?-u:\b)"
    } else {
        ""
    };
    format!("{boundary}{}{}", regex::escape(name), regex::escape(separator))
}
