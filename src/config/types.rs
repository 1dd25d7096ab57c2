use serde::{Deserialize, Serialize};

/// A declarative responsive idiom: `base`, whitespace, then `responsive`.
///
/// Both fragments are regular expressions. `{bp}` expands to an alternation
/// of the configured breakpoint names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternRule {
    pub name: String,
    pub base: String,
    pub responsive: String,
}

impl PatternRule {
    #[must_use]
    pub fn new(name: &str, base: &str, responsive: &str) -> Self {
        Self {
            name: name.to_string(),
            base: base.to_string(),
            responsive: responsive.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleConfig {
    #[serde(default = "default_separator")]
    pub separator: String,
    #[serde(default = "default_breakpoints")]
    pub breakpoints: Vec<String>,
    #[serde(default = "default_patterns")]
    pub patterns: Vec<PatternRule>,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            separator: default_separator(),
            breakpoints: default_breakpoints(),
            patterns: default_patterns(),
        }
    }
}

fn default_separator() -> String { ":".to_string() }

fn default_breakpoints() -> Vec<String> {
    ["sm", "md", "lg", "xl"].iter().map(|s| (*s).to_string()).collect()
}

fn default_files() -> Vec<String> {
    [
        "src/components/Navigation.jsx",
        "src/components/Profile.jsx",
        "src/components/WorkExperience.jsx",
        "src/components/Education.jsx",
        "src/components/Contact.jsx",
    ]
    .iter()
    .map(|s| (*s).to_string())
    .collect()
}

fn default_patterns() -> Vec<PatternRule> {
    vec![
        PatternRule::new("Hidden on mobile", "hidden", "md:(?:flex|block)"),
        PatternRule::new("Responsive grid", "grid-cols-1", "(?:md:grid-cols-2|lg:grid-cols-)"),
        PatternRule::new("Responsive text", r"text-\w+", "(?:{bp}):text-"),
        PatternRule::new(
            "Responsive spacing",
            r"(?:p|m|px|py|mx|my)-\d+",
            "(?:{bp}):(?:p|m|px|py|mx|my)-",
        ),
        PatternRule::new("Responsive sizing", r"(?:w|h)-\d+", "(?:{bp}):(?:w|h)-"),
    ]
}

/// On-disk shape of `bplint.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BplintToml {
    #[serde(default = "default_files")]
    pub files: Vec<String>,
    #[serde(default)]
    pub rules: RuleConfig,
}

impl Default for BplintToml {
    fn default() -> Self {
        Self { files: default_files(), rules: RuleConfig::default() }
    }
}
