// src/config/io.rs
use super::types::BplintToml;
use super::CONFIG_FILE;
use crate::error::{BplintError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Resolves and parses the config file.
///
/// An explicit path must exist. Without one, `bplint.toml` under `root` is
/// read if present; otherwise `Ok(None)`.
///
/// # Errors
/// Returns error if the file cannot be read or is not valid TOML.
pub fn load_toml_config(root: &Path, explicit: Option<&Path>) -> Result<Option<(PathBuf, BplintToml)>> {
    let path = match explicit {
        Some(p) => p.to_path_buf(),
        None => {
            let candidate = root.join(CONFIG_FILE);
            if !candidate.is_file() {
                return Ok(None);
            }
            candidate
        }
    };

    let content = fs::read_to_string(&path).map_err(|source| BplintError::Io {
        source,
        path: path.clone(),
    })?;
    let parsed = parse_toml(&content, &path)?;
    Ok(Some((path, parsed)))
}

/// Parses `bplint.toml` content. Missing keys take their defaults.
///
/// # Errors
/// Returns error if the content is not valid TOML for the config shape.
pub fn parse_toml(content: &str, path: &Path) -> Result<BplintToml> {
    toml::from_str(content).map_err(|source| BplintError::Config {
        path: path.to_path_buf(),
        source,
    })
}
