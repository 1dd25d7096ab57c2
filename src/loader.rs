// src/loader.rs
//! Reads expected component sources relative to the project root.

use crate::types::SourceFile;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Reads one expected file. Never fails: unreadable files come back with
/// `found == false` and the reason attached.
#[must_use]
pub fn load(root: &Path, rel: &Path) -> SourceFile {
    let full = root.join(rel);
    match fs::read_to_string(&full) {
        Ok(content) => SourceFile::loaded(rel.to_path_buf(), content),
        Err(e) => SourceFile::missing(rel.to_path_buf(), describe(&e)),
    }
}

/// Lazily loads each path in order, one read per path.
pub fn load_all<'a>(
    root: &'a Path,
    files: &'a [impl AsRef<Path>],
) -> impl Iterator<Item = SourceFile> + 'a {
    files.iter().map(move |rel| load(root, rel.as_ref()))
}

fn describe(e: &std::io::Error) -> String {
    match e.kind() {
        ErrorKind::NotFound => "not found".to_string(),
        ErrorKind::PermissionDenied => "permission denied".to_string(),
        ErrorKind::InvalidData => "not valid UTF-8".to_string(),
        _ => e.to_string(),
    }
}
