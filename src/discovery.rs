//! Target file discovery.
//!
//! A file path is its own target set. A directory is searched recursively
//! under its immediate `contracts` subdirectory (configurable) for files with
//! one of the configured extensions. Hidden files and directories (names
//! starting with `.`) below the source directory are skipped.

use std::{
    ffi::OsStr,
    path::{Path, PathBuf},
};

use glob::Pattern;
use walkdir::WalkDir;

use crate::error::{Error, Result};

/// What to look for when the target path is a directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveryOptions {
    /// Subdirectory of the root that holds the sources.
    pub source_dir: String,
    /// Extensions without the leading dot.
    pub extensions: Vec<String>,
    /// Glob patterns matched against full paths.
    pub ignores: Vec<String>,
}

impl Default for DiscoveryOptions {
    fn default() -> Self {
        Self {
            source_dir: "contracts".to_string(),
            extensions: vec!["sol".to_string()],
            ignores: Vec::new(),
        }
    }
}

/// Produce the ordered list of files to process for `root`.
///
/// Directory results are sorted by path so runs are reproducible. A missing
/// `contracts` directory yields an empty list.
pub fn discover_files(root: &Path, options: &DiscoveryOptions) -> Result<Vec<PathBuf>> {
    if root.is_file() {
        return Ok(vec![root.to_path_buf()]);
    }
    if !root.exists() {
        return Err(Error::MissingPath(root.to_path_buf()));
    }

    let ignores = options
        .ignores
        .iter()
        .map(|p| {
            Pattern::new(p).map_err(|source| Error::Pattern {
                pattern: p.clone(),
                source,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let source_dir = root.join(&options.source_dir);
    if !source_dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut files = Vec::new();
    let walker = WalkDir::new(&source_dir)
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden(e.file_name()));
    for entry in walker {
        let entry = entry?;
        let path = entry.path();

        if !entry.file_type().is_file() || !has_extension(path, &options.extensions) {
            continue;
        }

        let path_str = path.to_string_lossy();
        if ignores.iter().any(|p| p.matches(&path_str)) {
            continue;
        }

        files.push(path.to_path_buf());
    }

    files.sort();
    Ok(files)
}

fn is_hidden(name: &OsStr) -> bool {
    name.to_string_lossy().starts_with('.')
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| extensions.iter().any(|e| e == ext))
}
