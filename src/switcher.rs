//! The file orchestrator.
//!
//! Runs the line transformer over every line of every target file, buffers
//! the rewritten files in a [`ChangeSet`], and writes them only once the
//! whole target set has been scanned without error.
//!
//! ```text
//! read file -> split lines -> transform_line (per line)
//!     -> FileChange (if any line changed) -> ChangeSet
//!     -> commit (after every file scanned)
//! ```
//!
//! Commit is batched, not transactional: a write failure leaves files that
//! were already written in their new state.

use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use crate::delimiter::DelimiterPolicy;
use crate::error::{Error, Result};
use crate::report::{Reporter, Summary};
use crate::transform::{Toggle, transform_line};

/// A single switched line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineChange {
    /// 1-based line number.
    pub line: usize,
    pub toggle: Toggle,
}

/// The pending rewrite of one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileChange {
    pub path: PathBuf,
    /// Every line of the file in order, terminators included.
    pub lines: Vec<String>,
    /// Only the lines that were switched.
    pub changes: Vec<LineChange>,
}

impl FileChange {
    /// The new file content.
    pub fn contents(&self) -> String {
        self.lines.concat()
    }
}

/// All pending rewrites of a run, in discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeSet {
    files: Vec<FileChange>,
    files_scanned: usize,
}

impl ChangeSet {
    pub fn files(&self) -> &[FileChange] {
        &self.files
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn summary(&self) -> Summary {
        let mut summary = Summary {
            files_scanned: self.files_scanned,
            files_changed: self.files.len(),
            ..Default::default()
        };
        for change in self.files.iter().flat_map(|file| &file.changes) {
            match change.toggle {
                Toggle::Activated => summary.activated += 1,
                Toggle::Deactivated => summary.deactivated += 1,
            }
        }
        summary
    }

    /// Print every switched line.
    pub fn report<W: Write>(&self, reporter: &mut Reporter<W>) {
        for file in &self.files {
            for change in &file.changes {
                let new_line = file
                    .lines
                    .get(change.line - 1)
                    .map(String::as_str)
                    .unwrap_or_default();
                reporter.line_switched(&file.path, change.line, change.toggle, new_line);
            }
        }
    }
}

/// Switches files to one target environment.
#[derive(Debug, Clone)]
pub struct Switcher<'a> {
    env: &'a str,
    delimiters: &'a DelimiterPolicy,
}

impl<'a> Switcher<'a> {
    pub fn new(env: &'a str, delimiters: &'a DelimiterPolicy) -> Self {
        Self { env, delimiters }
    }

    /// Transform the in-memory `content` of `path`.
    ///
    /// Returns `None` when no line changed. A transformer failure is
    /// returned with the file path and 1-based line number attached.
    pub fn scan_source(&self, path: &Path, content: &str) -> Result<Option<FileChange>> {
        let delimiter = self.delimiters.resolve(path);

        let mut lines = Vec::new();
        let mut changes = Vec::new();

        for (idx, line) in content.split_inclusive('\n').enumerate() {
            let line_no = idx + 1;
            let outcome =
                transform_line(&delimiter, self.env, line).map_err(|reason| Error::Line {
                    path: path.to_path_buf(),
                    line: line_no,
                    reason,
                })?;

            if let Some(toggle) = outcome.toggle() {
                changes.push(LineChange {
                    line: line_no,
                    toggle,
                });
            }
            lines.push(outcome.text(line).to_string());
        }

        if changes.is_empty() {
            return Ok(None);
        }

        Ok(Some(FileChange {
            path: path.to_path_buf(),
            lines,
            changes,
        }))
    }

    /// Read and transform one file.
    pub fn scan_file<W: Write>(
        &self,
        path: &Path,
        reporter: &mut Reporter<W>,
    ) -> Result<Option<FileChange>> {
        reporter.opening_file(path);
        let content = fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
        self.scan_source(path, &content)
    }

    /// Scan every file in order. Stops at the first error, dropping
    /// everything buffered so far.
    pub fn scan_files<P: AsRef<Path>, W: Write>(
        &self,
        paths: &[P],
        reporter: &mut Reporter<W>,
    ) -> Result<ChangeSet> {
        let mut change_set = ChangeSet::default();
        for path in paths {
            if let Some(change) = self.scan_file(path.as_ref(), reporter)? {
                change_set.files.push(change);
            }
            change_set.files_scanned += 1;
        }
        Ok(change_set)
    }
}

/// Write every pending file in full, in order. Returns the number of files written.
pub fn commit<W: Write>(change_set: &ChangeSet, reporter: &mut Reporter<W>) -> Result<usize> {
    for file in &change_set.files {
        reporter.writing_file(&file.path);
        fs::write(&file.path, file.contents()).map_err(|source| Error::Write {
            path: file.path.clone(),
            source,
        })?;
    }
    Ok(change_set.files.len())
}

/// Scan `paths` for `env`, report the switched lines and, unless `dry_run`,
/// write the changes.
pub fn switch<P: AsRef<Path>, W: Write>(
    env: &str,
    paths: &[P],
    delimiters: &DelimiterPolicy,
    dry_run: bool,
    reporter: &mut Reporter<W>,
) -> Result<ChangeSet> {
    let change_set = Switcher::new(env, delimiters).scan_files(paths, reporter)?;
    change_set.report(reporter);
    if !dry_run {
        commit(&change_set, reporter)?;
    }
    reporter.summary(env, &change_set.summary(), dry_run);
    Ok(change_set)
}
