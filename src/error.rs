//! Error types for the line transformer and the file orchestrator.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Failure of the line transformer on a single line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransformError {
    /// More than one annotation marker on the same line.
    #[error("malformed annotation: found {markers} \"{marker}\" markers, expected at most one")]
    MalformedAnnotation { marker: String, markers: usize },

    /// A path the transformer considers unreachable. This is a defect in sol-env.
    #[error("invariant violation: {reason}. This should not happen, please report an issue")]
    InvariantViolation { reason: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DelimiterError {
    #[error("comment delimiter must not be empty")]
    Empty,
    #[error("comment delimiter must not contain whitespace: \"{0}\"")]
    Whitespace(String),
}

/// Errors raised while discovering, scanning or rewriting files.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{}:L{line}: {reason}", .path.display())]
    Line {
        path: PathBuf,
        line: usize,
        reason: TransformError,
    },

    #[error("failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot access path during discovery")]
    Walk(#[from] walkdir::Error),

    #[error("invalid ignore pattern \"{pattern}\"")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("path does not exist: {}", .0.display())]
    MissingPath(PathBuf),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
