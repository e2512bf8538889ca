//! The line transformer.
//!
//! Decides, for a single line, whether it has to be activated (comment
//! prefix removed) or deactivated (comment prefix inserted) for a target
//! environment. Pure: no I/O and no state shared between lines.

use std::fmt;

use crate::annotation::{AnnotatedLine, split_line};
use crate::delimiter::CommentDelimiter;
use crate::error::TransformError;

/// Which way a line was switched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Toggle {
    Activated,
    Deactivated,
}

impl fmt::Display for Toggle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Toggle::Activated => f.write_str("activated"),
            Toggle::Deactivated => f.write_str("deactivated"),
        }
    }
}

/// Result of running the transformer on one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    /// The line is a fixed point: leave it byte-identical.
    Unchanged,
    /// The comment prefix was removed; holds the new line.
    Activated(String),
    /// The comment prefix was inserted; holds the new line.
    Deactivated(String),
}

impl LineOutcome {
    pub fn toggle(&self) -> Option<Toggle> {
        match self {
            LineOutcome::Unchanged => None,
            LineOutcome::Activated(_) => Some(Toggle::Activated),
            LineOutcome::Deactivated(_) => Some(Toggle::Deactivated),
        }
    }

    /// The resulting line text, falling back to `original` when unchanged.
    pub fn text<'a>(&'a self, original: &'a str) -> &'a str {
        match self {
            LineOutcome::Unchanged => original,
            LineOutcome::Activated(line) | LineOutcome::Deactivated(line) => line,
        }
    }
}

/// Switch `line` to the state `env` requires.
///
/// `line` may end with its terminator (`\n` or `\r\n`) or not; only the code
/// prefix is ever touched, so the terminator comes back exactly as given.
///
/// # Example
///
/// ```
/// use sol_env::delimiter::CommentDelimiter;
/// use sol_env::transform::{LineOutcome, transform_line};
///
/// let line = "    assert(x); // sol-env:console-log,tests";
/// let outcome = transform_line(&CommentDelimiter::slashes(), "production", line).unwrap();
/// assert_eq!(
///     outcome,
///     LineOutcome::Deactivated("    // assert(x); // sol-env:console-log,tests".to_string())
/// );
/// ```
pub fn transform_line(
    delimiter: &CommentDelimiter,
    env: &str,
    line: &str,
) -> Result<LineOutcome, TransformError> {
    let Some(AnnotatedLine { code, annotation }) = split_line(line, delimiter)? else {
        return Ok(LineOutcome::Unchanged);
    };

    // Whitespace-only code is left alone whatever the annotation says.
    let Some(start) = code.find(|c: char| !c.is_whitespace()) else {
        return Ok(LineOutcome::Unchanged);
    };

    let prefix = delimiter.deactivation_prefix();
    let deactivated = code[start..].starts_with(prefix.as_str());
    let selected = annotation.contains(env);

    match (deactivated, selected) {
        (true, true) => {
            let (Some(indent), Some(rest)) = (line.get(..start), line.get(start + prefix.len()..))
            else {
                return Err(TransformError::InvariantViolation {
                    reason: "comment prefix does not fall on a character boundary",
                });
            };
            Ok(LineOutcome::Activated(format!("{indent}{rest}")))
        }
        (false, false) => {
            let (Some(indent), Some(rest)) = (line.get(..start), line.get(start..)) else {
                return Err(TransformError::InvariantViolation {
                    reason: "first code character does not fall on a character boundary",
                });
            };
            Ok(LineOutcome::Deactivated(format!("{indent}{prefix}{rest}")))
        }
        (true, false) | (false, true) => Ok(LineOutcome::Unchanged),
    }
}
