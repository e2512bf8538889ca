//! Parsing of `sol-env:` annotations.
//!
//! An annotation is a trailing line comment listing the environments in
//! which the line should be active:
//!
//! ```text
//! console.log(x); // sol-env:console-log,tests
//! testLimit: 5000 # sol-env:dev
//! ```
//!
//! The list is comma separated and whitespace sensitive: `dev, tests`
//! names the environments `dev` and ` tests`.

use crate::delimiter::CommentDelimiter;
use crate::error::TransformError;

/// Keyword following the comment delimiter in every annotation.
pub const ANNOTATION_KEYWORD: &str = "sol-env:";

/// The full marker literal for `delimiter`, e.g. `// sol-env:`.
pub fn marker(delimiter: &CommentDelimiter) -> String {
    format!("{} {}", delimiter, ANNOTATION_KEYWORD)
}

/// A parsed annotation: the environments in which its line is active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation<'a> {
    envs: Vec<&'a str>,
}

impl<'a> Annotation<'a> {
    /// Parse the text following the marker. A trailing `\n` or `\r\n` is not
    /// part of the environment list.
    pub fn parse(text: &'a str) -> Self {
        let text = strip_terminator(text);
        Self {
            envs: text.split(',').collect(),
        }
    }

    /// Whether `env` is listed, compared verbatim.
    pub fn contains(&self, env: &str) -> bool {
        self.envs.contains(&env)
    }

    pub fn envs(&self) -> &[&'a str] {
        &self.envs
    }
}

/// A line split at its annotation marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatedLine<'a> {
    /// Everything before the marker.
    pub code: &'a str,
    pub annotation: Annotation<'a>,
}

/// Split `line` at the annotation marker for `delimiter`.
///
/// Returns `Ok(None)` when the line carries no annotation and
/// [`TransformError::MalformedAnnotation`] when it carries more than one.
pub fn split_line<'a>(
    line: &'a str,
    delimiter: &CommentDelimiter,
) -> Result<Option<AnnotatedLine<'a>>, TransformError> {
    let marker = marker(delimiter);

    let markers = line.matches(marker.as_str()).count();
    if markers > 1 {
        return Err(TransformError::MalformedAnnotation { marker, markers });
    }

    Ok(line
        .split_once(marker.as_str())
        .map(|(code, rest)| AnnotatedLine {
            code,
            annotation: Annotation::parse(rest),
        }))
}

/// Strip one trailing line terminator (`\n` or `\r\n`).
pub fn strip_terminator(text: &str) -> &str {
    match text.strip_suffix('\n') {
        Some(rest) => rest.strip_suffix('\r').unwrap_or(rest),
        None => text,
    }
}
