//! Line-comment delimiters and their inference from file extensions.

use std::{collections::HashMap, fmt, path::Path};

use crate::error::DelimiterError;

/// Delimiter used for files whose extension is unknown.
pub const DEFAULT_DELIMITER: &str = "//";

/// Built-in extension table. Overrides from the config file take precedence.
const BUILTIN_DELIMITERS: &[(&str, &[&str])] = &[
    (
        "//",
        &[
            "sol", "js", "ts", "jsx", "tsx", "rs", "go", "c", "h", "cpp", "java", "kt", "swift",
            "scss",
        ],
    ),
    (
        "#",
        &[
            "vy", "py", "yml", "yaml", "toml", "sh", "rb", "cfg", "conf", "env",
        ],
    ),
    ("--", &["sql", "lua"]),
];

/// A single-line comment delimiter such as `//` or `#`.
///
/// The delimiter decides both the annotation marker (`// sol-env:`) and the
/// deactivation prefix (`// `) of a line.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CommentDelimiter(String);

impl CommentDelimiter {
    /// Create a delimiter, rejecting empty strings and strings containing whitespace.
    pub fn new(delimiter: impl Into<String>) -> Result<Self, DelimiterError> {
        let delimiter = delimiter.into();
        if delimiter.is_empty() {
            return Err(DelimiterError::Empty);
        }
        if delimiter.chars().any(char::is_whitespace) {
            return Err(DelimiterError::Whitespace(delimiter));
        }
        Ok(Self(delimiter))
    }

    /// `//`, used by Solidity and C-like languages.
    pub fn slashes() -> Self {
        Self(DEFAULT_DELIMITER.to_string())
    }

    /// `#`, used by Vyper, Python and YAML.
    pub fn hash() -> Self {
        Self("#".to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The prefix that marks a deactivated line: the delimiter followed by one space.
    pub fn deactivation_prefix(&self) -> String {
        format!("{} ", self.0)
    }

    /// Infer the delimiter for `path` from its extension.
    ///
    /// `overrides` maps extensions (without the dot) to delimiters and wins over
    /// the built-in table. Unknown extensions fall back to `//`.
    pub fn for_path(
        path: &Path,
        overrides: &HashMap<String, CommentDelimiter>,
    ) -> CommentDelimiter {
        let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
            return Self::slashes();
        };

        if let Some(delimiter) = overrides.get(ext) {
            return delimiter.clone();
        }

        BUILTIN_DELIMITERS
            .iter()
            .find(|(_, exts)| exts.contains(&ext))
            .map(|(delimiter, _)| Self(delimiter.to_string()))
            .unwrap_or_else(Self::slashes)
    }
}

/// How the orchestrator picks a delimiter for each file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DelimiterPolicy {
    /// Use the same delimiter for every file.
    Fixed(CommentDelimiter),
    /// Infer from the file extension, with per-extension overrides.
    ByExtension(HashMap<String, CommentDelimiter>),
}

impl DelimiterPolicy {
    pub fn resolve(&self, path: &Path) -> CommentDelimiter {
        match self {
            DelimiterPolicy::Fixed(delimiter) => delimiter.clone(),
            DelimiterPolicy::ByExtension(overrides) => CommentDelimiter::for_path(path, overrides),
        }
    }
}

impl Default for DelimiterPolicy {
    fn default() -> Self {
        DelimiterPolicy::ByExtension(HashMap::new())
    }
}

impl Default for CommentDelimiter {
    fn default() -> Self {
        Self::slashes()
    }
}

impl fmt::Display for CommentDelimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for CommentDelimiter {
    type Err = DelimiterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
