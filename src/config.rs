use std::{
    collections::{BTreeMap, HashMap},
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::delimiter::CommentDelimiter;
use crate::discovery::DiscoveryOptions;

pub const CONFIG_FILE_NAME: &str = ".solenvrc.json";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_source_dir")]
    pub source_dir: String,
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    #[serde(default)]
    pub ignores: Vec<String>,
    /// Extension -> comment delimiter, e.g. `{ "vy": "#" }`.
    #[serde(default)]
    pub delimiters: BTreeMap<String, String>,
}

fn default_source_dir() -> String {
    "contracts".to_string()
}

fn default_extensions() -> Vec<String> {
    vec!["sol".to_string()]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_dir: default_source_dir(),
            extensions: default_extensions(),
            ignores: Vec::new(),
            delimiters: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if an ignore pattern or a delimiter is invalid.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        if self.extensions.is_empty() {
            anyhow::bail!("'extensions' must list at least one file extension");
        }

        self.delimiter_overrides()?;
        Ok(())
    }

    /// The `delimiters` table as parsed delimiters. Extensions may be written
    /// with or without a leading dot.
    pub fn delimiter_overrides(&self) -> Result<HashMap<String, CommentDelimiter>> {
        self.delimiters
            .iter()
            .map(|(ext, delimiter)| {
                let delimiter = CommentDelimiter::new(delimiter.as_str()).with_context(|| {
                    format!("Invalid comment delimiter for '{}' in 'delimiters'", ext)
                })?;
                Ok((ext.trim_start_matches('.').to_string(), delimiter))
            })
            .collect()
    }

    pub fn discovery_options(&self) -> DiscoveryOptions {
        DiscoveryOptions {
            source_dir: self.source_dir.clone(),
            extensions: self
                .extensions
                .iter()
                .map(|e| e.trim_start_matches('.').to_string())
                .collect(),
            ignores: self.ignores.clone(),
        }
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// The file the config was loaded from, `None` when using defaults.
    pub path: Option<PathBuf>,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                path: Some(path),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            path: None,
        }),
    }
}
