use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result};
use serde::{Deserialize, Serialize};

use crate::core::LoadOptions;

pub const CONFIG_FILE_NAME: &str = ".glossarc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_catalog_root", alias = "localesDir")]
    pub catalog_root: String,
    #[serde(default = "default_language")]
    pub default_language: String,
    #[serde(default)]
    pub debug: bool,
    /// Glob patterns, relative to the catalog root, of files to skip.
    #[serde(default)]
    pub ignores: Vec<String>,
}

fn default_catalog_root() -> String {
    "./locales".to_string()
}

fn default_language() -> String {
    "en".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_root: default_catalog_root(),
            default_language: default_language(),
            debug: false,
            ignores: Vec::new(),
        }
    }
}

impl Config {
    /// Compile the `ignores` globs into [`LoadOptions`].
    ///
    /// Returns an error naming the first invalid pattern.
    pub fn load_options(&self) -> Result<LoadOptions> {
        let mut options = LoadOptions::new();
        for pattern in &self.ignores {
            options = options
                .with_ignores([pattern])
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }
        Ok(options)
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

/// Search `start_dir` and its ancestors for a config file, stopping at the
/// repository root (a directory containing `.git`).
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
    /// Load options compiled from `config`.
    pub options: LoadOptions,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            let options = config.load_options()?;
            Ok(ConfigLoadResult {
                config,
                options,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            options: LoadOptions::new(),
            from_file: false,
        }),
    }
}
