// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::consts::*;
use crate::config::validate_config;
use crate::errors::{ConfigError, RuleError};
use crate::rules::{RuleTable, Rules};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Top-level configuration.
///
/// Every section is optional; anything left out falls back to the values in
/// [`crate::config::consts`] and the built-in rule table.
///
/// # Example
/// ```yaml
/// build:
///   out_dir: dist
///   assets_dir: assets
/// server:
///   port: 8080
///   fallback_port: 8081
/// history:
///   capacity: 50
/// orchestrator:
///   processing_delay_ms: 0
/// rules:
///   casual_fillers: [" tbh", ", right?"]
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub build: BuildConfig,
    pub server: ServerConfig,
    pub watch: WatchConfig,
    pub history: HistoryConfig,
    pub orchestrator: OrchestratorConfig,
    /// Partial override: lists not given keep their built-in contents.
    pub rules: RuleTable,
}

impl Config {
    /// Compile the configured rule table.
    pub fn compile_rules(&self) -> Result<Rules, RuleError> {
        Rules::compile(self.rules.clone())
    }
}

/// Where the page is written and which static assets are copied.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    pub out_dir: PathBuf,
    pub assets_dir: PathBuf,
    /// Overrides for `index.html`, `styles.css` and `app.js`.
    pub web_dir: PathBuf,
    /// File names under `<assets_dir>/logo`.
    pub logos: Vec<String>,
    /// File names under `<assets_dir>/fonts`.
    pub fonts: Vec<String>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            assets_dir: PathBuf::from(DEFAULT_ASSETS_DIR),
            web_dir: PathBuf::from(DEFAULT_WEB_DIR),
            logos: DEFAULT_LOGOS.iter().map(|s| s.to_string()).collect(),
            fonts: DEFAULT_FONTS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub fallback_port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            fallback_port: DEFAULT_FALLBACK_PORT,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WatchConfig {
    pub root: PathBuf,
    /// Directory names skipped anywhere in the tree.
    pub ignore: Vec<String>,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_WATCH_ROOT),
            ignore: DEFAULT_WATCH_IGNORE.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    pub dir: PathBuf,
    pub capacity: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_HISTORY_DIR),
            capacity: DEFAULT_HISTORY_CAPACITY,
        }
    }
}

/// Timings for the conversion animation and the starting intensity.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OrchestratorConfig {
    pub processing_delay_ms: u64,
    pub reveal_min_ms: u64,
    pub reveal_max_ms: u64,
    pub settle_ms: u64,
    pub default_intensity: f64,
}

impl Default for OrchestratorConfig {
    fn default() -> Self {
        Self {
            processing_delay_ms: DEFAULT_PROCESSING_DELAY_MS,
            reveal_min_ms: DEFAULT_REVEAL_MIN_MS,
            reveal_max_ms: DEFAULT_REVEAL_MAX_MS,
            settle_ms: DEFAULT_SETTLE_MS,
            default_intensity: DEFAULT_INTENSITY,
        }
    }
}

/// Load a config from a YAML file. An empty file yields the defaults.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    if content.trim().is_empty() {
        return Ok(Config::default());
    }

    serde_yaml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load and validate a config from a YAML file
pub fn load_and_validate_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let cfg = load_config(path)?;
    validate_config(&cfg).map_err(ConfigError::Invalid)?;
    Ok(cfg)
}

/// Resolve the config the CLI runs with.
///
/// An explicit path must exist. Without one, [`DEFAULT_CONFIG_FILE`] is used
/// when present in the working directory and the defaults otherwise.
pub fn load_or_default(path: Option<&Path>) -> Result<Config, ConfigError> {
    let cfg = match path {
        Some(path) => load_config(path)?,
        None => {
            let default_path = Path::new(DEFAULT_CONFIG_FILE);
            if default_path.exists() {
                load_config(default_path)?
            } else {
                Config::default()
            }
        }
    };
    validate_config(&cfg).map_err(ConfigError::Invalid)?;
    Ok(cfg)
}
