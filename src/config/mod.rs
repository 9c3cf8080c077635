use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::infrastructure::network::BlockId;

/// Margin added on top of a fee estimate, in percent
pub const DEFAULT_FEE_MARGIN_PERCENT: i64 = 50;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// `suggested_max_fee = overall_fee + overall_fee * margin / 100`
    pub fee_margin_percent: i64,

    /// Block that read-only calls run against
    pub block_id: BlockId,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fee_margin_percent: DEFAULT_FEE_MARGIN_PERCENT,
            block_id: BlockId::Pending,
        }
    }
}

impl Config {
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str::<Config>(content).map_err(|e| Error::Config(e.to_string()))
    }
}

/// Load the config file, falling back to defaults when it is missing or broken
pub fn load() -> Config {
    let Some(path) = config_path() else {
        return Config::default();
    };
    if !path.exists() {
        return Config::default();
    }
    match load_from(&path) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(path = %path.display(), "ignoring config: {:#}", err);
            Config::default()
        }
    }
}

pub fn load_from(path: &Path) -> anyhow::Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("read config {}", path.display()))?;
    let config = Config::parse(&content)
        .with_context(|| format!("parse config {}", path.display()))?;
    Ok(config)
}

pub fn config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os("FELT_KIT_CONFIG").map(PathBuf::from) {
        return Some(path);
    }
    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from) {
        return Some(xdg.join("felt-kit").join("config.toml"));
    }
    if let Some(home) = std::env::var_os("HOME").map(PathBuf::from) {
        return Some(home.join(".config").join("felt-kit").join("config.toml"));
    }

    directories::ProjectDirs::from("io", "felt-kit", "felt-kit")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}
