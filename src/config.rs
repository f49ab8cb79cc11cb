
use std::path::{Path, PathBuf};
use std::time::Duration;

use home::home_dir;
use serde::Deserialize;
use serde_inline_default::serde_inline_default;
use thiserror::Error;
use toml;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load config: could not determine home dir")]
    NoHomeDir,
    #[error("Failed to read config file {0}: {1}")]
    Io(PathBuf, std::io::Error),
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Which image to offer as the game's background
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum BackgroundSource {
    /// First of the known page background images which exists on the CDN
    #[default]
    Image,
    StoreScreenshot,
    StoreBackground,
    Banner,
    None,
}

#[serde_inline_default]
#[derive(Clone, Deserialize, Debug)]
pub struct Config {
    #[serde_inline_default(true)]
    pub download_vertical_covers: bool,
    #[serde(default)]
    pub background_source: BackgroundSource,
    // Propagate fetch failures instead of degrading to missing data
    #[serde(default)]
    pub strict: bool,
    #[serde(default = "default_endpoints")]
    pub endpoints: Endpoints,
    #[serde(default = "default_retry")]
    pub retry: Retry,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            download_vertical_covers: true,
            background_source: BackgroundSource::default(),
            strict: false,
            endpoints: default_endpoints(),
            retry: default_retry(),
        }
    }
}

#[serde_inline_default]
#[derive(Clone, Deserialize, Debug, PartialEq)]
pub struct Endpoints {
    #[serde_inline_default("https://store.steampowered.com".to_string())]
    pub store_api: String,
    #[serde(default)]
    pub cache_service: Option<String>,
    #[serde_inline_default("https://steamcdn-a.akamaihd.net".to_string())]
    pub cdn: String,
    #[serde_inline_default(30)]
    pub timeout_secs: u64,
}

impl Endpoints {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

fn default_endpoints() -> Endpoints {
    Endpoints {
        store_api: "https://store.steampowered.com".to_string(),
        cache_service: None,
        cdn: "https://steamcdn-a.akamaihd.net".to_string(),
        timeout_secs: 30,
    }
}

#[serde_inline_default]
#[derive(Clone, Deserialize, Debug, PartialEq)]
pub struct Retry {
    #[serde_inline_default(10)]
    pub max_attempts: u32,
    #[serde_inline_default(2500)]
    pub backoff_ms: u64,
}

impl Retry {
    pub fn backoff(&self) -> Duration {
        Duration::from_millis(self.backoff_ms)
    }
}

fn default_retry() -> Retry {
    Retry { max_attempts: 10, backoff_ms: 2500 }
}

fn default_path() -> Result<PathBuf> {
    let mut f = home_dir().ok_or(ConfigError::NoHomeDir)?;
    f.push(".steam-metadata/config.toml");
    Ok(f)
}

pub fn parse(raw: &str) -> Result<Config> {
    Ok(toml::from_str(raw)?)
}

pub fn read(path: Option<&Path>) -> Result<Config> {
    let f = match path {
        Some(p) => p.to_path_buf(),
        None => default_path()?,
    };

    let raw = std::fs::read_to_string(&f).map_err(|e| ConfigError::Io(f.clone(), e))?;
    parse(&raw)
}
