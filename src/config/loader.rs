use std::fs;
use std::path::{Path, PathBuf};

use reqwest::Url;
use thiserror::Error;

use crate::catalog::PLACEHOLDER_API_KEY;
use crate::config::types::Config;

/// Environment variable holding the TMDB API key.
pub const API_KEY_ENV: &str = "TMDB_API_KEY";

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/movie-browser/config.toml` on Unix/macOS,
    /// or the platform equivalent via `dirs::config_dir()`.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("movie-browser").join("config.toml")
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - Otherwise parses it as TOML and validates it.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - Catalog and image base URLs parse
    /// - `items_per_page` and `tick_rate_ms` are non-zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("catalog.base_url", &self.catalog.base_url),
            ("catalog.image_base_url", &self.catalog.image_base_url),
        ] {
            if let Err(e) = Url::parse(value) {
                return Err(ConfigError::ValidationError {
                    message: format!("{name} '{value}' is not a valid URL: {e}"),
                });
            }
        }

        if self.catalog.poster_size.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "catalog.poster_size must not be empty".to_string(),
            });
        }

        if self.ui.items_per_page == 0 {
            return Err(ConfigError::ValidationError {
                message: "ui.items_per_page must be greater than zero".to_string(),
            });
        }

        if self.ui.tick_rate_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "ui.tick_rate_ms must be greater than zero".to_string(),
            });
        }

        Ok(())
    }

    /// API key from, in order: `cli`, `TMDB_API_KEY`, the config file,
    /// then the placeholder.
    pub fn api_key(&self, cli: Option<&str>) -> String {
        let env = std::env::var(API_KEY_ENV).ok();
        resolve_api_key(cli, env.as_deref(), self.catalog.api_key.as_deref())
    }
}

/// Pick the first non-blank key. Falls back to [`PLACEHOLDER_API_KEY`].
pub fn resolve_api_key(cli: Option<&str>, env: Option<&str>, file: Option<&str>) -> String {
    [cli, env, file]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|key| !key.is_empty())
        .unwrap_or(PLACEHOLDER_API_KEY)
        .to_string()
}
