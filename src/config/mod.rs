//! User configuration loaded from `config.toml`.

mod loader;
mod types;

pub use loader::{resolve_api_key, ConfigError, API_KEY_ENV};
pub use types::{CatalogConfig, Config, UiConfig};
