use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Movie catalog endpoint settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// API root (e.g., "https://api.themoviedb.org/3").
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Image CDN root (e.g., "https://image.tmdb.org/t/p").
    #[serde(default = "default_image_base_url")]
    pub image_base_url: String,
    /// CDN size segment (e.g., "w92", "w500").
    #[serde(default = "default_poster_size")]
    pub poster_size: String,
    /// API key. `TMDB_API_KEY` and `--api-key` take precedence.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Connection timeout in seconds (default: 10).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

/// Terminal UI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Results per page reported by the catalog, used for the
    /// "Showing movies X to Y" line (default: 20).
    #[serde(default = "default_items_per_page")]
    pub items_per_page: u32,
    /// Download and render poster thumbnails (default: true).
    #[serde(default = "default_posters")]
    pub posters: bool,
    /// Event loop tick in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

fn default_base_url() -> String {
    "https://api.themoviedb.org/3".to_string()
}

fn default_image_base_url() -> String {
    "https://image.tmdb.org/t/p".to_string()
}

fn default_poster_size() -> String {
    "w500".to_string()
}

fn default_connect_timeout() -> u32 {
    10
}

fn default_items_per_page() -> u32 {
    20
}

fn default_posters() -> bool {
    true
}

fn default_tick_rate_ms() -> u64 {
    250
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            image_base_url: default_image_base_url(),
            poster_size: default_poster_size(),
            api_key: None,
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            items_per_page: default_items_per_page(),
            posters: default_posters(),
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}
