use std::time::Duration;

use reqwest::{Client, Url};
use tracing::{debug, warn};

use crate::catalog::error::CatalogError;
use crate::catalog::types::ResultPage;
use crate::config::CatalogConfig;

/// Fixed sort order for every discovery request.
pub const SORT_ORDER: &str = "popularity.desc";

/// Key used when none is configured. Requests made with it fail upstream.
pub const PLACEHOLDER_API_KEY: &str = "your_api_key_here";

/// TMDB refuses discovery pages beyond this number.
pub const MAX_PAGE: u32 = 500;

/// Parameters of a single discovery request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiscoverRequest {
    pub year: i32,
    pub page: u32,
}

impl DiscoverRequest {
    pub fn new(year: i32, page: u32) -> Self {
        Self {
            year,
            page: page.max(1),
        }
    }

    /// Full request URL: `{base}/discover/movie` with exactly the api key,
    /// page, release year and sort order as query parameters.
    pub fn url(&self, base_url: &str, api_key: &str) -> Result<Url, CatalogError> {
        let endpoint = format!("{}/discover/movie", base_url.trim_end_matches('/'));
        let mut url = Url::parse(&endpoint)
            .map_err(|e| CatalogError::fetch_failed(format!("invalid endpoint '{endpoint}': {e}")))?;
        url.query_pairs_mut()
            .append_pair("api_key", api_key)
            .append_pair("page", &self.page.to_string())
            .append_pair("primary_release_year", &self.year.to_string())
            .append_pair("sort_by", SORT_ORDER);
        Ok(url)
    }
}

/// Parse the year typed by the user. Returns `None` for anything that is
/// not a positive integer.
pub fn parse_year(input: &str) -> Option<i32> {
    input.trim().parse::<i32>().ok().filter(|year| *year > 0)
}

/// CDN URL for a poster, or `None` when the movie has no poster.
pub fn poster_url(image_base_url: &str, size: &str, poster_path: Option<&str>) -> Option<String> {
    let path = poster_path.filter(|path| !path.is_empty())?;
    Some(format!(
        "{}/{}/{}",
        image_base_url.trim_end_matches('/'),
        size,
        path.trim_start_matches('/')
    ))
}

/// Resolved connection settings for [`CatalogClient`].
#[derive(Debug, Clone)]
pub struct CatalogSettings {
    pub base_url: String,
    pub image_base_url: String,
    pub poster_size: String,
    pub api_key: String,
    pub connect_timeout: Duration,
}

impl CatalogSettings {
    pub fn from_config(config: &CatalogConfig, api_key: String) -> Self {
        Self {
            base_url: config.base_url.clone(),
            image_base_url: config.image_base_url.clone(),
            poster_size: config.poster_size.clone(),
            api_key,
            connect_timeout: Duration::from_secs(config.connect_timeout_seconds as u64),
        }
    }
}

/// HTTP client for the discovery endpoint and the poster CDN.
#[derive(Clone)]
pub struct CatalogClient {
    client: Client,
    settings: CatalogSettings,
}

impl CatalogClient {
    pub fn new(settings: CatalogSettings) -> Result<Self, CatalogError> {
        let client = Client::builder()
            .connect_timeout(settings.connect_timeout)
            .build()
            .map_err(|source| CatalogError::Client { source })?;

        Ok(Self { client, settings })
    }

    pub fn settings(&self) -> &CatalogSettings {
        &self.settings
    }

    /// Fetch one page of movies released in `request.year`.
    pub async fn discover(&self, request: DiscoverRequest) -> Result<ResultPage, CatalogError> {
        let url = request.url(&self.settings.base_url, &self.settings.api_key)?;
        debug!(year = request.year, page = request.page, "Discover request");

        let response = self.client.get(url).send().await.map_err(|e| {
            warn!(error = %e, "Discover request failed");
            CatalogError::fetch_failed(e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "Discover returned non-success status");
            return Err(CatalogError::fetch_failed(format!("HTTP {status}")));
        }

        let page = response.json::<ResultPage>().await.map_err(|e| {
            warn!(error = %e, "Discover payload could not be decoded");
            CatalogError::fetch_failed(e.to_string())
        })?;

        debug!(
            page = page.page,
            total_pages = page.total_pages,
            results = page.movies.len(),
            "Discover response"
        );
        Ok(page)
    }

    /// CDN URL for `poster_path` using the configured image base and size.
    pub fn poster_url(&self, poster_path: Option<&str>) -> Option<String> {
        poster_url(
            &self.settings.image_base_url,
            &self.settings.poster_size,
            poster_path,
        )
    }

    /// Download raw poster bytes.
    pub async fn fetch_poster(&self, url: &str) -> Result<Vec<u8>, CatalogError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|e| CatalogError::fetch_failed(e.to_string()))?;

        let bytes = response
            .bytes()
            .await
            .map_err(|e| CatalogError::fetch_failed(e.to_string()))?;
        Ok(bytes.to_vec())
    }
}
