//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_catalog;

use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use movie_browser::catalog::{CatalogClient, CatalogSettings};
use movie_browser::preference::{MemoryPreferenceStorage, ThemeProvider};
use movie_browser::ui::app::{App, AppOptions, PosterSource};
use std::io::Cursor;
use std::path::PathBuf;
use std::time::Duration;
use tempfile::TempDir;

pub use mock_catalog::{CapturedRequest, MockCatalog, MockResponse, EMPTY_PAGE};

pub const TEST_API_KEY: &str = "test-key";

/// Client pointed at the mock server for both API and images.
pub fn client_for(mock: &MockCatalog) -> CatalogClient {
    CatalogClient::new(CatalogSettings {
        base_url: mock.api_url(),
        image_base_url: mock.image_url(),
        poster_size: "w92".to_string(),
        api_key: TEST_API_KEY.to_string(),
        connect_timeout: Duration::from_secs(2),
    })
    .expect("Failed to build client")
}

/// Create a temporary config file with the given TOML content.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

/// A discovery payload with `count` movies, every other one without a poster.
pub fn page_json(page: u32, total_pages: u32, total_results: u32, count: u32) -> String {
    let movies: Vec<String> = (0..count)
        .map(|i| {
            let id = page * 100 + i;
            let poster = if i % 2 == 0 {
                format!(r#""/poster{id}.png""#)
            } else {
                "null".to_string()
            };
            format!(
                r#"{{"id":{id},"title":"Movie {id}","release_date":"1999-01-0{}","poster_path":{poster},"overview":"Plot {id}","vote_average":7.1}}"#,
                i % 9 + 1
            )
        })
        .collect();
    format!(
        r#"{{"page":{page},"total_pages":{total_pages},"total_results":{total_results},"results":[{}]}}"#,
        movies.join(",")
    )
}

/// Small PNG suitable for poster responses.
pub fn png_bytes() -> Vec<u8> {
    let mut out = Cursor::new(Vec::new());
    DynamicImage::ImageRgb8(RgbImage::from_pixel(4, 6, Rgb([200, 40, 40])))
        .write_to(&mut out, ImageFormat::Png)
        .expect("Failed to encode png");
    out.into_inner()
}

// -- App helpers --------------------------------------------------------------

/// App with in-memory preferences and optional poster source.
pub fn make_app(posters: Option<PosterSource>) -> App {
    let theme = ThemeProvider::initialize(Box::new(MemoryPreferenceStorage::new()), None);
    App::new(
        theme,
        AppOptions {
            items_per_page: 20,
            posters,
        },
    )
}
