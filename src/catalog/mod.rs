//! Remote movie catalog (TMDB discovery API).
//!
//! One request per search, no retries, no caching. Every failure collapses
//! into [`CatalogError::FetchFailed`].

mod client;
mod error;
mod types;

pub use client::{
    parse_year, poster_url, CatalogClient, CatalogSettings, DiscoverRequest, MAX_PAGE,
    PLACEHOLDER_API_KEY, SORT_ORDER,
};
pub use error::{CatalogError, FETCH_FAILED_MESSAGE};
pub use types::{Movie, ResultPage};
