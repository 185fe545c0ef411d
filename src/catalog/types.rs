use serde::{Deserialize, Serialize};

/// A single movie as returned by the discovery endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: u64,
    pub title: String,
    /// `YYYY-MM-DD`; TMDB sends an empty string for unknown dates.
    #[serde(default)]
    pub release_date: Option<String>,
    /// Opaque path appended to the image CDN URL.
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub overview: String,
    /// Average rating on a 0..=10 scale.
    #[serde(default)]
    pub vote_average: f64,
}

impl Movie {
    /// Year part of the release date, if the date is present and well formed.
    pub fn release_year(&self) -> Option<i32> {
        let date = self.release_date.as_deref()?;
        date.get(..4)?.parse().ok()
    }

    /// Poster reference, treating an empty path as absent.
    pub fn poster_ref(&self) -> Option<&str> {
        self.poster_path.as_deref().filter(|path| !path.is_empty())
    }
}

/// One page of discovery results.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ResultPage {
    /// 1-based page number echoed by the server.
    pub page: u32,
    pub total_pages: u32,
    pub total_results: u32,
    #[serde(rename = "results", default)]
    pub movies: Vec<Movie>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAYLOAD: &str = r#"{
        "page": 2,
        "total_pages": 7,
        "total_results": 130,
        "results": [
            {
                "id": 603,
                "title": "The Matrix",
                "release_date": "1999-03-30",
                "poster_path": "/f89U3ADr1oiB1s9GkdPOEpXUk5H.jpg",
                "overview": "Set in the 22nd century...",
                "vote_average": 8.2,
                "popularity": 81.3,
                "adult": false
            },
            {
                "id": 42,
                "title": "Untitled",
                "release_date": "",
                "poster_path": null,
                "overview": "",
                "vote_average": 0
            }
        ]
    }"#;

    #[test]
    fn decodes_discover_payload_ignoring_unknown_fields() {
        let page: ResultPage = serde_json::from_str(PAYLOAD).unwrap();
        assert_eq!(page.page, 2);
        assert_eq!(page.total_pages, 7);
        assert_eq!(page.total_results, 130);
        assert_eq!(page.movies.len(), 2);
        assert_eq!(page.movies[0].title, "The Matrix");
        assert_eq!(page.movies[0].vote_average, 8.2);
    }

    #[test]
    fn release_year_handles_missing_and_empty_dates() {
        let page: ResultPage = serde_json::from_str(PAYLOAD).unwrap();
        assert_eq!(page.movies[0].release_year(), Some(1999));
        assert_eq!(page.movies[1].release_year(), None);
    }

    #[test]
    fn poster_ref_is_none_for_null_path() {
        let page: ResultPage = serde_json::from_str(PAYLOAD).unwrap();
        assert!(page.movies[0].poster_ref().is_some());
        assert!(page.movies[1].poster_ref().is_none());
    }

    #[test]
    fn sparse_movie_fields_default() {
        let movie: Movie = serde_json::from_str(r#"{"id": 1, "title": "Sparse"}"#).unwrap();
        assert_eq!(movie.release_date, None);
        assert_eq!(movie.overview, "");
        assert_eq!(movie.vote_average, 0.0);
    }

    #[test]
    fn missing_results_is_empty_page() {
        let page: ResultPage =
            serde_json::from_str(r#"{"page": 1, "total_pages": 0, "total_results": 0}"#).unwrap();
        assert!(page.movies.is_empty());
    }
}
