use crate::catalog::{Movie, MAX_PAGE};
use crate::ui::mvi::UiState;

/// Everything the result screen needs to render a search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchState {
    /// Year as typed; validated only when a request is built.
    pub selected_year: String,
    pub movies: Vec<Movie>,
    pub loading: bool,
    pub error: Option<String>,
    /// 1-based page cursor.
    pub current_page: u32,
    pub total_pages: u32,
    pub total_results: u32,
    pub has_searched: bool,
}

impl Default for SearchState {
    fn default() -> Self {
        Self {
            selected_year: String::new(),
            movies: Vec::new(),
            loading: false,
            error: None,
            current_page: 1,
            total_pages: 0,
            total_results: 0,
            has_searched: false,
        }
    }
}

impl UiState for SearchState {}

/// Coarse view of [`SearchState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPhase {
    Idle,
    Loading,
    Success,
    Failed,
}

impl SearchState {
    pub fn phase(&self) -> SearchPhase {
        if self.loading {
            SearchPhase::Loading
        } else if self.error.is_some() {
            SearchPhase::Failed
        } else if self.has_searched {
            SearchPhase::Success
        } else {
            SearchPhase::Idle
        }
    }

    /// "Go" is enabled only with a year and no request in flight.
    pub fn can_submit(&self) -> bool {
        !self.selected_year.is_empty() && !self.loading
    }

    pub fn has_previous_page(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next_page(&self) -> bool {
        self.current_page < self.total_pages.min(MAX_PAGE)
    }

    /// 1-based `(first, last)` result numbers shown on the current page.
    pub fn showing_range(&self, items_per_page: u32) -> (u32, u32) {
        let start = self
            .current_page
            .saturating_sub(1)
            .saturating_mul(items_per_page)
            .saturating_add(1);
        let end = self
            .current_page
            .saturating_mul(items_per_page)
            .min(self.total_results);
        (start, end)
    }

    /// Results grid and pagination are visible.
    pub fn shows_results(&self) -> bool {
        self.phase() == SearchPhase::Success && !self.movies.is_empty()
    }

    /// The "no movies found" notice is visible.
    pub fn shows_empty_notice(&self) -> bool {
        self.phase() == SearchPhase::Success && self.movies.is_empty()
    }
}
