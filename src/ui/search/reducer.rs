//! Reducer for the movie search.

use crate::ui::mvi::Reducer;

use super::intent::SearchIntent;
use super::state::SearchState;

/// Search state transitions.
///
/// Every intent is accepted from every state. The network call happens
/// outside; this only records outcomes.
pub struct SearchReducer;

impl Reducer for SearchReducer {
    type State = SearchState;
    type Intent = SearchIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SearchIntent::SetYear { year } => SearchState {
                selected_year: year,
                error: None,
                ..state
            },

            SearchIntent::StartSearch => SearchState {
                loading: true,
                error: None,
                ..state
            },

            SearchIntent::SearchSucceeded { page } => SearchState {
                loading: false,
                movies: page.movies,
                current_page: page.page,
                total_pages: page.total_pages,
                total_results: page.total_results,
                has_searched: true,
                error: None,
                ..state
            },

            SearchIntent::SearchFailed { message } => SearchState {
                loading: false,
                error: Some(message),
                movies: Vec::new(),
                current_page: 1,
                total_pages: 0,
                total_results: 0,
                ..state
            },

            SearchIntent::ResetSearch => SearchState {
                movies: Vec::new(),
                current_page: 1,
                total_pages: 0,
                total_results: 0,
                has_searched: false,
                error: None,
                ..state
            },

            SearchIntent::SetPage { page } => SearchState {
                current_page: page,
                ..state
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Movie, ResultPage};

    fn movie(id: u64, title: &str) -> Movie {
        Movie {
            id,
            title: title.to_string(),
            release_date: Some("2023-05-01".to_string()),
            poster_path: None,
            overview: String::new(),
            vote_average: 7.0,
        }
    }

    fn page(movies: Vec<Movie>, page: u32, total_pages: u32, total_results: u32) -> ResultPage {
        ResultPage {
            page,
            total_pages,
            total_results,
            movies,
        }
    }

    fn run(state: SearchState, intents: Vec<SearchIntent>) -> SearchState {
        intents.into_iter().fold(state, SearchReducer::reduce)
    }

    #[test]
    fn set_year_clears_error_only() {
        let state = SearchState {
            error: Some("boom".into()),
            loading: false,
            current_page: 4,
            ..SearchState::default()
        };
        let state = SearchReducer::reduce(
            state,
            SearchIntent::SetYear {
                year: "1984".into(),
            },
        );
        assert_eq!(state.selected_year, "1984");
        assert_eq!(state.error, None);
        assert_eq!(state.current_page, 4);
    }

    #[test]
    fn start_search_sets_loading_and_clears_error() {
        let state = SearchState {
            error: Some("old".into()),
            ..SearchState::default()
        };
        let state = SearchReducer::reduce(state, SearchIntent::StartSearch);
        assert!(state.loading);
        assert_eq!(state.error, None);
    }

    #[test]
    fn scenario_year_search_success() {
        let m1 = movie(1, "One");
        let m2 = movie(2, "Two");
        let state = run(
            SearchState::default(),
            vec![
                SearchIntent::SetYear {
                    year: "2023".into(),
                },
                SearchIntent::StartSearch,
                SearchIntent::SearchSucceeded {
                    page: page(vec![m1.clone(), m2.clone()], 1, 5, 42),
                },
            ],
        );

        assert_eq!(
            state,
            SearchState {
                selected_year: "2023".into(),
                movies: vec![m1, m2],
                loading: false,
                error: None,
                current_page: 1,
                total_pages: 5,
                total_results: 42,
                has_searched: true,
            }
        );
    }

    #[test]
    fn success_replaces_previous_movies() {
        let state = SearchState {
            movies: vec![movie(1, "Old"), movie(2, "Older")],
            has_searched: true,
            ..SearchState::default()
        };
        let state = SearchReducer::reduce(
            state,
            SearchIntent::SearchSucceeded {
                page: page(vec![movie(3, "New")], 2, 2, 21),
            },
        );
        assert_eq!(state.movies, vec![movie(3, "New")]);
        assert_eq!(state.current_page, 2);
    }

    #[test]
    fn scenario_failure_after_success() {
        let before = SearchState {
            selected_year: "1999".into(),
            movies: vec![movie(1, "A")],
            current_page: 3,
            total_pages: 5,
            total_results: 90,
            has_searched: true,
            ..SearchState::default()
        };
        let state = run(
            before.clone(),
            vec![
                SearchIntent::StartSearch,
                SearchIntent::SearchFailed {
                    message: "Network timeout".into(),
                },
            ],
        );

        assert!(!state.loading);
        assert_eq!(state.error.as_deref(), Some("Network timeout"));
        assert!(state.movies.is_empty());
        assert_eq!(state.current_page, 1);
        assert_eq!(state.total_pages, 0);
        assert_eq!(state.total_results, 0);
        assert_eq!(state.selected_year, before.selected_year);
        assert_eq!(state.has_searched, before.has_searched);
    }

    #[test]
    fn failure_keeps_has_searched_false_when_never_succeeded() {
        let state = run(
            SearchState::default(),
            vec![
                SearchIntent::StartSearch,
                SearchIntent::SearchFailed {
                    message: "x".into(),
                },
            ],
        );
        assert!(!state.has_searched);
    }

    #[test]
    fn reset_preserves_year_and_clears_results() {
        let state = SearchState {
            selected_year: "2001".into(),
            movies: vec![movie(1, "A")],
            error: Some("e".into()),
            current_page: 2,
            total_pages: 4,
            total_results: 70,
            has_searched: true,
            loading: false,
        };
        let state = SearchReducer::reduce(state, SearchIntent::ResetSearch);
        assert_eq!(
            state,
            SearchState {
                selected_year: "2001".into(),
                ..SearchState::default()
            }
        );
    }

    #[test]
    fn set_page_only_moves_cursor() {
        let before = SearchState {
            movies: vec![movie(1, "A")],
            total_pages: 9,
            has_searched: true,
            ..SearchState::default()
        };
        let after = SearchReducer::reduce(before.clone(), SearchIntent::SetPage { page: 7 });
        assert_eq!(after.current_page, 7);
        assert_eq!(after.movies, before.movies);
        assert_eq!(after.total_pages, before.total_pages);
        assert!(!after.loading);
    }

    #[test]
    fn success_while_idle_is_accepted() {
        let state = SearchReducer::reduce(
            SearchState::default(),
            SearchIntent::SearchSucceeded {
                page: page(vec![movie(9, "Z")], 1, 1, 1),
            },
        );
        assert!(state.has_searched);
        assert_eq!(state.movies.len(), 1);
    }

    fn sample_sequence() -> Vec<SearchIntent> {
        vec![
            SearchIntent::SetYear {
                year: "2010".into(),
            },
            SearchIntent::StartSearch,
            SearchIntent::SearchSucceeded {
                page: page(vec![movie(1, "A")], 1, 3, 50),
            },
            SearchIntent::SetPage { page: 2 },
            SearchIntent::StartSearch,
            SearchIntent::SearchFailed {
                message: "nope".into(),
            },
            SearchIntent::SetYear {
                year: "2011".into(),
            },
            SearchIntent::StartSearch,
            SearchIntent::SearchSucceeded {
                page: page(vec![movie(2, "B")], 1, 1, 1),
            },
            SearchIntent::ResetSearch,
        ]
    }

    #[test]
    fn replaying_a_sequence_is_deterministic() {
        let first = run(SearchState::default(), sample_sequence());
        let second = run(SearchState::default(), sample_sequence());
        assert_eq!(first, second);
    }

    #[test]
    fn loading_and_error_never_coexist_at_rest() {
        let mut state = SearchState::default();
        for intent in sample_sequence() {
            state = SearchReducer::reduce(state, intent);
            assert!(
                !(state.loading && state.error.is_some()),
                "loading and error both set: {state:?}"
            );
        }
    }
}
