//! Intents for the movie search.

use crate::catalog::ResultPage;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum SearchIntent {
    /// User edited the year field. Clears any error.
    SetYear { year: String },

    /// A discovery request was issued.
    StartSearch,

    /// The catalog returned a page. Replaces the results wholesale.
    SearchSucceeded { page: ResultPage },

    /// The catalog request failed.
    SearchFailed { message: String },

    /// Back to idle, keeping the typed year.
    ResetSearch,

    /// Move the page cursor. Does not fetch by itself.
    SetPage { page: u32 },
}

impl Intent for SearchIntent {}
