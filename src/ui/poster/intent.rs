//! Intents for a single poster image.

use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PosterIntent {
    /// A new poster reference was presented.
    Start,
    /// The image decoded.
    Loaded,
    /// Download or decode failed, or there is no poster at all.
    Failed,
    /// Back to the initial unresolved state.
    Reset,
}

impl Intent for PosterIntent {}
