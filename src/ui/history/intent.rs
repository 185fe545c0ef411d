//! Intents for the search history.

use crate::ui::mvi::Intent;
use std::time::SystemTime;

#[derive(Debug, Clone)]
pub enum HistoryIntent {
    /// A search succeeded. The timestamp is supplied by the caller so the
    /// reducer stays pure.
    Record {
        year: String,
        results_count: u32,
        timestamp: SystemTime,
    },
    Clear,
    Open,
    Close,
    MoveUp,
    MoveDown,
}

impl Intent for HistoryIntent {}
