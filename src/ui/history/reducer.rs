use crate::ui::history::intent::HistoryIntent;
use crate::ui::history::state::{HistoryEntry, HistoryPopup, HistoryState};
use crate::ui::mvi::Reducer;

/// Oldest entries beyond this are dropped.
pub const MAX_HISTORY: usize = 10;

pub struct HistoryReducer;

impl Reducer for HistoryReducer {
    type State = HistoryState;
    type Intent = HistoryIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            HistoryIntent::Record {
                year,
                results_count,
                timestamp,
            } => {
                let mut entries = state.entries;
                entries.insert(
                    0,
                    HistoryEntry {
                        year,
                        results_count,
                        timestamp,
                    },
                );
                entries.truncate(MAX_HISTORY);
                HistoryState {
                    entries,
                    popup: state.popup,
                }
            }
            HistoryIntent::Clear => HistoryState {
                entries: Vec::new(),
                popup: match state.popup {
                    HistoryPopup::Visible { .. } => HistoryPopup::Visible { selected: 0 },
                    HistoryPopup::Hidden => HistoryPopup::Hidden,
                },
            },
            HistoryIntent::Open => HistoryState {
                popup: HistoryPopup::Visible { selected: 0 },
                ..state
            },
            HistoryIntent::Close => HistoryState {
                popup: HistoryPopup::Hidden,
                ..state
            },
            HistoryIntent::MoveUp => match state.popup {
                HistoryPopup::Visible { selected } => {
                    let selected = if selected == 0 {
                        state.entries.len().saturating_sub(1)
                    } else {
                        selected - 1
                    };
                    HistoryState {
                        popup: HistoryPopup::Visible { selected },
                        ..state
                    }
                }
                HistoryPopup::Hidden => state,
            },
            HistoryIntent::MoveDown => match state.popup {
                HistoryPopup::Visible { selected } => {
                    let selected = if selected + 1 >= state.entries.len() {
                        0
                    } else {
                        selected + 1
                    };
                    HistoryState {
                        popup: HistoryPopup::Visible { selected },
                        ..state
                    }
                }
                HistoryPopup::Hidden => state,
            },
        }
    }
}
