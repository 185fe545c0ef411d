mod dialog;
mod intent;
mod reducer;
mod state;

pub use dialog::render_history_dialog;
pub use intent::HistoryIntent;
pub use reducer::{HistoryReducer, MAX_HISTORY};
pub use state::{HistoryEntry, HistoryPopup, HistoryState};
