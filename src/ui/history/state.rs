use crate::ui::mvi::UiState;
use std::time::SystemTime;

#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub year: String,
    pub results_count: u32,
    pub timestamp: SystemTime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HistoryPopup {
    #[default]
    Hidden,
    Visible {
        selected: usize,
    },
}

/// Recent successful searches, newest first.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HistoryState {
    pub entries: Vec<HistoryEntry>,
    pub popup: HistoryPopup,
}

impl UiState for HistoryState {}

impl HistoryState {
    pub fn is_visible(&self) -> bool {
        !matches!(self.popup, HistoryPopup::Hidden)
    }

    /// Entry under the popup cursor, if the popup is open.
    pub fn selected_entry(&self) -> Option<&HistoryEntry> {
        match self.popup {
            HistoryPopup::Visible { selected } => self.entries.get(selected),
            HistoryPopup::Hidden => None,
        }
    }
}
