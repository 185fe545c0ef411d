use crate::ui::mvi::UiState;

use super::thumbnail::Thumbnail;

/// Load status of one poster. At most one flag is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ImageLoadState {
    pub loaded: bool,
    pub error: bool,
}

impl UiState for ImageLoadState {}

impl ImageLoadState {
    /// Neither loaded nor failed: the skeleton is shown.
    pub fn is_pending(&self) -> bool {
        !self.loaded && !self.error
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn is_error(&self) -> bool {
        self.error
    }
}

/// Poster bookkeeping for one card: the reference it was started for,
/// its load state and, once decoded, the thumbnail.
#[derive(Debug, Clone, Default)]
pub struct PosterSlot {
    pub poster_path: Option<String>,
    pub state: ImageLoadState,
    pub thumbnail: Option<Thumbnail>,
}

impl PosterSlot {
    pub fn new(poster_path: Option<String>) -> Self {
        Self {
            poster_path,
            state: ImageLoadState::default(),
            thumbnail: None,
        }
    }

    /// Whether this slot still tracks `poster_path`.
    pub fn tracks(&self, poster_path: Option<&str>) -> bool {
        self.poster_path.as_deref() == poster_path
    }
}
