//! Reducer for poster image loading.

use crate::ui::mvi::Reducer;

use super::intent::PosterIntent;
use super::state::ImageLoadState;

/// Last signal wins; no history is kept.
pub struct PosterReducer;

impl Reducer for PosterReducer {
    type State = ImageLoadState;
    type Intent = PosterIntent;

    fn reduce(_state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            PosterIntent::Start | PosterIntent::Reset => ImageLoadState::default(),
            PosterIntent::Loaded => ImageLoadState {
                loaded: true,
                error: false,
            },
            PosterIntent::Failed => ImageLoadState {
                loaded: false,
                error: true,
            },
        }
    }
}
