mod intent;
mod reducer;
mod state;
mod thumbnail;

pub use intent::PosterIntent;
pub use reducer::PosterReducer;
pub use state::{ImageLoadState, PosterSlot};
pub use thumbnail::{Thumbnail, ThumbnailView, THUMB_HEIGHT, THUMB_WIDTH};
