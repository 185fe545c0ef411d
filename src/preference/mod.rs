//! Persisted UI preferences (currently only the color mode).
//!
//! [`ThemeProvider`] owns the persistence side effects; everything else
//! reads the mode from it and never touches storage directly.

mod storage;
mod store;
mod system;

pub use storage::{
    FilePreferenceStorage, MemoryPreferenceStorage, PreferenceError, PreferenceStorage,
};
pub use store::{ColorMode, ThemeProvider, COLOR_MODE_KEY};
pub use system::{parse_colorfgbg, system_prefers_dark};
