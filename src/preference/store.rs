use tracing::{debug, warn};

use crate::preference::storage::PreferenceStorage;

/// Storage key for the color mode. Once published, do not rename.
pub const COLOR_MODE_KEY: &str = "color_mode";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    #[default]
    Light,
    Dark,
}

impl ColorMode {
    /// Stored representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Any stored value other than `"dark"` reads as light.
    pub fn from_stored(value: &str) -> Self {
        if value.trim() == "dark" {
            Self::Dark
        } else {
            Self::Light
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

/// Owner of the color mode and its persistence.
pub struct ThemeProvider {
    mode: ColorMode,
    storage: Box<dyn PreferenceStorage>,
}

impl ThemeProvider {
    /// Resolve the initial mode: stored value, then `system_dark`, then light.
    ///
    /// The resolved mode is written back so the system fallback only
    /// applies on the very first run.
    pub fn initialize(storage: Box<dyn PreferenceStorage>, system_dark: Option<bool>) -> Self {
        let mode = match storage.get(COLOR_MODE_KEY) {
            Some(saved) => ColorMode::from_stored(&saved),
            None if system_dark == Some(true) => ColorMode::Dark,
            None => ColorMode::Light,
        };
        debug!(mode = mode.as_str(), "Color mode resolved");

        let mut provider = Self { mode, storage };
        provider.persist();
        provider
    }

    pub fn mode(&self) -> ColorMode {
        self.mode
    }

    /// Flip the mode and persist it immediately.
    pub fn toggle(&mut self) -> ColorMode {
        self.mode = self.mode.toggled();
        self.persist();
        self.mode
    }

    fn persist(&mut self) {
        if let Err(err) = self.storage.set(COLOR_MODE_KEY, self.mode.as_str()) {
            warn!(error = %err, "Failed to persist color mode");
        }
    }
}
