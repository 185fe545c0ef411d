//! Marker trait for intents.

/// A named request to transition state, carrying at most one payload.
///
/// Intents come from the keyboard (set year, change page) or from
/// background work finishing (catalog responses, poster decodes).
pub trait Intent: Send + 'static {}
