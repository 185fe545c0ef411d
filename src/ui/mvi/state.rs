//! Marker trait for UI state.

/// Marker trait for UI state values.
///
/// States are replaced wholesale on every intent (Clone), compared in
/// tests (PartialEq) and start from an empty Default.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
