//! Marker trait for UI state.

/// A screen state snapshot.
///
/// Snapshots are cloned out to watchers, compared to skip redundant
/// notifications, and start from `Default` when the screen is created.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
