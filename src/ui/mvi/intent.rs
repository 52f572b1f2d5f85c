//! Marker trait for intents.

/// A request to change UI state.
///
/// Either user driven (begin an operation, dismiss an alert) or produced by
/// the controller when an async call resolves (succeed, fail).
pub trait Intent: Send + 'static {}
