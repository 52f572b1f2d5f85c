//! Login screen feature module.
//!
//! Collects credentials, submits them once at a time, and signals the host
//! to move to the home screen on success.
//!
//! # Architecture
//!
//! - `state.rs` - `LoginViewState` snapshot
//! - `controller.rs` - login operation and the navigation signal
//! - `alert.rs` - the login screen's own alert texts

mod alert;
mod controller;
mod state;

pub use alert::LoginAlert;
pub use controller::{LoginController, TransitionToHome};
pub use state::LoginViewState;
