//! Home screen feature module.
//!
//! Shows the logged-in user's profile, reloads it on demand, and logs out.
//!
//! # Architecture
//!
//! - `state.rs` - `HomeViewState` snapshot and derived alert flags
//! - `controller.rs` - async operations driving the state

mod controller;
mod state;

pub use controller::{DismissFuture, HomeController};
pub use state::HomeViewState;
