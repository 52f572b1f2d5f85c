//! Single-flight operation guard.
//!
//! Tracks one logical operation ("load profile", "log in") so that it never
//! runs twice at once on the same controller. A second trigger while the
//! first is outstanding is rejected without side effects.
//!
//! ```text
//! Idle --begin()--> InProgress --succeed()--> Idle
//!                   InProgress --fail(e)----> Failed(e)
//! Failed(e) --clear_error()--> Idle
//! Failed(e) --begin()--------> InProgress
//! ```
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - `OperationState` plus the guard methods
//! - `intent.rs` - Begin / Succeed / Fail / ClearError
//! - `reducer.rs` - transitions; invalid ones panic

mod intent;
mod reducer;
mod state;

pub use intent::OperationIntent;
pub use reducer::OperationReducer;
pub use state::{AlreadyRunning, OperationState};
