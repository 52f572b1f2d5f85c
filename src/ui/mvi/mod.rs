//! Model-View-Intent (MVI) primitives shared by the screen controllers.
//!
//! # Architecture
//!
//! ```text
//! user action ──→ Intent ──→ Reducer ──→ State ──→ watchers (the view)
//!      ↑                                              │
//!      └──────────────────────────────────────────────┘
//! ```
//!
//! - **State**: snapshot of everything a screen needs to render
//! - **Intent**: a request to change that state
//! - **Reducer**: pure transition function `(State, Intent) -> State`
//!
//! Controllers own the async side (service calls) and feed the outcome back
//! in as intents.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
