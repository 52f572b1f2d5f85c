//! Reducer trait.

use super::intent::Intent;
use super::state::UiState;

/// Turns an intent into the next state.
///
/// `reduce` is the only place where transitions are decided. It has no side
/// effects; it may panic when handed a transition that can only come from a
/// caller bug.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;

    /// Reduce in place.
    fn dispatch(state: &mut Self::State, intent: Self::Intent) {
        *state = Self::reduce(std::mem::take(state), intent);
    }
}
