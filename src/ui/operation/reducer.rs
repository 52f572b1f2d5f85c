//! Reducer for the operation guard.

use std::marker::PhantomData;

use crate::ui::mvi::Reducer;

use super::intent::OperationIntent;
use super::state::OperationState;

/// Transitions for [`OperationState`].
///
/// `Begin` from `InProgress` leaves the state untouched; rejecting the
/// re-entrant trigger is [`OperationState::begin`]'s job. `Succeed` and
/// `Fail` outside `InProgress`, and `ClearError` outside `Failed`, panic.
pub struct OperationReducer<E>(PhantomData<E>);

impl<E: Clone + PartialEq + Send + 'static> Reducer for OperationReducer<E> {
    type State = OperationState<E>;
    type Intent = OperationIntent<E>;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match (state, intent) {
            (_, OperationIntent::Begin) => OperationState::InProgress,
            (OperationState::InProgress, OperationIntent::Succeed) => OperationState::Idle,
            (OperationState::InProgress, OperationIntent::Fail(error)) => {
                OperationState::Failed(error)
            }
            (OperationState::Failed(_), OperationIntent::ClearError) => OperationState::Idle,
            (state, intent) => panic!(
                "invalid operation transition: `{}` while {}",
                intent.label(),
                state.label()
            ),
        }
    }
}
