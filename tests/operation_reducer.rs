use loginflow::error::ServiceError;
use loginflow::ui::mvi::Reducer;
use loginflow::ui::operation::{AlreadyRunning, OperationIntent, OperationReducer, OperationState};

type State = OperationState<ServiceError>;
type Intent = OperationIntent<ServiceError>;

fn reduce(state: State, intent: Intent) -> State {
    OperationReducer::<ServiceError>::reduce(state, intent)
}

#[test]
fn full_cycle_returns_to_idle() {
    let state = reduce(State::Idle, Intent::Begin);
    let state = reduce(state, Intent::Fail(ServiceError::network("offline")));
    assert_eq!(state.error(), Some(&ServiceError::network("offline")));

    let state = reduce(state, Intent::ClearError);
    let state = reduce(state, Intent::Begin);
    let state = reduce(state, Intent::Succeed);
    assert_eq!(state, State::Idle);
}

#[test]
fn dispatch_reduces_in_place() {
    let mut state = State::Idle;
    OperationReducer::<ServiceError>::dispatch(&mut state, Intent::Begin);
    assert!(state.is_in_progress());
}

#[test]
fn begin_guard_leaves_state_untouched_when_busy() {
    let mut state = State::InProgress;
    assert_eq!(state.begin(), Err(AlreadyRunning));
    assert_eq!(state, State::InProgress);
}

#[test]
fn already_running_displays_reason() {
    assert_eq!(AlreadyRunning.to_string(), "operation already running");
}

#[test]
#[should_panic(expected = "invalid operation transition")]
fn fail_without_begin_panics() {
    let mut state = State::Idle;
    state.fail(ServiceError::Authentication);
}

#[test]
#[should_panic(expected = "invalid operation transition")]
fn succeed_after_failure_panics() {
    let mut state = State::Failed(ServiceError::Authentication);
    state.succeed();
}

#[test]
#[should_panic(expected = "invalid operation transition")]
fn clear_error_twice_panics() {
    let mut state = State::Failed(ServiceError::Authentication);
    state.clear_error();
    state.clear_error();
}
