//! State of a single-flight operation.

use thiserror::Error;

use crate::ui::mvi::{Reducer, UiState};

use super::intent::OperationIntent;
use super::reducer::OperationReducer;

/// Returned by [`OperationState::begin`] while the operation is outstanding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("operation already running")]
pub struct AlreadyRunning;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationState<E> {
    Idle,
    InProgress,
    /// Last attempt failed; the error stays until dismissed or retried.
    Failed(E),
}

impl<E> Default for OperationState<E> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<E: Clone + PartialEq + Send + 'static> UiState for OperationState<E> {}

impl<E> OperationState<E> {
    pub fn is_in_progress(&self) -> bool {
        matches!(self, Self::InProgress)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    pub fn error(&self) -> Option<&E> {
        match self {
            Self::Failed(error) => Some(error),
            _ => None,
        }
    }

    pub(super) fn label(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::InProgress => "in progress",
            Self::Failed(_) => "failed",
        }
    }
}

impl<E: Clone + PartialEq + Send + 'static> OperationState<E> {
    /// Arm the guard.
    ///
    /// Must run before the first suspension point of the operation, or two
    /// back-to-back triggers can both get through.
    pub fn begin(&mut self) -> Result<(), AlreadyRunning> {
        if self.is_in_progress() {
            return Err(AlreadyRunning);
        }
        OperationReducer::<E>::dispatch(self, OperationIntent::Begin);
        Ok(())
    }

    /// # Panics
    /// If the operation is not in progress.
    pub fn succeed(&mut self) {
        OperationReducer::<E>::dispatch(self, OperationIntent::Succeed);
    }

    /// # Panics
    /// If the operation is not in progress.
    pub fn fail(&mut self, error: E) {
        OperationReducer::<E>::dispatch(self, OperationIntent::Fail(error));
    }

    /// # Panics
    /// If there is no failure to clear.
    pub fn clear_error(&mut self) {
        OperationReducer::<E>::dispatch(self, OperationIntent::ClearError);
    }
}
