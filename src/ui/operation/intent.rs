//! Intents for the operation guard.

use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationIntent<E> {
    /// The user triggered the operation.
    Begin,

    /// The async call resolved successfully.
    Succeed,

    /// The async call failed.
    Fail(E),

    /// The user dismissed the failure.
    ClearError,
}

impl<E: Send + 'static> Intent for OperationIntent<E> {}

impl<E> OperationIntent<E> {
    pub(super) fn label(&self) -> &'static str {
        match self {
            Self::Begin => "begin",
            Self::Succeed => "succeed",
            Self::Fail(_) => "fail",
            Self::ClearError => "clear_error",
        }
    }
}
