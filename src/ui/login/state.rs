//! State for the login screen.

use crate::error::ServiceError;
use crate::ui::mvi::UiState;
use crate::ui::operation::OperationState;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct LoginViewState {
    pub(super) id: String,
    pub(super) password: String,
    pub(super) submission: OperationState<ServiceError>,
    pub(super) shows_busy_overlay: bool,
}

impl UiState for LoginViewState {}

impl LoginViewState {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn is_submitting(&self) -> bool {
        self.submission.is_in_progress()
    }

    /// Text fields accept input while true.
    pub fn can_input(&self) -> bool {
        !self.is_submitting()
    }

    /// Login button is enabled while true.
    pub fn can_submit(&self) -> bool {
        !self.is_submitting() && !self.id.is_empty() && !self.password.is_empty()
    }

    pub fn shows_busy_overlay(&self) -> bool {
        self.shows_busy_overlay
    }

    /// Failure of the last attempt, until dismissed or retried.
    pub fn last_error(&self) -> Option<&ServiceError> {
        self.submission.error()
    }
}
