//! State for the home screen.

use std::convert::Infallible;

use crate::entities::User;
use crate::error::ServiceError;
use crate::ui::alert::AlertCategory;
use crate::ui::mvi::UiState;
use crate::ui::operation::OperationState;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct HomeViewState {
    pub(super) user: Option<User>,
    /// Profile load. Its failure slot backs all four alerts.
    pub(super) loading: OperationState<ServiceError>,
    /// Logout never fails and is never re-armed once started.
    pub(super) logout: OperationState<Infallible>,
    pub(super) shows_busy_overlay: bool,
}

impl UiState for HomeViewState {}

impl HomeViewState {
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Reload button is disabled while true.
    pub fn is_loading_user(&self) -> bool {
        self.loading.is_in_progress()
    }

    /// Logout button is disabled while true.
    pub fn is_logging_out(&self) -> bool {
        self.logout.is_in_progress()
    }

    pub fn shows_busy_overlay(&self) -> bool {
        self.shows_busy_overlay
    }

    pub fn last_error(&self) -> Option<&ServiceError> {
        self.loading.error()
    }

    pub fn active_alert(&self) -> Option<AlertCategory> {
        self.loading.error().map(AlertCategory::classify)
    }

    pub fn presents_alert(&self, category: AlertCategory) -> bool {
        self.active_alert() == Some(category)
    }

    pub fn presents_authentication_error_alert(&self) -> bool {
        self.presents_alert(AlertCategory::Authentication)
    }

    pub fn presents_network_error_alert(&self) -> bool {
        self.presents_alert(AlertCategory::Network)
    }

    pub fn presents_server_error_alert(&self) -> bool {
        self.presents_alert(AlertCategory::Server)
    }

    pub fn presents_system_error_alert(&self) -> bool {
        self.presents_alert(AlertCategory::System)
    }
}
