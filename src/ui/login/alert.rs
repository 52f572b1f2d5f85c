//! Alert texts of the login screen.
//!
//! The login screen picks its own wording instead of going through
//! [`AlertCategory`](crate::ui::alert::AlertCategory): a rejected password
//! gets a dedicated message there.

use crate::error::ServiceError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginAlert {
    InvalidCredentials,
    Network,
    Server,
    System,
}

impl LoginAlert {
    pub fn for_error(error: &ServiceError) -> Self {
        match error {
            ServiceError::InvalidCredentials => Self::InvalidCredentials,
            ServiceError::Network { .. } => Self::Network,
            ServiceError::Server(_) => Self::Server,
            ServiceError::Authentication | ServiceError::System { .. } => Self::System,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::InvalidCredentials => "Login Error",
            Self::Network => "Network Error",
            Self::Server => "Server Error",
            Self::System => "System Error",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Self::InvalidCredentials => "The ID or password is incorrect.",
            Self::Network => "Communication failed. Check your network connection.",
            Self::Server => "Please try again later.",
            Self::System => "An error occurred.",
        }
    }
}
