//! Alert categories and the error classifier.
//!
//! Every failure shown to the user maps to exactly one category, and every
//! category has one fixed title and message. Unknown failures fall back to
//! [`AlertCategory::System`].

use crate::error::{ServerError, ServiceError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlertCategory {
    /// Session invalid; the user should log in again.
    Authentication,
    /// Connectivity or transport failure.
    Network,
    /// Remote service failure.
    Server,
    /// Anything else.
    System,
}

impl AlertCategory {
    pub const ALL: [AlertCategory; 4] = [
        AlertCategory::Authentication,
        AlertCategory::Network,
        AlertCategory::Server,
        AlertCategory::System,
    ];

    /// Classify a service failure.
    pub fn classify(error: &ServiceError) -> Self {
        match error {
            ServiceError::Authentication => Self::Authentication,
            ServiceError::Network { .. } => Self::Network,
            ServiceError::Server(_) => Self::Server,
            ServiceError::InvalidCredentials | ServiceError::System { .. } => Self::System,
        }
    }

    /// Classify an arbitrary failure by looking through its cause chain.
    pub fn classify_any(error: &anyhow::Error) -> Self {
        error
            .chain()
            .find_map(|cause| {
                if let Some(service_error) = cause.downcast_ref::<ServiceError>() {
                    Some(Self::classify(service_error))
                } else if cause.is::<ServerError>() {
                    Some(Self::Server)
                } else {
                    None
                }
            })
            .unwrap_or(Self::System)
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Authentication => "Authentication Error",
            Self::Network => "Network Error",
            Self::Server => "Server Error",
            Self::System => "System Error",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Self::Authentication => "Please log in again.",
            Self::Network => "Communication failed. Check your network connection.",
            Self::Server => "Please try again later.",
            Self::System => "An error occurred.",
        }
    }
}
