//! Failure taxonomy reported by the auth and user services.
//!
//! Controllers never propagate these; they log them and turn them into
//! alert state.

use thiserror::Error;

/// Remote service failure detail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServerError {
    /// The service failed while handling the request.
    #[error("internal server error: {cause}")]
    Internal { cause: String },

    /// The service answered with something we could not use.
    #[error("unexpected response (status {status})")]
    UnexpectedResponse { status: u16 },
}

/// Errors returned by [`AuthService`](crate::services::AuthService) and
/// [`UserService`](crate::services::UserService).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// Session missing or expired; the user has to log in again.
    #[error("authentication required")]
    Authentication,

    /// Login rejected the id/password pair.
    #[error("invalid id or password")]
    InvalidCredentials,

    /// Transport or connectivity failure.
    #[error("network failure: {cause}")]
    Network { cause: String },

    /// Server-side failure.
    #[error("server failure: {0}")]
    Server(#[from] ServerError),

    /// Anything else.
    #[error("{message}")]
    System { message: String },
}

impl ServiceError {
    pub fn network(cause: impl Into<String>) -> Self {
        Self::Network {
            cause: cause.into(),
        }
    }

    pub fn internal(cause: impl Into<String>) -> Self {
        Self::Server(ServerError::Internal {
            cause: cause.into(),
        })
    }

    pub fn system(message: impl Into<String>) -> Self {
        Self::System {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_error_converts_into_service_error() {
        let err: ServiceError = ServerError::UnexpectedResponse { status: 503 }.into();
        assert_eq!(err.to_string(), "server failure: unexpected response (status 503)");
    }

    #[test]
    fn network_error_keeps_cause() {
        assert_eq!(
            ServiceError::network("connection reset").to_string(),
            "network failure: connection reset"
        );
    }
}
