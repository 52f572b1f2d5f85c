//! In-memory services with simulated latency.
//!
//! Both services share a [`Session`], so fetching the profile without
//! logging in first fails with [`ServiceError::Authentication`].

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::entities::User;
use crate::error::ServiceError;

use super::{AuthService, UserService};

/// Failure injected into [`InMemoryUserService::current_user`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SimulatedFailure {
    Authentication,
    Network,
    Server,
    System,
}

impl SimulatedFailure {
    pub fn to_error(self) -> ServiceError {
        match self {
            Self::Authentication => ServiceError::Authentication,
            Self::Network => ServiceError::network("simulated connection failure"),
            Self::Server => ServiceError::internal("simulated server failure"),
            Self::System => ServiceError::system("simulated system failure"),
        }
    }
}

/// Login flag shared between the in-memory services.
#[derive(Debug, Clone, Default)]
pub struct Session {
    active: Arc<AtomicBool>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }

    fn set_active(&self, active: bool) {
        self.active.store(active, Ordering::SeqCst);
    }
}

pub struct InMemoryAuthService {
    id: String,
    password: String,
    latency: Duration,
    session: Session,
}

impl InMemoryAuthService {
    pub fn new(
        id: impl Into<String>,
        password: impl Into<String>,
        latency: Duration,
        session: Session,
    ) -> Self {
        Self {
            id: id.into(),
            password: password.into(),
            latency,
            session,
        }
    }
}

#[async_trait]
impl AuthService for InMemoryAuthService {
    async fn log_in_with(&self, id: &str, password: &str) -> Result<(), ServiceError> {
        tokio::time::sleep(self.latency).await;

        if id != self.id || password != self.password {
            return Err(ServiceError::InvalidCredentials);
        }
        self.session.set_active(true);
        Ok(())
    }

    async fn log_out(&self) {
        tokio::time::sleep(self.latency).await;
        self.session.set_active(false);
    }
}

pub struct InMemoryUserService {
    user: User,
    failure: Option<SimulatedFailure>,
    latency: Duration,
    session: Session,
}

impl InMemoryUserService {
    pub fn new(
        user: User,
        failure: Option<SimulatedFailure>,
        latency: Duration,
        session: Session,
    ) -> Self {
        Self {
            user,
            failure,
            latency,
            session,
        }
    }
}

#[async_trait]
impl UserService for InMemoryUserService {
    async fn current_user(&self) -> Result<User, ServiceError> {
        tokio::time::sleep(self.latency).await;

        if let Some(failure) = self.failure {
            return Err(failure.to_error());
        }
        if !self.session.is_active() {
            return Err(ServiceError::Authentication);
        }
        Ok(self.user.clone())
    }
}
