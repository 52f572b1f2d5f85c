//! Shared test doubles for the screen controllers.

#![allow(dead_code, unused_imports)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use loginflow::entities::User;
use loginflow::error::ServiceError;
use loginflow::services::{AuthService, UserService};
use parking_lot::Mutex;
use tokio::sync::Notify;

pub fn koher() -> User {
    User::new("koher", "Yuta Koshizawa", "")
}

/// Holds a service call open until the test releases it.
#[derive(Default)]
pub struct Gate {
    entered: Notify,
    release: Notify,
}

impl Gate {
    /// Wait until the call has reached the service.
    pub async fn wait_entered(&self) {
        self.entered.notified().await;
    }

    /// Let the pending call resolve.
    pub fn release(&self) {
        self.release.notify_one();
    }

    async fn pass(&self) {
        self.entered.notify_one();
        self.release.notified().await;
    }
}

// -- User service -------------------------------------------------------------

pub struct ScriptedUserService {
    outcome: Mutex<Result<User, ServiceError>>,
    calls: AtomicUsize,
    gate: Option<Gate>,
}

impl ScriptedUserService {
    pub fn returning(outcome: Result<User, ServiceError>) -> Self {
        Self {
            outcome: Mutex::new(outcome),
            calls: AtomicUsize::new(0),
            gate: None,
        }
    }

    /// Every call blocks until [`Gate::release`].
    pub fn gated(outcome: Result<User, ServiceError>) -> Self {
        Self {
            gate: Some(Gate::default()),
            ..Self::returning(outcome)
        }
    }

    pub fn set_outcome(&self, outcome: Result<User, ServiceError>) {
        *self.outcome.lock() = outcome;
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn gate(&self) -> &Gate {
        self.gate.as_ref().expect("service is not gated")
    }
}

#[async_trait]
impl UserService for ScriptedUserService {
    async fn current_user(&self) -> Result<User, ServiceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(gate) = &self.gate {
            gate.pass().await;
        }
        let outcome = self.outcome.lock().clone();
        outcome
    }
}

// -- Auth service -------------------------------------------------------------

pub struct ScriptedAuthService {
    login_outcome: Mutex<Result<(), ServiceError>>,
    login_calls: AtomicUsize,
    logout_calls: AtomicUsize,
    last_credentials: Mutex<Option<(String, String)>>,
    login_gate: Option<Gate>,
    logout_gate: Option<Gate>,
}

impl ScriptedAuthService {
    pub fn accepting() -> Self {
        Self::returning(Ok(()))
    }

    pub fn rejecting(error: ServiceError) -> Self {
        Self::returning(Err(error))
    }

    fn returning(outcome: Result<(), ServiceError>) -> Self {
        Self {
            login_outcome: Mutex::new(outcome),
            login_calls: AtomicUsize::new(0),
            logout_calls: AtomicUsize::new(0),
            last_credentials: Mutex::new(None),
            login_gate: None,
            logout_gate: None,
        }
    }

    pub fn with_login_gate(mut self) -> Self {
        self.login_gate = Some(Gate::default());
        self
    }

    pub fn with_logout_gate(mut self) -> Self {
        self.logout_gate = Some(Gate::default());
        self
    }

    pub fn set_login_outcome(&self, outcome: Result<(), ServiceError>) {
        *self.login_outcome.lock() = outcome;
    }

    pub fn login_calls(&self) -> usize {
        self.login_calls.load(Ordering::SeqCst)
    }

    pub fn logout_calls(&self) -> usize {
        self.logout_calls.load(Ordering::SeqCst)
    }

    pub fn last_credentials(&self) -> Option<(String, String)> {
        self.last_credentials.lock().clone()
    }

    pub fn login_gate(&self) -> &Gate {
        self.login_gate.as_ref().expect("login is not gated")
    }

    pub fn logout_gate(&self) -> &Gate {
        self.logout_gate.as_ref().expect("logout is not gated")
    }
}

#[async_trait]
impl AuthService for ScriptedAuthService {
    async fn log_in_with(&self, id: &str, password: &str) -> Result<(), ServiceError> {
        self.login_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_credentials.lock() = Some((id.to_string(), password.to_string()));
        if let Some(gate) = &self.login_gate {
            gate.pass().await;
        }
        let outcome = self.login_outcome.lock().clone();
        outcome
    }

    async fn log_out(&self) {
        self.logout_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(gate) = &self.logout_gate {
            gate.pass().await;
        }
    }
}

// -- Dismissal ----------------------------------------------------------------

/// Counts how often a screen's dismissal callback ran.
#[derive(Clone, Default)]
pub struct DismissCounter(Arc<AtomicUsize>);

impl DismissCounter {
    pub fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }

    pub fn record(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }
}
