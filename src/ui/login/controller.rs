//! Async operations of the login screen.

use std::sync::Arc;

use tokio::sync::{mpsc, watch};

use crate::services::AuthService;
use crate::ui::navigation::NavigationSignal;

use super::state::LoginViewState;

/// Raised once per successful login.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionToHome;

/// Drives the login screen.
pub struct LoginController {
    auth: Arc<dyn AuthService>,
    state: watch::Sender<LoginViewState>,
    transition_to_home: NavigationSignal<TransitionToHome>,
}

impl LoginController {
    pub fn new(auth: Arc<dyn AuthService>) -> Self {
        let (state, _) = watch::channel(LoginViewState::default());
        Self {
            auth,
            state,
            transition_to_home: NavigationSignal::new(),
        }
    }

    pub fn state(&self) -> LoginViewState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<LoginViewState> {
        self.state.subscribe()
    }

    /// Receiver for the home transition. Only the first caller gets it.
    pub fn take_transition_to_home(&self) -> Option<mpsc::UnboundedReceiver<TransitionToHome>> {
        self.transition_to_home.take_receiver()
    }

    pub fn set_id(&self, id: impl Into<String>) {
        let id = id.into();
        self.state.send_if_modified(|state| {
            if state.id == id {
                return false;
            }
            state.id = id;
            true
        });
    }

    pub fn set_password(&self, password: impl Into<String>) {
        let password = password.into();
        self.state.send_if_modified(|state| {
            if state.password == password {
                return false;
            }
            state.password = password;
            true
        });
    }

    /// Submit the current credentials. No-op while a submission is outstanding.
    ///
    /// The credentials are captured when the guard is armed; edits made
    /// while the request is in flight apply to the next attempt.
    pub async fn log_in(&self) {
        let mut credentials = None;
        self.state.send_if_modified(|state| {
            if state.submission.begin().is_err() {
                return false;
            }
            state.shows_busy_overlay = true;
            credentials = Some((state.id.clone(), state.password.clone()));
            true
        });
        let Some((id, password)) = credentials else {
            tracing::debug!("login already running, ignoring trigger");
            return;
        };

        match self.auth.log_in_with(&id, &password).await {
            Ok(()) => {
                self.state.send_modify(|state| {
                    state.shows_busy_overlay = false;
                    state.submission.succeed();
                });
                tracing::info!(id = %id, "logged in");
                self.transition_to_home.emit(TransitionToHome);
            }
            Err(error) => {
                tracing::info!(error = %error, id = %id, "login failed");
                self.state.send_modify(|state| {
                    state.shows_busy_overlay = false;
                    state.submission.fail(error);
                });
            }
        }
    }

    /// Close the error alert. Returns `false` if there was none.
    pub fn dismiss_error(&self) -> bool {
        self.state.send_if_modified(|state| {
            if !state.submission.is_failed() {
                return false;
            }
            state.submission.clear_error();
            true
        })
    }
}
