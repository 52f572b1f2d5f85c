//! Async operations of the home screen.

use std::future::Future;
use std::sync::Arc;

use futures_core::future::BoxFuture;
use parking_lot::Mutex;
use tokio::sync::watch;

use crate::services::{AuthService, UserService};
use crate::ui::alert::AlertCategory;

use super::state::HomeViewState;

pub type DismissFuture = BoxFuture<'static, ()>;

type DismissFn = Box<dyn FnOnce() -> DismissFuture + Send>;

/// Drives the home screen.
///
/// Profile loading and logout are each single-flight, and independent of
/// each other. State changes are published through [`subscribe`].
///
/// [`subscribe`]: HomeController::subscribe
pub struct HomeController {
    auth: Arc<dyn AuthService>,
    users: Arc<dyn UserService>,
    state: watch::Sender<HomeViewState>,
    /// Taken on first use, so the screen is dismissed at most once.
    dismiss: Mutex<Option<DismissFn>>,
}

impl HomeController {
    /// `on_dismiss` closes the screen and returns the user to login.
    pub fn new<F, Fut>(
        auth: Arc<dyn AuthService>,
        users: Arc<dyn UserService>,
        on_dismiss: F,
    ) -> Self
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let (state, _) = watch::channel(HomeViewState::default());
        let dismiss: DismissFn = Box::new(move || Box::pin(on_dismiss()) as DismissFuture);
        Self {
            auth,
            users,
            state,
            dismiss: Mutex::new(Some(dismiss)),
        }
    }

    pub fn state(&self) -> HomeViewState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<HomeViewState> {
        self.state.subscribe()
    }

    /// Called when the screen appears.
    pub async fn load(&self) {
        self.load_user().await;
    }

    /// Fetch the profile. No-op while a previous fetch is outstanding.
    pub async fn load_user(&self) {
        let began = self
            .state
            .send_if_modified(|state| state.loading.begin().is_ok());
        if !began {
            tracing::debug!("profile load already running, ignoring trigger");
            return;
        }

        match self.users.current_user().await {
            Ok(user) => {
                tracing::debug!(user = %user.id, "profile loaded");
                self.state.send_modify(|state| {
                    state.user = Some(user);
                    state.loading.succeed();
                });
            }
            Err(error) => {
                tracing::info!(
                    error = %error,
                    category = ?AlertCategory::classify(&error),
                    "failed to load profile"
                );
                self.state.send_modify(|state| state.loading.fail(error));
            }
        }
    }

    /// Log out and dismiss the screen.
    ///
    /// The guard stays armed afterwards: the screen is going away and must
    /// not accept a second logout during the transition.
    pub async fn log_out(&self) {
        let began = self
            .state
            .send_if_modified(|state| state.logout.begin().is_ok());
        if !began {
            tracing::debug!("logout already running, ignoring trigger");
            return;
        }

        self.state.send_modify(|state| state.shows_busy_overlay = true);
        self.auth.log_out().await;
        self.state.send_modify(|state| state.shows_busy_overlay = false);

        self.dismiss().await;
    }

    /// Close whichever alert is showing. Returns `false` if none was.
    pub fn dismiss_alert(&self) -> bool {
        self.state.send_if_modified(|state| {
            if !state.loading.is_failed() {
                return false;
            }
            state.loading.clear_error();
            true
        })
    }

    /// OK button of the authentication alert: close it and go back to login.
    pub async fn acknowledge_authentication_alert(&self) {
        let acknowledged = self.state.send_if_modified(|state| {
            if !state.presents_authentication_error_alert() {
                return false;
            }
            state.loading.clear_error();
            true
        });
        if acknowledged {
            self.dismiss().await;
        }
    }

    async fn dismiss(&self) {
        let dismiss = self.dismiss.lock().take();
        match dismiss {
            Some(dismiss) => dismiss().await,
            None => tracing::debug!("home screen already dismissed"),
        }
    }
}
