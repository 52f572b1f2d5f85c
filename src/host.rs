//! Scripted host for the two screens.
//!
//! Plays the role of the UI: wires the controllers to services, presses the
//! buttons, reacts to alerts, the navigation signal and dismissal, and
//! records what a user would have seen.

use std::fmt;
use std::sync::Arc;

use tokio::sync::oneshot;

use crate::config::DemoConfig;
use crate::entities::User;
use crate::services::{
    AuthService, InMemoryAuthService, InMemoryUserService, Session, UserService,
};
use crate::ui::alert::AlertCategory;
use crate::ui::home::HomeController;
use crate::ui::login::{LoginAlert, LoginController};

/// Service pair sharing one session.
#[derive(Clone)]
pub struct Services {
    pub auth: Arc<dyn AuthService>,
    pub users: Arc<dyn UserService>,
}

impl Services {
    pub fn in_memory(config: &DemoConfig) -> Self {
        let session = Session::new();
        let auth = InMemoryAuthService::new(
            config.account.id.clone(),
            config.account.password.clone(),
            config.latency(),
            session.clone(),
        );
        let users = InMemoryUserService::new(
            config.user.clone(),
            config.user_failure,
            config.latency(),
            session,
        );
        Self {
            auth: Arc::new(auth),
            users: Arc::new(users),
        }
    }
}

/// Something the user saw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    /// Login button was disabled; nothing was submitted.
    SubmitDisabled,
    LoginFailed(LoginAlert),
    NavigatedToHome,
    UserLoaded(User),
    AlertShown(AlertCategory),
    /// Home screen closed, back to login.
    Dismissed,
}

impl fmt::Display for HostEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SubmitDisabled => write!(f, "login: id and password are required"),
            Self::LoginFailed(alert) => {
                write!(f, "login: [{}] {}", alert.title(), alert.message())
            }
            Self::NavigatedToHome => write!(f, "login: transition to home"),
            Self::UserLoaded(user) => {
                write!(f, "home: {} ({})", user.name, user.id.handle())?;
                if !user.introduction.is_empty() {
                    write!(f, " - {}", user.introduction)?;
                }
                Ok(())
            }
            Self::AlertShown(category) => {
                write!(f, "home: [{}] {}", category.title(), category.message())
            }
            Self::Dismissed => write!(f, "home: dismissed"),
        }
    }
}

/// Fill in the login form and press the login button once.
pub async fn run_login(services: &Services, id: &str, password: &str) -> Vec<HostEvent> {
    let mut events = Vec::new();
    let login = LoginController::new(Arc::clone(&services.auth));
    let Some(mut transition) = login.take_transition_to_home() else {
        return events;
    };

    login.set_id(id);
    login.set_password(password);
    if !login.state().can_submit() {
        events.push(HostEvent::SubmitDisabled);
        return events;
    }

    login.log_in().await;

    if let Some(error) = login.state().last_error() {
        events.push(HostEvent::LoginFailed(LoginAlert::for_error(error)));
        login.dismiss_error();
        return events;
    }

    if transition.try_recv().is_ok() {
        events.push(HostEvent::NavigatedToHome);
    }
    events
}

/// Show the home screen: load the profile, handle any alert, then log out.
pub async fn run_home(services: &Services) -> Vec<HostEvent> {
    let mut events = Vec::new();
    let (dismissed_tx, dismissed_rx) = oneshot::channel();
    let home = HomeController::new(
        Arc::clone(&services.auth),
        Arc::clone(&services.users),
        move || async move {
            let _ = dismissed_tx.send(());
        },
    );

    home.load().await;

    let state = home.state();
    if let Some(user) = state.user() {
        events.push(HostEvent::UserLoaded(user.clone()));
    }
    match state.active_alert() {
        Some(AlertCategory::Authentication) => {
            events.push(HostEvent::AlertShown(AlertCategory::Authentication));
            home.acknowledge_authentication_alert().await;
        }
        Some(category) => {
            events.push(HostEvent::AlertShown(category));
            home.dismiss_alert();
            home.log_out().await;
        }
        None => home.log_out().await,
    }
    drop(home);

    if dismissed_rx.await.is_ok() {
        events.push(HostEvent::Dismissed);
    }
    events
}

/// Log in, and if that navigates, run the home screen.
pub async fn run_flow(services: &Services, id: &str, password: &str) -> Vec<HostEvent> {
    let mut events = run_login(services, id, password).await;
    if events.last() == Some(&HostEvent::NavigatedToHome) {
        events.extend(run_home(services).await);
    }
    events
}
