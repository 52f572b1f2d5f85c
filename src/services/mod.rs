//! Service boundaries consumed by the screen controllers.
//!
//! Controllers take these as `Arc<dyn ...>` so hosts can plug in real
//! clients and tests can plug in doubles.

mod memory;

use async_trait::async_trait;

use crate::entities::User;
use crate::error::ServiceError;

pub use memory::{InMemoryAuthService, InMemoryUserService, Session, SimulatedFailure};

/// Authentication backend.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Open a session for the given credentials.
    async fn log_in_with(&self, id: &str, password: &str) -> Result<(), ServiceError>;

    /// Close the current session.
    ///
    /// Infallible from the caller's point of view: the screen is dismissed
    /// whatever happens underneath.
    async fn log_out(&self);
}

/// Profile backend.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Fetch the profile of the logged-in user.
    async fn current_user(&self) -> Result<User, ServiceError>;
}
