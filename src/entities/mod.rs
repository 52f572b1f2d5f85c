//! Domain entities shared by the services and the screens.

mod user;

pub use user::{User, UserId};
