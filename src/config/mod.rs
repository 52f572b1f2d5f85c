//! Configuration for the demo host.
//!
//! Read from `~/.config/loginflow/config.toml` (or the platform equivalent).
//! Every section is optional.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{AccountConfig, Config, DemoConfig, LoggingConfig};
