use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::entities::User;
use crate::services::SimulatedFailure;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub demo: DemoConfig,
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive (default: "info"). `RUST_LOG` takes precedence.
    #[serde(default = "default_log_filter")]
    pub filter: String,
    /// Write logs to this file instead of stderr.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

/// In-memory services used by the demo host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemoConfig {
    /// Simulated latency of every service call in milliseconds (default: 300).
    #[serde(default = "default_latency_ms")]
    pub latency_ms: u64,
    /// The only account the auth service accepts.
    #[serde(default)]
    pub account: AccountConfig,
    /// Profile returned once logged in.
    #[serde(default = "default_user")]
    pub user: User,
    /// Make every profile fetch fail with this kind of error.
    #[serde(default)]
    pub user_failure: Option<SimulatedFailure>,
}

/// Credentials accepted by the demo auth service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountConfig {
    pub id: String,
    pub password: String,
}

impl DemoConfig {
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }
}

fn default_log_filter() -> String {
    "info".to_string()
}

fn default_latency_ms() -> u64 {
    300
}

fn default_user() -> User {
    User::new("koher", "Yuta Koshizawa", "Hello, I'm **koher**.")
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
            file: None,
        }
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            latency_ms: default_latency_ms(),
            account: AccountConfig::default(),
            user: default_user(),
            user_failure: None,
        }
    }
}

impl Default for AccountConfig {
    fn default() -> Self {
        Self {
            id: "koher".to_string(),
            password: "pw".to_string(),
        }
    }
}
