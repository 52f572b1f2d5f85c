use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique handle of a user account (e.g., "koher").
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Handle as shown under the display name, e.g. `@koher`.
    pub fn handle(&self) -> String {
        format!("@{}", self.0)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for UserId {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for UserId {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

/// Profile shown on the home screen.
///
/// Fetched as a whole and replaced as a whole on every reload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    /// Free text, may be empty.
    #[serde(default)]
    pub introduction: String,
}

impl User {
    pub fn new(id: impl Into<UserId>, name: impl Into<String>, introduction: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            introduction: introduction.into(),
        }
    }
}
