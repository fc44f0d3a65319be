//! Session identifiers.
//!
//! Carts are keyed by session. Clients that don't supply an identifier get
//! the shared `"default"` session; an empty string is treated the same way.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Default session identifier for clients that never supply one.
pub const DEFAULT_SESSION: &str = "default";

/// Opaque session identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    /// Wraps a caller-supplied identifier. An empty string falls back to
    /// [`DEFAULT_SESSION`].
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        if id.is_empty() {
            Self(DEFAULT_SESSION.to_string())
        } else {
            Self(id)
        }
    }

    /// A fresh, unique session identifier.
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self(DEFAULT_SESSION.to_string())
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SessionId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for SessionId {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}
