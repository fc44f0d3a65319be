//! Canned responder — a fixed reply, no network, cannot fail.

use async_trait::async_trait;
use garcon_core::error::ResponderError;
use garcon_core::{DEFAULT_GREETING, Responder};

/// Always answers with the same reply. Used as the terminal fallback and
/// in tests.
pub struct CannedResponder {
    reply: String,
}

impl CannedResponder {
    /// The standard greeting that steers customers towards the menu.
    pub fn new() -> Self {
        Self {
            reply: DEFAULT_GREETING.to_string(),
        }
    }

    pub fn with_reply(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
        }
    }
}

impl Default for CannedResponder {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Responder for CannedResponder {
    fn name(&self) -> &str {
        "canned"
    }

    async fn generate(&self, _message: &str) -> std::result::Result<String, ResponderError> {
        Ok(self.reply.clone())
    }
}
