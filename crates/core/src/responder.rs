//! General-chat responder capability.
//!
//! Messages that don't map to an ordering intent are handed to a
//! [`Responder`]. The built-in implementations live in `garcon-responders`;
//! when no LLM is configured (or it fails), callers fall back to
//! [`DEFAULT_GREETING`] so the customer always gets an answer.

use async_trait::async_trait;

use crate::error::ResponderError;

/// Canned reply used whenever no live responder is available.
pub const DEFAULT_GREETING: &str = "Hello! I'm here to help you order food. \
Would you like to see our menu or do you have any questions about our offerings?";

/// Generates a free-form reply to a general (non-ordering) message.
#[async_trait]
pub trait Responder: Send + Sync {
    /// Short identifier for logs.
    fn name(&self) -> &str;

    /// Produces a reply to the customer's message.
    async fn generate(&self, message: &str) -> std::result::Result<String, ResponderError>;
}
