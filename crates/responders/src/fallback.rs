//! Responder fallback — ordered chain with per-responder timeouts.
//!
//! When a responder fails (timeout, rate limit, error), automatically tries
//! the next one in the chain. The chain always terminates in the canned
//! reply, so `generate` never surfaces an error to the conversation.

use async_trait::async_trait;
use garcon_core::Responder;
use garcon_core::error::ResponderError;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

use crate::canned::CannedResponder;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Wraps an ordered list of responders and falls back on failure, ending
/// at a canned reply.
pub struct FallbackResponder {
    name: String,
    chain: Vec<FallbackEntry>,
    canned: CannedResponder,
}

/// A single entry in the fallback chain.
struct FallbackEntry {
    responder: Arc<dyn Responder>,
    timeout: Duration,
}

impl FallbackResponder {
    /// Create a new fallback responder with an empty chain.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            chain: Vec::new(),
            canned: CannedResponder::new(),
        }
    }

    /// Add a responder to the chain with a custom timeout.
    pub fn add(mut self, responder: Arc<dyn Responder>, timeout: Duration) -> Self {
        self.chain.push(FallbackEntry { responder, timeout });
        self
    }

    /// Add a responder with the default timeout (15s).
    pub fn add_default(self, responder: Arc<dyn Responder>) -> Self {
        self.add(responder, DEFAULT_TIMEOUT)
    }

    /// Number of responders in the chain (excluding the canned terminal).
    pub fn len(&self) -> usize {
        self.chain.len()
    }

    /// Whether the chain has no live responders.
    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }
}

#[async_trait]
impl Responder for FallbackResponder {
    fn name(&self) -> &str {
        &self.name
    }

    async fn generate(&self, message: &str) -> std::result::Result<String, ResponderError> {
        for (i, entry) in self.chain.iter().enumerate() {
            let responder_name = entry.responder.name().to_string();

            info!(
                responder = %responder_name,
                attempt = i + 1,
                total = self.chain.len(),
                "Fallback: trying responder"
            );

            match tokio::time::timeout(entry.timeout, entry.responder.generate(message)).await {
                Ok(Ok(reply)) => return Ok(reply),
                Ok(Err(e)) => {
                    warn!(
                        responder = %responder_name,
                        error = %e,
                        "Fallback: responder failed, trying next"
                    );
                }
                Err(_) => {
                    warn!(
                        responder = %responder_name,
                        timeout_secs = entry.timeout.as_secs(),
                        "Fallback: responder timed out, trying next"
                    );
                }
            }
        }

        // The canned terminal cannot fail.
        self.canned.generate(message).await
    }
}
