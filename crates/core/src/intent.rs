//! Intents and the classifier capability.
//!
//! Every inbound message is routed through exactly one [`Intent`]. The
//! classifier is a trait so deployments can replace the built-in keyword
//! scanner with something smarter without touching the routing engine.

use serde::{Deserialize, Serialize};

/// What the customer is trying to do with a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Menu,
    AddItem,
    ViewCart,
    ConfirmOrder,
    General,
}

impl Intent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Menu => "menu",
            Intent::AddItem => "add_item",
            Intent::ViewCart => "view_cart",
            Intent::ConfirmOrder => "confirm_order",
            Intent::General => "general",
        }
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Maps a raw customer message to an [`Intent`].
///
/// Implementations must be deterministic: the same message always yields
/// the same intent.
pub trait IntentClassifier: Send + Sync {
    /// Short identifier for logs.
    fn name(&self) -> &str;

    /// Classifies a single message in isolation (no session context).
    fn classify(&self, message: &str) -> Intent;
}
