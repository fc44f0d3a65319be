//! Keyword-based intent classification.
//!
//! Intents are checked in a fixed priority order; the first keyword set
//! with a hit wins. Matching is case-insensitive substring containment,
//! so "place order" lands on [`Intent::AddItem`] (the word "order" is an
//! add keyword and add is checked before confirm).

use garcon_core::{Intent, IntentClassifier};
use tracing::debug;

const MENU_KEYWORDS: &[&str] = &["menu", "items", "available", "what do you have"];
const ADD_KEYWORDS: &[&str] = &["add", "order", "want", "get", "buy", "like"];
const VIEW_KEYWORDS: &[&str] = &["cart", "basket", "what's in", "show cart"];
const CONFIRM_KEYWORDS: &[&str] = &["confirm", "place order", "checkout", "confirm order"];

/// The default classifier: fixed keyword sets, checked menu → add →
/// view → confirm, falling through to [`Intent::General`].
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordClassifier;

impl KeywordClassifier {
    pub fn new() -> Self {
        Self
    }
}

fn contains_any(message: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| message.contains(keyword))
}

impl IntentClassifier for KeywordClassifier {
    fn name(&self) -> &str {
        "keyword"
    }

    fn classify(&self, message: &str) -> Intent {
        let message = message.to_lowercase();
        let intent = if contains_any(&message, MENU_KEYWORDS) {
            Intent::Menu
        } else if contains_any(&message, ADD_KEYWORDS) {
            Intent::AddItem
        } else if contains_any(&message, VIEW_KEYWORDS) {
            Intent::ViewCart
        } else if contains_any(&message, CONFIRM_KEYWORDS) {
            Intent::ConfirmOrder
        } else {
            Intent::General
        };
        debug!(intent = intent.as_str(), "classified message");
        intent
    }
}
