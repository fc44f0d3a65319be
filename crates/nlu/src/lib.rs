//! # Garçon NLU
//!
//! Lightweight language understanding: a keyword-based intent classifier
//! and a substring item matcher. Both are deterministic and need no model
//! downloads, so the assistant works offline out of the box.
//!
//! Deployments wanting smarter understanding implement
//! [`garcon_core::IntentClassifier`] / [`garcon_core::ItemMatcher`] and
//! inject those instead.

pub mod classifier;
pub mod matcher;

pub use classifier::KeywordClassifier;
pub use matcher::SubstringMatcher;
