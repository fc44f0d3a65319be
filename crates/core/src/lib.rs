//! # Garçon Core
//!
//! Domain types, traits, and error definitions for the Garçon food-ordering
//! assistant. This crate has **zero framework dependencies** — it defines the
//! domain model that all other crates implement against.
//!
//! ## Design Philosophy
//!
//! Every swappable subsystem is defined as a trait here. Implementations live
//! in their respective crates. This enables:
//! - Swapping implementations via configuration
//! - Easy testing with mock/stub implementations
//! - Clean dependency graph (all crates depend inward on core)

pub mod error;
pub mod menu;
pub mod cart;
pub mod session;
pub mod intent;
pub mod matcher;
pub mod store;
pub mod responder;

// Re-export key types at crate root for ergonomics
pub use error::{CatalogError, Error, ResponderError, Result, StoreError};
pub use menu::{Catalog, MenuItem};
pub use cart::{Cart, CartLine};
pub use session::SessionId;
pub use intent::{Intent, IntentClassifier};
pub use matcher::ItemMatcher;
pub use store::CartStore;
pub use responder::{Responder, DEFAULT_GREETING};
