//! # Garçon Store
//!
//! Cart storage backends implementing [`garcon_core::CartStore`].
//!
//! Ships with an in-memory backend bounded by session count and idle TTL.
//! Persistence across restarts is out of scope; a cart is a short-lived
//! conversation artifact, not an order record.

pub mod in_memory;

pub use in_memory::{InMemoryCartStore, StoreLimits};
