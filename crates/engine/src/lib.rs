//! # Garçon Engine
//!
//! The conversation engine: classifies each inbound message, routes it to
//! exactly one handler, and produces the reply plus the session's cart
//! state. One message in, one reply out — there is no multi-turn dialogue
//! state beyond the cart itself.

pub mod engine;
pub mod render;

pub use engine::{Handler, OrderingEngine, Turn, route};
