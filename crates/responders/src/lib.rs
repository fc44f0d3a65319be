//! Responder implementations for Garçon.
//!
//! All responders implement the `garcon_core::Responder` trait. The
//! builder assembles the right chain from configuration: an LLM primary
//! when an API key is available, always backed by the canned reply.

pub mod builder;
pub mod canned;
pub mod fallback;
pub mod openai_compat;

pub use builder::build_from_config;
pub use canned::CannedResponder;
pub use fallback::FallbackResponder;
pub use openai_compat::OpenAiCompatResponder;
