//! Error types for the Garçon domain.
//!
//! Uses `thiserror` for ergonomic error definitions.
//! Each bounded context has its own error variant.

use thiserror::Error;

/// The top-level error type for all Garçon operations.
#[derive(Debug, Error)]
pub enum Error {
    // --- Cart store errors ---
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    // --- Responder errors ---
    #[error("Responder error: {0}")]
    Responder(#[from] ResponderError),

    // --- Catalog errors ---
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    // --- Configuration errors ---
    #[error("Configuration error: {message}")]
    Config { message: String },

    // --- Serialization ---
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // --- Generic ---
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias using our Error.
pub type Result<T> = std::result::Result<T, Error>;

// --- Bounded context errors ---

#[derive(Debug, Clone, Error)]
pub enum StoreError {
    #[error("Storage error: {0}")]
    Storage(String),
}

#[derive(Debug, Clone, Error)]
pub enum ResponderError {
    #[error("API request failed: {message} (status: {status_code})")]
    ApiError {
        status_code: u16,
        message: String,
    },

    #[error("Rate limited by provider, retry after {retry_after_secs}s")]
    RateLimited { retry_after_secs: u64 },

    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("Responder not configured: {0}")]
    NotConfigured(String),

    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("Network error: {0}")]
    Network(String),
}

#[derive(Debug, Clone, Error)]
pub enum CatalogError {
    #[error("Duplicate menu item name: {0}")]
    DuplicateName(String),

    #[error("Negative price for menu item: {0}")]
    NegativePrice(String),

    #[error("Catalog has no items")]
    Empty,
}
