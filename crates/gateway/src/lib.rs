//! HTTP API gateway for Garçon.
//!
//! Exposes the chat endpoint, per-session cart reads and clears, and a
//! health check, plus the embedded single-page frontend.
//!
//! Built on Axum for high performance async HTTP.

pub mod frontend;

use std::sync::Arc;

use axum::extract::{DefaultBodyLimit, Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use axum::routing::{delete, get, post};
use axum::Router;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tracing::{error, info};

use garcon_core::{Cart, CartLine, SessionId};
use garcon_engine::OrderingEngine;
use garcon_store::{InMemoryCartStore, StoreLimits};

/// Shared application state for the gateway.
///
/// The engine owns all mutable state behind its store, so the gateway
/// shares a plain `Arc` with no outer lock.
pub struct GatewayState {
    pub engine: OrderingEngine,
    pub started_at: DateTime<Utc>,
}

type SharedState = Arc<GatewayState>;

/// Build the Axum router with all gateway routes.
pub fn build_router(state: SharedState) -> Router {
    // CORS is wide open: the bundled frontend is same-origin, but the API
    // is also meant to be callable from kiosk pages on other hosts.
    Router::new()
        .route("/chat", post(chat_handler))
        .route("/cart/{session_id}", get(read_cart_handler))
        .route("/cart/{session_id}", delete(clear_cart_handler))
        .route("/health", get(health_handler))
        .with_state(state)
        .merge(frontend::frontend_router())
        .layer(DefaultBodyLimit::max(64 * 1024))
        .layer(CorsLayer::permissive())
        .layer(tower_http::trace::TraceLayer::new_for_http())
}

/// Build the gateway state from configuration.
///
/// Wires the menu catalog, the bounded in-memory cart store, and the
/// general-chat responder into one [`OrderingEngine`].
pub fn build_state(config: &garcon_config::AppConfig) -> Result<SharedState, garcon_core::Error> {
    let catalog = config.menu_catalog()?;
    let limits = StoreLimits {
        max_sessions: config.store.max_sessions,
        idle_ttl: config.store.idle_ttl(),
    };
    let store = Arc::new(InMemoryCartStore::with_limits(limits));
    let responder = Arc::new(garcon_responders::build_from_config(config));

    info!(
        menu_items = catalog.len(),
        max_sessions = limits.max_sessions,
        "Ordering engine assembled"
    );

    Ok(Arc::new(GatewayState {
        engine: OrderingEngine::new(catalog, store, responder),
        started_at: Utc::now(),
    }))
}

/// Start the gateway HTTP server.
pub async fn start(config: garcon_config::AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let host = config.gateway.host.clone();
    let port = config.gateway.port;
    let addr = format!("{host}:{port}");

    let state = build_state(&config)?;
    let app = build_router(state);

    info!(addr = %addr, "Gateway listening");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

// --- Wire types ---

#[derive(Deserialize)]
struct ChatRequest {
    message: String,
    #[serde(default)]
    session_id: Option<String>,
}

#[derive(Serialize, Deserialize)]
struct ChatResponse {
    response: String,
    cart_items: Vec<CartLine>,
    total_amount: Decimal,
}

#[derive(Serialize, Deserialize)]
struct CartResponse {
    cart_items: Vec<CartLine>,
    total_amount: Decimal,
}

#[derive(Serialize, Deserialize)]
struct ClearResponse {
    message: String,
}

#[derive(Serialize, Deserialize)]
struct HealthResponse {
    status: String,
    version: String,
    uptime_secs: u64,
    sessions: usize,
}

#[derive(Serialize, Deserialize)]
struct ErrorResponse {
    detail: String,
}

fn internal_error(err: garcon_core::Error) -> (StatusCode, Json<ErrorResponse>) {
    error!(error = %err, "request failed");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            detail: err.to_string(),
        }),
    )
}

// --- Handlers ---

async fn chat_handler(
    State(state): State<SharedState>,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, (StatusCode, Json<ErrorResponse>)> {
    let session = SessionId::new(payload.session_id.unwrap_or_default());
    info!(
        session = %session,
        message_len = payload.message.len(),
        "chat request"
    );

    let turn = state
        .engine
        .submit(&payload.message, &session)
        .await
        .map_err(internal_error)?;

    Ok(Json(ChatResponse {
        response: turn.reply,
        cart_items: turn.cart.lines().to_vec(),
        total_amount: turn.cart.total(),
    }))
}

async fn read_cart_handler(
    State(state): State<SharedState>,
    Path(session_id): Path<String>,
) -> Result<Json<CartResponse>, (StatusCode, Json<ErrorResponse>)> {
    let session = SessionId::new(session_id);
    let cart = state
        .engine
        .read_cart(&session)
        .await
        .map_err(internal_error)?;

    Ok(Json(cart_response(&cart)))
}

async fn clear_cart_handler(
    State(state): State<SharedState>,
    Path(session_id): Path<String>,
) -> Result<Json<ClearResponse>, (StatusCode, Json<ErrorResponse>)> {
    let session = SessionId::new(session_id);
    state
        .engine
        .clear_cart(&session)
        .await
        .map_err(internal_error)?;

    Ok(Json(ClearResponse {
        message: "Cart cleared successfully".to_string(),
    }))
}

async fn health_handler(
    State(state): State<SharedState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<ErrorResponse>)> {
    let sessions = state
        .engine
        .session_count()
        .await
        .map_err(internal_error)?;
    // A backwards clock step must not wrap the uptime to a huge value.
    let uptime = Utc::now()
        .signed_duration_since(state.started_at)
        .num_seconds()
        .max(0) as u64;

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_secs: uptime,
        sessions,
    }))
}

fn cart_response(cart: &Cart) -> CartResponse {
    CartResponse {
        cart_items: cart.lines().to_vec(),
        total_amount: cart.total(),
    }
}
