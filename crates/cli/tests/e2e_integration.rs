//! End-to-end integration tests for the Garçon ordering assistant.
//!
//! These tests exercise the full pipeline from customer message to reply,
//! including intent routing, item matching, cart storage, responder
//! fallback, and the HTTP gateway router.

use std::sync::Arc;
use std::time::Duration;

use garcon_core::error::ResponderError;
use garcon_core::{Catalog, DEFAULT_GREETING, Responder, SessionId};
use garcon_engine::OrderingEngine;
use garcon_responders::{CannedResponder, FallbackResponder};
use garcon_store::{InMemoryCartStore, StoreLimits};
use rust_decimal_macros::dec;

// ── Mock Responders ──────────────────────────────────────────────────────

/// A mock responder that returns scripted replies in sequence.
struct ScriptedResponder {
    replies: std::sync::Mutex<Vec<String>>,
    call_count: std::sync::Mutex<usize>,
}

impl ScriptedResponder {
    fn new(replies: Vec<&str>) -> Self {
        Self {
            replies: std::sync::Mutex::new(replies.into_iter().map(String::from).collect()),
            call_count: std::sync::Mutex::new(0),
        }
    }

    fn calls(&self) -> usize {
        *self.call_count.lock().unwrap()
    }
}

#[async_trait::async_trait]
impl Responder for ScriptedResponder {
    fn name(&self) -> &str {
        "e2e_mock"
    }

    async fn generate(&self, _message: &str) -> Result<String, ResponderError> {
        let mut count = self.call_count.lock().unwrap();
        let replies = self.replies.lock().unwrap();
        if *count >= replies.len() {
            panic!(
                "ScriptedResponder exhausted: call #{}, have {}",
                *count,
                replies.len()
            );
        }
        let reply = replies[*count].clone();
        *count += 1;
        Ok(reply)
    }
}

/// A mock responder that always fails with the given error.
struct FailingResponder(ResponderError);

#[async_trait::async_trait]
impl Responder for FailingResponder {
    fn name(&self) -> &str {
        "e2e_failing"
    }

    async fn generate(&self, _message: &str) -> Result<String, ResponderError> {
        Err(self.0.clone())
    }
}

fn engine_with(responder: Arc<dyn Responder>) -> OrderingEngine {
    OrderingEngine::new(
        Catalog::builtin(),
        Arc::new(InMemoryCartStore::new()),
        responder,
    )
}

// ── E2E: Full Ordering Conversation ──────────────────────────────────────

#[tokio::test]
async fn e2e_order_conversation_touches_the_responder_only_for_general_chat() {
    // Scenario: greeting, menu, two additions, view, confirm. Only the
    // greeting should reach the LLM path.
    let scripted = Arc::new(ScriptedResponder::new(vec!["Welcome in!"]));
    let engine = engine_with(scripted.clone());
    let session = SessionId::new("table-12");

    let hello = engine.submit("good evening", &session).await.unwrap();
    assert_eq!(hello.reply, "Welcome in!");

    let menu = engine.submit("menu please", &session).await.unwrap();
    assert!(menu.reply.contains("Pasta Carbonara"));

    let first = engine
        .submit("I want a pasta carbonara", &session)
        .await
        .unwrap();
    assert!(first.reply.contains("Current total: $13.99"));

    let second = engine.submit("add fish tacos", &session).await.unwrap();
    assert!(second.reply.contains("Current total: $24.98"));

    let view = engine.submit("show cart", &session).await.unwrap();
    assert!(view.reply.contains("**Total: $24.98**"));

    let confirm = engine.submit("confirm", &session).await.unwrap();
    assert!(confirm.reply.contains("Your total is $24.98"));
    assert!(confirm.cart.is_empty());

    assert_eq!(scripted.calls(), 1, "ordering flows must bypass the LLM");
}

// ── E2E: Responder Fallback Chain ────────────────────────────────────────

#[tokio::test]
async fn e2e_failed_primary_falls_back_to_secondary() {
    let chain = FallbackResponder::new("general-chat")
        .add(
            Arc::new(FailingResponder(ResponderError::ApiError {
                status_code: 502,
                message: "Bad Gateway".into(),
            })),
            Duration::from_secs(1),
        )
        .add_default(Arc::new(CannedResponder::with_reply("Backup speaking.")));

    let engine = engine_with(Arc::new(chain));
    let turn = engine
        .submit("do you do gift cards?", &SessionId::new("s1"))
        .await
        .unwrap();

    assert_eq!(turn.reply, "Backup speaking.");
}

#[tokio::test]
async fn e2e_exhausted_chain_still_answers_the_customer() {
    let chain = FallbackResponder::new("general-chat").add(
        Arc::new(FailingResponder(ResponderError::Timeout(
            "model crawl".into(),
        ))),
        Duration::from_secs(1),
    );

    let engine = engine_with(Arc::new(chain));
    let turn = engine
        .submit("tell me a joke", &SessionId::new("s1"))
        .await
        .unwrap();

    assert_eq!(turn.reply, DEFAULT_GREETING);
}

// ── E2E: Cart Store Lifecycle ────────────────────────────────────────────

#[tokio::test]
async fn e2e_idle_sessions_expire_between_requests() {
    let store = Arc::new(InMemoryCartStore::with_limits(StoreLimits {
        max_sessions: 16,
        idle_ttl: Some(Duration::ZERO),
    }));
    let engine = OrderingEngine::new(
        Catalog::builtin(),
        store,
        Arc::new(CannedResponder::new()),
    );
    let session = SessionId::new("sleepy");

    let turn = engine.submit("add a pizza", &session).await.unwrap();
    assert_eq!(turn.cart.lines().len(), 2);

    // A zero TTL makes the session stale by the next access.
    let cart = engine.read_cart(&session).await.unwrap();
    assert!(cart.is_empty());
}

#[tokio::test]
async fn e2e_session_capacity_evicts_the_stalest_cart() {
    let store = Arc::new(InMemoryCartStore::with_limits(StoreLimits {
        max_sessions: 2,
        idle_ttl: None,
    }));
    let engine = OrderingEngine::new(
        Catalog::builtin(),
        store,
        Arc::new(CannedResponder::new()),
    );

    engine
        .submit("add a caesar salad", &SessionId::new("first"))
        .await
        .unwrap();
    std::thread::sleep(Duration::from_millis(5));
    engine
        .submit("add a beef burger", &SessionId::new("second"))
        .await
        .unwrap();
    std::thread::sleep(Duration::from_millis(5));
    engine
        .submit("add a chocolate cake", &SessionId::new("third"))
        .await
        .unwrap();

    assert_eq!(engine.session_count().await.unwrap(), 2);
    assert!(
        engine
            .read_cart(&SessionId::new("first"))
            .await
            .unwrap()
            .is_empty(),
        "the least recently touched session should be gone"
    );
    assert_eq!(
        engine
            .read_cart(&SessionId::new("third"))
            .await
            .unwrap()
            .total(),
        dec!(6.99)
    );
}

#[tokio::test]
async fn e2e_clearing_is_idempotent() {
    let engine = engine_with(Arc::new(CannedResponder::new()));
    let session = SessionId::new("s1");

    engine.submit("add a pizza", &session).await.unwrap();
    engine.clear_cart(&session).await.unwrap();
    engine.clear_cart(&session).await.unwrap();
    engine.clear_cart(&SessionId::new("never-seen")).await.unwrap();

    assert!(engine.read_cart(&session).await.unwrap().is_empty());
}

// ── E2E: Gateway API (router only, no server) ────────────────────────────

fn gateway_app() -> axum::Router {
    let engine = engine_with(Arc::new(CannedResponder::new()));
    let state = Arc::new(garcon_gateway::GatewayState {
        engine,
        started_at: chrono::Utc::now(),
    });
    garcon_gateway::build_router(state)
}

#[tokio::test]
async fn e2e_gateway_health() {
    use axum::body::Body;
    use axum::http::Request;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    let app = gateway_app();

    let req = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();

    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), 200);

    let body = resp.into_body().collect().await.unwrap().to_bytes();
    let health: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(health["status"], "ok");
    assert_eq!(health["sessions"], 0);
}

#[tokio::test]
async fn e2e_gateway_chat_then_cart_read() {
    use axum::body::Body;
    use axum::http::Request;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    let engine = engine_with(Arc::new(CannedResponder::new()));
    let state = Arc::new(garcon_gateway::GatewayState {
        engine,
        started_at: chrono::Utc::now(),
    });

    let app = garcon_gateway::build_router(state.clone());
    let payload = serde_json::json!({
        "message": "I'd like a Margherita Pizza and a Caesar Salad",
        "session_id": "kiosk-1",
    });
    let req = Request::builder()
        .method("POST")
        .uri("/chat")
        .header("content-type", "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap();

    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), 200);

    let body = resp.into_body().collect().await.unwrap().to_bytes();
    let chat: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(chat["cart_items"].as_array().unwrap().len(), 2);
    assert_eq!(chat["total_amount"], serde_json::json!(21.98));

    let app = garcon_gateway::build_router(state);
    let req = Request::builder()
        .uri("/cart/kiosk-1")
        .body(Body::empty())
        .unwrap();

    let resp = app.oneshot(req).await.unwrap();
    let body = resp.into_body().collect().await.unwrap().to_bytes();
    let cart: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(cart["cart_items"][0]["name"], "Margherita Pizza");
    assert_eq!(cart["total_amount"], serde_json::json!(21.98));
}

#[tokio::test]
async fn e2e_gateway_serves_the_frontend() {
    use axum::body::Body;
    use axum::http::Request;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    let app = gateway_app();

    let req = Request::builder().uri("/").body(Body::empty()).unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), 200);

    let body = resp.into_body().collect().await.unwrap().to_bytes();
    assert!(String::from_utf8_lossy(&body).contains("Garçon"));
}

// ── E2E: Configuration System ────────────────────────────────────────────

#[tokio::test]
async fn e2e_config_defaults_and_roundtrip() {
    let config = garcon_config::AppConfig::default();

    // Verify sensible defaults.
    assert!(!config.responder.model.is_empty());
    assert!(config.responder.temperature >= 0.0);
    assert!(config.responder.temperature <= 2.0);
    assert!(config.gateway.port > 0);
    assert!(!config.gateway.host.is_empty());
    assert!(config.store.max_sessions > 0);

    // Verify TOML roundtrip.
    let toml_str = toml::to_string_pretty(&config).expect("Config should serialize");
    let reparsed: garcon_config::AppConfig =
        toml::from_str(&toml_str).expect("Config should parse back");

    assert_eq!(reparsed.responder.model, config.responder.model);
    assert_eq!(reparsed.gateway.port, config.gateway.port);
}

#[tokio::test]
async fn e2e_configured_menu_drives_matching_end_to_end() {
    let toml_str = r#"
        [[menu]]
        name = "Carnitas Taco"
        price = 3.50
        category = "Tacos"
        description = "Slow-braised pork, onion, cilantro"

        [[menu]]
        name = "Barbacoa Taco"
        price = 3.95
        category = "Tacos"

        [[menu]]
        name = "Horchata"
        price = 2.75
        category = "Drinks"
    "#;
    let config: garcon_config::AppConfig = toml::from_str(toml_str).unwrap();
    let catalog = config.menu_catalog().unwrap();
    assert_eq!(catalog.len(), 3);

    let engine = OrderingEngine::new(
        catalog,
        Arc::new(InMemoryCartStore::new()),
        Arc::new(CannedResponder::new()),
    );
    let session = SessionId::new("taqueria");

    let turn = engine.submit("add a taco", &session).await.unwrap();
    assert!(turn.reply.contains("Carnitas Taco, Barbacoa Taco"));
    assert_eq!(turn.cart.total(), dec!(7.45));

    let menu = engine.submit("menu", &session).await.unwrap();
    assert!(menu.reply.contains("**Drinks:**"));
    assert!(!menu.reply.contains("Margherita"), "built-ins are replaced");
}
