//! Embedded single-page frontend.
//!
//! The chat page ships inside the binary: `include_str!` pulls the files
//! from `frontend/` in at compile time, so `garcon serve` needs no asset
//! directory next to the executable. Assets hang off one `/static/{asset}`
//! route keyed by file name; anything unbundled is a 404.

use axum::Router;
use axum::extract::Path;
use axum::http::{StatusCode, header};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;

const INDEX_HTML: &str = include_str!("../../../frontend/index.html");
const STYLE_CSS: &str = include_str!("../../../frontend/style.css");
const APP_JS: &str = include_str!("../../../frontend/app.js");

/// Routes for the chat page and its assets.
pub fn frontend_router() -> Router {
    Router::new()
        .route("/", get(index))
        .route("/static/{asset}", get(asset))
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn asset(Path(name): Path<String>) -> Response {
    let (content_type, body) = match name.as_str() {
        "style.css" => ("text/css; charset=utf-8", STYLE_CSS),
        "app.js" => ("application/javascript; charset=utf-8", APP_JS),
        _ => return StatusCode::NOT_FOUND.into_response(),
    };
    ([(header::CONTENT_TYPE, content_type)], body).into_response()
}
