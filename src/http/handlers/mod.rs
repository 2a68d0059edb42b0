//! Endpoint handlers.
//!
//! Thin axum adapters over the descriptor and simulation subsystems: each
//! handler extracts what it needs, delegates, and shapes the `(status,
//! headers, body)` triple. Policy lives in the subsystems, not here.

pub mod behavior;
pub mod content;
pub mod cookies;
pub mod echo;
pub mod fixtures;

use axum::http::header;
use axum::response::{IntoResponse, Response};

/// Pretty-printed JSON response, the shape every echo endpoint shares.
pub(crate) fn render_json(value: &serde_json::Value) -> Response {
    let body = serde_json::to_string_pretty(value).unwrap_or_default();
    (
        [(header::CONTENT_TYPE, "application/json")],
        body,
    )
        .into_response()
}
