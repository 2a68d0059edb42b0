//! Request-property echo endpoints.

use axum::extract::{Request, State};
use axum::http::{header, HeaderMap};
use axum::response::{IntoResponse, Response};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::descriptor::{self, ALL_FIELDS, READ_FIELDS, TRANSFER_FIELDS, WRITE_FIELDS};
use crate::http::server::AppState;
use crate::simulate::encoding::{compress, Compressed};

use super::render_json;

/// `/get`: the read-style projection (no body fields).
pub async fn read_echo(State(state): State<AppState>, req: Request) -> Response {
    project_echo(state, req, READ_FIELDS).await
}

/// `/post`, `/put`, `/patch`, `/delete`: body fields included.
pub async fn write_echo(State(state): State<AppState>, req: Request) -> Response {
    project_echo(state, req, WRITE_FIELDS).await
}

/// `/anything`: every descriptor field, any method.
pub async fn anything(State(state): State<AppState>, req: Request) -> Response {
    project_echo(state, req, ALL_FIELDS).await
}

async fn project_echo(state: AppState, req: Request, fields: &[descriptor::Field]) -> Response {
    let built = descriptor::build(req, state.config.limits.max_body_size).await;
    render_json(&descriptor::project(&built, fields))
}

/// `/ip`: the forwarded client address alone.
pub async fn ip(headers: HeaderMap) -> Response {
    render_json(&json!({ "origin": descriptor::builder::client_origin(&headers) }))
}

/// `/uuid`: a fresh v4 UUID.
pub async fn uuid() -> Response {
    render_json(&json!({ "uuid": Uuid::new_v4() }))
}

/// `/headers`: the full request header map.
pub async fn headers(headers: HeaderMap) -> Response {
    render_json(&json!({ "headers": descriptor::builder::header_map(&headers) }))
}

/// `/user-agent`: one header, echoed under its own name.
pub async fn user_agent(headers: HeaderMap) -> Response {
    let agent = headers
        .get(header::USER_AGENT)
        .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned());
    render_json(&json!({ "user-agent": agent }))
}

pub async fn gzip(State(state): State<AppState>, req: Request) -> Response {
    compressed_echo(state, req, Compressed::Gzip).await
}

pub async fn deflate(State(state): State<AppState>, req: Request) -> Response {
    compressed_echo(state, req, Compressed::Deflate).await
}

pub async fn brotli(State(state): State<AppState>, req: Request) -> Response {
    compressed_echo(state, req, Compressed::Brotli).await
}

/// Compressed echo: the transfer projection plus a marker field, compressed
/// with the endpoint's coding and tagged with Content-Encoding.
async fn compressed_echo(state: AppState, req: Request, coding: Compressed) -> Response {
    let built = descriptor::build(req, state.config.limits.max_body_size).await;
    let mut payload = descriptor::project(&built, TRANSFER_FIELDS);
    if let Value::Object(entries) = &mut payload {
        entries.insert(coding.marker().to_string(), Value::Bool(true));
    }
    let body = serde_json::to_string_pretty(&payload).unwrap_or_default();
    (
        [
            (header::CONTENT_TYPE, "application/json"),
            (header::CONTENT_ENCODING, coding.content_encoding()),
        ],
        compress(coding, body.as_bytes()),
    )
        .into_response()
}
