//! Cookie header parsing middleware.
//!
//! Parses the Cookie request header into an order-preserving map and
//! attaches it as a request extension, so the listing handler never touches
//! raw header syntax.

use axum::body::Body;
use axum::http::{header, Request};
use axum::middleware::Next;
use axum::response::Response;
use indexmap::IndexMap;
use serde::Serialize;

/// Name→value view of the request's Cookie header.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CookieMap(pub IndexMap<String, String>);

/// Attach the parsed cookie map to the request.
pub async fn attach_cookies(mut req: Request<Body>, next: Next) -> Response {
    let cookies = req
        .headers()
        .get(header::COOKIE)
        .map(|v| parse_cookie_header(&String::from_utf8_lossy(v.as_bytes())))
        .unwrap_or_default();
    req.extensions_mut().insert(CookieMap(cookies));
    next.run(req).await
}

fn parse_cookie_header(raw: &str) -> IndexMap<String, String> {
    let mut out = IndexMap::new();
    for pair in raw.split(';') {
        let pair = pair.trim();
        if pair.is_empty() {
            continue;
        }
        match pair.split_once('=') {
            Some((name, value)) => {
                out.insert(name.trim().to_string(), value.trim().to_string());
            }
            None => {
                out.insert(pair.to_string(), String::new());
            }
        }
    }
    out
}
