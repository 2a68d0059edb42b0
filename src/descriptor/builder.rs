//! Request normalization.
//!
//! # Responsibilities
//! - Read the request body once, branching on Content-Type
//! - Parse JSON, urlencoded and multipart payloads without ever failing
//! - Capture URL, query args, headers, client origin and method
//!
//! # Design Decisions
//! - Parse failures are swallowed; the descriptor always completes
//! - Repeated query keys keep the last value at the first-seen position
//! - The forwarded client address is echoed verbatim, never re-derived

use axum::extract::{FromRequest, Multipart, Request};
use axum::http::{header, HeaderMap};
use indexmap::IndexMap;
use serde::Serialize;
use url::form_urlencoded;

/// Canonical view of an inbound request, used for echoing.
///
/// Declaration order is the serialization order of the echoed payload.
#[derive(Debug, Default, Serialize)]
pub struct RequestDescriptor {
    pub args: IndexMap<String, String>,
    pub data: String,
    pub files: IndexMap<String, String>,
    pub form: IndexMap<String, String>,
    pub headers: IndexMap<String, String>,
    pub json: Option<serde_json::Value>,
    pub method: String,
    pub origin: Option<String>,
    pub url: String,
}

/// Body parse strategy selected from the Content-Type header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseStrategy {
    /// Body is kept as text and additionally offered to the JSON parser.
    JsonLike,
    /// Body is read as a structured field set (multipart or urlencoded).
    StructuredForm,
    /// Unrecognized or missing Content-Type: the structured read is
    /// attempted and comes back empty.
    UnknownDefault,
}

/// Map a Content-Type header value to a parse strategy.
///
/// Parameters (charset, boundary) are ignored for the decision.
pub fn parse_strategy(content_type: Option<&str>) -> ParseStrategy {
    let Some(value) = content_type else {
        return ParseStrategy::UnknownDefault;
    };
    match value.split(';').next().unwrap_or("").trim() {
        "application/json" | "text/plain" => ParseStrategy::JsonLike,
        "multipart/form-data" | "application/x-www-form-urlencoded" => {
            ParseStrategy::StructuredForm
        }
        _ => ParseStrategy::UnknownDefault,
    }
}

/// Build a descriptor from the request, consuming its body.
///
/// `body_limit` caps how many bytes are buffered; an over-limit body reads
/// as absent rather than failing the build.
pub async fn build(req: Request, body_limit: usize) -> RequestDescriptor {
    let mut descriptor = RequestDescriptor {
        args: parse_pairs(req.uri().query().unwrap_or("").as_bytes()),
        headers: header_map(req.headers()),
        method: req.method().as_str().to_string(),
        origin: client_origin(req.headers()),
        url: request_url(&req),
        ..Default::default()
    };

    let content_type = req
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned());

    match parse_strategy(content_type.as_deref()) {
        ParseStrategy::JsonLike => {
            if let Ok(bytes) = axum::body::to_bytes(req.into_body(), body_limit).await {
                descriptor.data = String::from_utf8_lossy(&bytes).into_owned();
                descriptor.json = serde_json::from_slice(&bytes).ok();
            }
        }
        ParseStrategy::StructuredForm => {
            let is_multipart = content_type
                .as_deref()
                .is_some_and(|v| v.trim_start().starts_with("multipart/form-data"));
            if is_multipart {
                read_multipart(req, &mut descriptor).await;
            } else if let Ok(bytes) = axum::body::to_bytes(req.into_body(), body_limit).await {
                descriptor.form = parse_pairs(&bytes);
            }
        }
        ParseStrategy::UnknownDefault => {
            // Drain the body so the connection can be reused; nothing in
            // the descriptor is populated from it.
            let _ = axum::body::to_bytes(req.into_body(), body_limit).await;
        }
    }

    descriptor
}

/// Decode `key=value` pairs; last value wins, keys keep first-seen order.
pub fn parse_pairs(input: &[u8]) -> IndexMap<String, String> {
    let mut out = IndexMap::new();
    for (key, value) in form_urlencoded::parse(input) {
        out.insert(key.into_owned(), value.into_owned());
    }
    out
}

/// All request headers as an insertion-ordered map with lowercase names.
pub fn header_map(headers: &HeaderMap) -> IndexMap<String, String> {
    let mut out = IndexMap::new();
    for (name, value) in headers {
        out.insert(
            name.as_str().to_string(),
            String::from_utf8_lossy(value.as_bytes()).into_owned(),
        );
    }
    out
}

/// Forwarded client address, or None when the hosting layer sent none.
pub fn client_origin(headers: &HeaderMap) -> Option<String> {
    headers
        .get("x-forwarded-for")
        .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned())
}

fn request_url(req: &Request) -> String {
    let host = req
        .headers()
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("localhost");
    let path = req
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or("/");
    format!("http://{host}{path}")
}

async fn read_multipart(req: Request, descriptor: &mut RequestDescriptor) {
    let Ok(mut multipart) = Multipart::from_request(req, &()).await else {
        return;
    };
    // A failed field read abandons the rest; everything parsed so far stays.
    while let Ok(Some(field)) = multipart.next_field().await {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };
        let is_file = field.file_name().is_some();
        match field.bytes().await {
            Ok(bytes) => {
                let text = String::from_utf8_lossy(&bytes).into_owned();
                if is_file {
                    descriptor.files.insert(name, text);
                } else {
                    descriptor.form.insert(name, text);
                }
            }
            Err(_) => return,
        }
    }
}
