//! Static fixture endpoints.

use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use serde_json::json;

use crate::assets;

use super::render_json;

pub async fn index() -> Html<&'static str> {
    Html(assets::INDEX_HTML)
}

pub async fn html() -> Html<&'static str> {
    Html(assets::MOBY_HTML)
}

pub async fn forms_post() -> Html<&'static str> {
    Html(assets::FORMS_POST_HTML)
}

// Served as HTML so browsers render the demo glyphs inline.
pub async fn utf8_demo() -> Html<&'static str> {
    Html(assets::UTF8_DEMO)
}

pub async fn robots() -> &'static str {
    assets::ROBOTS_TXT
}

pub async fn deny() -> &'static str {
    assets::DENY_TEXT
}

pub async fn xml() -> Response {
    (
        [(header::CONTENT_TYPE, "application/xml")],
        assets::SAMPLE_XML,
    )
        .into_response()
}

/// `/json`: a fixed sample document.
pub async fn json_document() -> Response {
    render_json(&json!({
        "slideshow": {
            "title": "Sample Slide Show",
            "date": "date of publication",
            "author": "Yours Truly",
            "slides": [
                { "type": "all", "title": "Wake up to WonderWidgets!" },
                {
                    "type": "all",
                    "title": "Overview",
                    "items": [
                        "Why <em>WonderWidgets</em> are great",
                        "Who <em>buys</em> WonderWidgets"
                    ]
                }
            ]
        }
    }))
}

/// Terminal for unmatched routes.
pub async fn not_found() -> Response {
    (StatusCode::NOT_FOUND, "Not Found.").into_response()
}
