//! Cookie lifecycle endpoints.
//!
//! Mutations answer with a redirect to the listing endpoint so a following
//! client immediately observes the effect.

use axum::extract::{Path, RawQuery};
use axum::http::{header, HeaderValue};
use axum::response::Response;
use axum::Extension;
use serde_json::json;
use url::form_urlencoded;

use crate::http::middleware::CookieMap;
use crate::simulate::cookies::CookieDirective;
use crate::simulate::redirect::DEFAULT_REDIRECT_STATUS;

use super::behavior::redirect_response;
use super::render_json;

const LISTING: &str = "/cookies";

/// `/cookies`: echo the middleware-parsed cookie map.
pub async fn list(Extension(cookies): Extension<CookieMap>) -> Response {
    render_json(&json!({ "cookies": cookies.0 }))
}

/// `/cookies/set/{name}/{value}`: one session cookie from the path.
pub async fn set_path(Path((name, value)): Path<(String, String)>) -> Response {
    with_directives(std::iter::once(CookieDirective::set(name, value)))
}

/// `/cookies/set`: one session cookie per query pair; keys may repeat.
pub async fn set_query(RawQuery(query): RawQuery) -> Response {
    let directives = raw_pairs(query.as_deref())
        .into_iter()
        .map(|(name, value)| CookieDirective::set(name, value));
    with_directives(directives)
}

/// `/cookies/delete`: expire each named cookie; query values are ignored.
pub async fn delete(RawQuery(query): RawQuery) -> Response {
    let directives = raw_pairs(query.as_deref())
        .into_iter()
        .map(|(name, _)| CookieDirective::delete(name));
    with_directives(directives)
}

fn raw_pairs(query: Option<&str>) -> Vec<(String, String)> {
    form_urlencoded::parse(query.unwrap_or("").as_bytes())
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect()
}

fn with_directives(directives: impl Iterator<Item = CookieDirective>) -> Response {
    let mut response = redirect_response(LISTING, DEFAULT_REDIRECT_STATUS);
    for directive in directives {
        match HeaderValue::try_from(directive.render()) {
            Ok(value) => {
                response.headers_mut().append(header::SET_COOKIE, value);
            }
            Err(_) => {
                tracing::debug!(cookie = %directive.name, "skipping unrepresentable cookie");
            }
        }
    }
    response
}
