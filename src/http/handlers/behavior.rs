//! Simulated HTTP behaviors: status codes, redirects, header echo, base64.

use axum::body::Body;
use axum::extract::{Path, Query, RawQuery};
use axum::http::{header, HeaderName, HeaderValue, Response as HttpResponse, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use url::form_urlencoded;

use crate::simulate::encoding::decode_base64;
use crate::simulate::redirect::{absolute_hop, redirect_status, relative_hop, DEFAULT_REDIRECT_STATUS};
use crate::simulate::response_headers::compose;
use crate::simulate::status::simulate;

/// `/status/{code}`: canned behaviour per the simulation table.
///
/// The path segment must parse to a status the HTTP layer can represent
/// (100-999); anything else is a plain 400 before the simulator runs.
pub async fn status(Path(code): Path<String>) -> Response {
    let parsed = code.parse::<u16>().ok().and_then(|c| StatusCode::from_u16(c).ok());
    let Some(status) = parsed else {
        return (StatusCode::BAD_REQUEST, "Invalid status code").into_response();
    };
    render_simulated(status)
}

/// Build the response for a simulated status code.
pub(crate) fn render_simulated(status: StatusCode) -> Response {
    let (body, headers, _) = simulate(status.as_u16());
    let mut builder = HttpResponse::builder().status(status);
    for (name, value) in headers {
        builder = builder.header(*name, *value);
    }
    builder
        .body(Body::from(body))
        .unwrap_or_else(|_| status.into_response())
}

/// `/base64/{value}`: decoded text, or the canned hint on bad input.
pub async fn base64_decode(Path(value): Path<String>) -> String {
    decode_base64(&value)
}

/// `/response-headers`: echo the requested headers as both wire headers and
/// body, with the self-referential Content-Length resolved.
pub async fn response_headers(RawQuery(query): RawQuery) -> Response {
    let pairs = form_urlencoded::parse(query.as_deref().unwrap_or("").as_bytes())
        .map(|(k, v)| (k.into_owned(), v.into_owned()));
    let (body, headers) = compose(pairs);

    let mut builder = HttpResponse::builder().status(StatusCode::OK);
    for (name, value) in &headers {
        match (
            HeaderName::try_from(name.as_str()),
            HeaderValue::try_from(value.as_str()),
        ) {
            (Ok(name), Ok(value)) => builder = builder.header(name, value),
            // Still echoed in the body, just not representable on the wire.
            _ => tracing::debug!(header = %name, "skipping unrepresentable response header"),
        }
    }
    builder
        .body(Body::from(body))
        .unwrap_or_else(|_| StatusCode::OK.into_response())
}

/// `/redirect/{n}`: absolute-chain hop.
pub async fn redirect_chain(Path(n): Path<i64>) -> Response {
    redirect_response(&absolute_hop(n), DEFAULT_REDIRECT_STATUS)
}

/// `/relative-redirect/{n}`: relative-chain hop.
pub async fn relative_redirect_chain(Path(n): Path<i64>) -> Response {
    redirect_response(&relative_hop(n), DEFAULT_REDIRECT_STATUS)
}

#[derive(Debug, Deserialize)]
pub struct RedirectTo {
    url: Option<String>,
    status_code: Option<String>,
}

/// `/redirect-to`: explicit target, optional status in the 3xx range.
pub async fn redirect_to(Query(params): Query<RedirectTo>) -> Response {
    let status = redirect_status(params.status_code.as_deref());
    redirect_response(params.url.as_deref().unwrap_or("/"), status)
}

/// Empty-bodied redirect with a Location header.
pub(crate) fn redirect_response(location: &str, status: u16) -> Response {
    let status = StatusCode::from_u16(status).unwrap_or(StatusCode::FOUND);
    let location =
        HeaderValue::try_from(location).unwrap_or_else(|_| HeaderValue::from_static("/"));
    (status, [(header::LOCATION, location)]).into_response()
}
