//! Image retrieval, negotiated and direct.

use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::assets::{self, ImageKind};
use crate::simulate::negotiate::negotiate;

use super::behavior::render_simulated;

/// `/image`: variant chosen from the Accept header, 406 when nothing fits.
pub async fn image_negotiated(headers: HeaderMap) -> Response {
    let accept = headers.get(header::ACCEPT).and_then(|v| v.to_str().ok());
    match negotiate(accept) {
        Some(kind) => image_response(kind),
        None => render_simulated(StatusCode::NOT_ACCEPTABLE),
    }
}

pub async fn image_png() -> Response {
    image_response(ImageKind::Png)
}

pub async fn image_jpeg() -> Response {
    image_response(ImageKind::Jpeg)
}

pub async fn image_webp() -> Response {
    image_response(ImageKind::Webp)
}

pub async fn image_svg() -> Response {
    image_response(ImageKind::Svg)
}

fn image_response(kind: ImageKind) -> Response {
    let (bytes, media_type) = assets::image(kind);
    ([(header::CONTENT_TYPE, media_type)], bytes).into_response()
}
