//! CORS response decoration.
//!
//! Applied as an outer layer after the core produces its response; the
//! handlers stay ignorant of CORS entirely.

use std::time::Duration;

use tower_http::cors::{Any, CorsLayer};

/// Permissive CORS for a testing service: any origin, method and header.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600))
}
