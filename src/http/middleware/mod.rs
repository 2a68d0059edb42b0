//! Request/response decoration applied around the core handlers.

pub mod cookies;
pub mod cors;

pub use cookies::{attach_cookies, CookieMap};
pub use cors::cors_layer;
