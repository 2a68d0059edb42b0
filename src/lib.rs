//! HTTP Request & Response Introspection Service Library

pub mod assets;
pub mod config;
pub mod descriptor;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod simulate;

pub use config::schema::ServiceConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
