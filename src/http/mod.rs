//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (axum setup, middleware wiring)
//!     → middleware/ (CORS decoration, cookie parsing)
//!     → handlers/ (extract, delegate to descriptor/simulate, respond)
//!     → Send to client
//! ```

pub mod handlers;
pub mod middleware;
pub mod server;

pub use server::{AppState, HttpServer};
