//! Request introspection subsystem.
//!
//! # Data Flow
//! ```text
//! Inbound request
//!     → builder.rs (normalize into a RequestDescriptor)
//!     → project.rs (select the field subset an endpoint echoes)
//!     → serialized JSON payload
//! ```
//!
//! # Design Decisions
//! - The descriptor is built fresh per request and read-only afterwards
//! - Body parsing never fails; malformed payloads leave fields empty
//! - Maps keep insertion order so echoes mirror what the client sent

pub mod builder;
pub mod project;

pub use builder::{build, parse_strategy, ParseStrategy, RequestDescriptor};
pub use project::{project, Field, ALL_FIELDS, READ_FIELDS, TRANSFER_FIELDS, WRITE_FIELDS};
