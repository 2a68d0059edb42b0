//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events)
//!     → metrics.rs (counters, histograms)
//!
//! Consumers:
//!     → Log aggregation (stdout, file, remote)
//!     → Metrics endpoint (Prometheus scrape)
//! ```
//!
//! # Design Decisions
//! - Structured logging; swallowed parse failures never log above debug
//! - Metrics are cheap (atomic increments) and keyed by route template
//! - The exporter is optional and off by default

pub mod logging;
pub mod metrics;
