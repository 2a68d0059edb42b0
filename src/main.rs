//! echobin: an HTTP request & response introspection service.
//!
//! A predictable server for exercising HTTP client behaviour, built with
//! Tokio and Axum.
//!
//! # Architecture Overview
//!
//! ```text
//!                      ┌───────────────────────────────────────────────┐
//!                      │              INTROSPECTION SERVICE             │
//!                      │                                               │
//!     Client Request   │  ┌─────────┐   ┌────────────┐   ┌──────────┐  │
//!     ─────────────────┼─▶│  http   │──▶│ descriptor │──▶│ project  │  │
//!                      │  │ server  │   │  builder   │   │  fields  │  │
//!                      │  └────┬────┘   └────────────┘   └──────────┘  │
//!                      │       │                                       │
//!                      │       ▼                                       │
//!                      │  ┌──────────────────────────────────────────┐ │
//!                      │  │                simulate                   │ │
//!                      │  │  status table · redirect chains · header  │ │
//!                      │  │  echo · negotiation · cookies · encoding  │ │
//!                      │  └──────────────────────────────────────────┘ │
//!                      │       │                                       │
//!     Client Response  │       ▼              ┌─────────┐              │
//!     ◀────────────────┼── handlers ◀─────────│ assets  │              │
//!                      │   (+ CORS layer)     │fixtures │              │
//!                      │                      └─────────┘              │
//!                      └───────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;

use echobin::config::{load_config, ServiceConfig};
use echobin::http::HttpServer;
use echobin::lifecycle::{signals, Shutdown};
use echobin::observability::logging;

#[derive(Parser)]
#[command(name = "echobin")]
#[command(about = "HTTP request & response introspection service", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ServiceConfig::default(),
    };

    logging::init(&format!(
        "echobin={},tower_http=debug",
        config.observability.log_level
    ));

    tracing::info!("echobin v0.1.0 starting");
    tracing::info!(
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        max_body_size = config.limits.max_body_size,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        if let Ok(addr) = config.observability.metrics_address.parse() {
            echobin::observability::metrics::init_metrics(addr);
        } else {
            tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            );
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    let shutdown = Arc::new(Shutdown::new());
    signals::trigger_on_ctrl_c(shutdown.clone());

    let server = HttpServer::new(config);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
