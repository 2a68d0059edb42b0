//! OS signal handling.

use std::sync::Arc;

use crate::lifecycle::Shutdown;

/// Spawn a task that triggers graceful shutdown on ctrl-c.
pub fn trigger_on_ctrl_c(shutdown: Arc<Shutdown>) {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Shutdown signal received");
            shutdown.trigger();
        }
    });
}
