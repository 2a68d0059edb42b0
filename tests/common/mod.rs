//! Shared utilities for integration testing.

use echobin::config::ServiceConfig;
use echobin::http::HttpServer;
use echobin::lifecycle::Shutdown;

/// Start the service on an OS-assigned port and return its base URL.
///
/// Dropping the returned `Shutdown` does not stop the server; trigger it
/// explicitly when a test cares about teardown ordering.
pub async fn start_service() -> (String, Shutdown) {
    let server = HttpServer::new(ServiceConfig::default());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let rx = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, rx).await;
    });

    (format!("http://{addr}"), shutdown)
}

/// Client that reports redirects instead of following them.
#[allow(dead_code)]
pub fn manual_redirect_client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .no_proxy()
        .build()
        .unwrap()
}
