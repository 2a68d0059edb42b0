//! HTTP server setup.
//!
//! # Responsibilities
//! - Create the axum Router with every endpoint
//! - Wire up middleware (tracing, CORS, limits, cookies, metrics)
//! - Bind the server to a listener and serve until shutdown
//!
//! # Design Decisions
//! - Handlers produce the response; CORS decoration stays an outer layer
//! - Config is immutable and shared through the router state
//! - Graceful shutdown is driven by the lifecycle broadcast

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::body::Body;
use axum::extract::MatchedPath;
use axum::http::Request;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::{any, delete, get, patch, post, put};
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServiceConfig;
use crate::http::handlers::{behavior, content, cookies, echo, fixtures};
use crate::http::middleware::{attach_cookies, cors_layer};
use crate::observability::metrics;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServiceConfig>,
}

/// HTTP server for the introspection service.
pub struct HttpServer {
    router: Router,
    config: ServiceConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ServiceConfig) -> Self {
        let state = AppState {
            config: Arc::new(config.clone()),
        };
        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the axum router with all endpoints and middleware layers.
    fn build_router(config: &ServiceConfig, state: AppState) -> Router {
        Router::new()
            .route("/", get(fixtures::index))
            .route("/legacy", get(fixtures::index))
            .route("/html", get(fixtures::html))
            .route("/forms/post", get(fixtures::forms_post))
            .route("/encoding/utf8", get(fixtures::utf8_demo))
            .route("/robots.txt", get(fixtures::robots))
            .route("/deny", get(fixtures::deny))
            .route("/xml", get(fixtures::xml))
            .route("/json", get(fixtures::json_document))
            .route("/ip", get(echo::ip))
            .route("/uuid", get(echo::uuid))
            .route("/headers", get(echo::headers))
            .route("/user-agent", get(echo::user_agent))
            .route("/get", get(echo::read_echo))
            .route("/post", post(echo::write_echo))
            .route("/put", put(echo::write_echo))
            .route("/patch", patch(echo::write_echo))
            .route("/delete", delete(echo::write_echo))
            .route("/anything", any(echo::anything))
            .route("/anything/{*rest}", any(echo::anything))
            .route("/gzip", get(echo::gzip))
            .route("/deflate", get(echo::deflate))
            .route("/brotli", get(echo::brotli))
            .route("/status/{code}", any(behavior::status))
            .route("/base64/{value}", get(behavior::base64_decode))
            .route("/response-headers", any(behavior::response_headers))
            .route("/redirect/{n}", get(behavior::redirect_chain))
            .route("/relative-redirect/{n}", get(behavior::relative_redirect_chain))
            .route("/redirect-to", any(behavior::redirect_to))
            .route("/cookies", get(cookies::list))
            .route("/cookies/set/{name}/{value}", get(cookies::set_path))
            .route("/cookies/set", get(cookies::set_query))
            .route("/cookies/delete", get(cookies::delete))
            .route("/image", get(content::image_negotiated))
            .route("/image/png", get(content::image_png))
            .route("/image/jpeg", get(content::image_jpeg))
            .route("/image/webp", get(content::image_webp))
            .route("/image/svg", get(content::image_svg))
            .fallback(fixtures::not_found)
            .layer(middleware::from_fn(attach_cookies))
            .layer(middleware::from_fn(track_metrics))
            .layer(RequestBodyLimitLayer::new(config.limits.max_body_size))
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            .layer(cors_layer())
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }
}

/// Record request count and latency per route template.
async fn track_metrics(req: Request<Body>, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().to_string();
    let route = req
        .extensions()
        .get::<MatchedPath>()
        .map(|path| path.as_str().to_string())
        .unwrap_or_else(|| "unmatched".to_string());

    let response = next.run(req).await;

    metrics::record_request(&method, response.status().as_u16(), &route, start);
    response
}
