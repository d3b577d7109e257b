//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum app with a single dispatching fallback
//! - Wire up middleware (timeout, request ID, tracing)
//! - Translate HTTP requests into router requests
//! - Map dispatch outcomes to status codes
//! - Observability (metrics, correlation IDs)

use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::{
    body::Body,
    extract::State,
    http::{HeaderName, Request},
    response::Response,
};
use tokio::net::TcpListener;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::AppConfig;
use crate::http::request::inbound_from_http;
use crate::http::response::into_http_response;
use crate::observability::metrics;
use crate::routing::{Dispatch, Router};

/// Application state injected into the dispatch handler.
#[derive(Clone)]
pub struct AppState {
    pub router: Arc<Router>,
    pub credential_header: Option<HeaderName>,
}

/// HTTP front end for a route table.
pub struct HttpServer {
    app: axum::Router,
    config: AppConfig,
}

impl HttpServer {
    /// Create a new HTTP server serving `router` with the given configuration.
    pub fn new(config: AppConfig, router: Router) -> Self {
        // Validation already rejected bad names; a disabled identity section never reads the header.
        let credential_header = if config.identity.enabled {
            HeaderName::from_bytes(config.identity.header.as_bytes()).ok()
        } else {
            None
        };

        let state = AppState {
            router: Arc::new(router),
            credential_header,
        };

        let app = Self::build_app(&config, state);
        Self { app, config }
    }

    /// Build the Axum app with all middleware layers.
    #[allow(deprecated)]
    fn build_app(config: &AppConfig, state: AppState) -> axum::Router {
        axum::Router::new()
            .fallback(dispatch_handler)
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TraceLayer::new_for_http())
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
    }

    /// The Axum app, for serving on a custom transport or testing.
    pub fn into_app(self) -> axum::Router {
        self.app
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Serve until `shutdown` resolves.
    pub async fn run<F>(self, listener: TcpListener, shutdown: F) -> Result<(), std::io::Error>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.app)
            .with_graceful_shutdown(shutdown)
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Fallback handler: every request goes through the route table.
async fn dispatch_handler(State(state): State<AppState>, request: Request<Body>) -> Response {
    let start_time = Instant::now();
    let request_id = request
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
        .to_string();

    let inbound = inbound_from_http(&request, state.credential_header.as_ref());
    let dispatch = state.router.dispatch(&inbound);
    metrics::record_dispatch(dispatch.outcome(), start_time);

    match &dispatch {
        Dispatch::Handled(response) => {
            tracing::debug!(request_id = %request_id, path = %inbound.path, status = %response.status(), "Request handled");
        }
        Dispatch::NotFound => {
            tracing::warn!(request_id = %request_id, path = %inbound.path, "No route matched");
        }
        Dispatch::InternalError(e) => {
            tracing::error!(request_id = %request_id, path = %inbound.path, error = %e, "Request failed");
        }
    }

    into_http_response(dispatch)
}

/// Wait for shutdown signal (Ctrl+C).
pub async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
