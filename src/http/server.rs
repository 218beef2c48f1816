//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router with all CRUD handlers
//! - Wire up middleware (timeout, body limit, request ID, tracing)
//! - Own the shared application state
//! - Serve connections with graceful shutdown

use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::course::CourseStore;
use crate::http::handlers::{
    create_course, delete_course, get_course, list_courses, route_not_found, update_course,
};
use crate::http::request::RequestIdMaker;

/// Application state injected into handlers.
#[derive(Clone, Default)]
pub struct AppState {
    store: Arc<Mutex<CourseStore>>,
}

impl AppState {
    /// Create state with an empty course store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Lock the course store for the duration of one operation.
    ///
    /// Handlers hold the guard across their whole read-modify-write and
    /// never await while holding it, so id assignment and lookups cannot
    /// interleave across requests.
    pub fn store(&self) -> MutexGuard<'_, CourseStore> {
        // The records stay usable even if a previous handler panicked
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// HTTP server for the course API.
pub struct HttpServer {
    router: Router,
    config: ServerConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ServerConfig) -> Self {
        let state = AppState::new();
        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &ServerConfig, state: AppState) -> Router {
        Router::new()
            .route("/api/courses", get(list_courses).post(create_course))
            .route(
                "/api/courses/{id}",
                get(get_course).put(update_course).delete(delete_course),
            )
            .fallback(route_not_found)
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            .layer(RequestBodyLimitLayer::new(config.limits.max_body_size))
            // Later layers wrap earlier ones: the request ID is set
            // outermost so it is present for tracing and echoed back by
            // the propagate layer on the way out
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TraceLayer::new_for_http())
            .layer(SetRequestIdLayer::x_request_id(RequestIdMaker))
    }

    /// Run the server until Ctrl+C, accepting connections on the listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        self.run_with_shutdown(listener, shutdown_signal()).await
    }

    /// Run the server until the given future resolves.
    pub async fn run_with_shutdown<F>(
        self,
        listener: TcpListener,
        signal: F,
    ) -> Result<(), std::io::Error>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(signal)
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received");
}
