//! Course catalog HTTP service.
//!
//! A small CRUD resource server built with Tokio and Axum.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌────────────────────────────────────────────┐
//!                    │              COURSE SERVICE                 │
//!                    │                                             │
//!   Client Request   │  ┌─────────┐   ┌──────────┐   ┌─────────┐  │
//!   ─────────────────┼─▶│  axum   │──▶│ handlers │──▶│  store  │  │
//!                    │  │ router  │   │  (CRUD)  │   │ (Vec in │  │
//!                    │  └─────────┘   └────┬─────┘   │ memory) │  │
//!                    │                     │         └─────────┘  │
//!   Client Response  │                     ▼                      │
//!   ◀────────────────┼── status + JSON body (Course or error)     │
//!                    │                                             │
//!                    │  ┌───────────────────────────────────────┐ │
//!                    │  │         Cross-Cutting Concerns         │ │
//!                    │  │  config │ tracing │ request ID │ limits│ │
//!                    │  └───────────────────────────────────────┘ │
//!                    └────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod course;
pub mod http;

use std::path::Path;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::loader::{apply_env_overrides, load_config};
use crate::config::ServerConfig;
use crate::http::HttpServer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration: optional TOML file, then environment overrides
    let config = match std::env::var_os("COURSE_SERVICE_CONFIG") {
        Some(path) => load_config(Path::new(&path))?,
        None => ServerConfig::default(),
    };
    let config = apply_env_overrides(config)?;

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.observability.log_level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("course-service v0.1.0 starting");

    tracing::info!(
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        max_body_size = config.limits.max_body_size,
        "Configuration loaded"
    );

    // Bind TCP listener
    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    // Create and run HTTP server
    let server = HttpServer::new(config);
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
