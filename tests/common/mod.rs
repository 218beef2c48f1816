//! Shared utilities for integration testing.

use std::net::SocketAddr;

use serde_json::{json, Value};
use tokio::net::TcpListener;

use course_service::config::ServerConfig;
use course_service::http::HttpServer;

/// Spawn the service on an ephemeral local port and return its address.
///
/// The server task is dropped with the test runtime, so no explicit
/// shutdown is needed.
pub async fn spawn_server() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let server = HttpServer::new(ServerConfig::default());
    tokio::spawn(async move {
        server
            .run_with_shutdown(listener, std::future::pending())
            .await
            .unwrap();
    });

    addr
}

/// POST a course and return the created record as JSON.
#[allow(dead_code)]
pub async fn create_course(client: &reqwest::Client, addr: SocketAddr, name: &str) -> Value {
    let res = client
        .post(format!("http://{}/api/courses", addr))
        .json(&json!({ "name": name }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 201);
    res.json().await.unwrap()
}
