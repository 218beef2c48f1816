//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware, shared state)
//!     → request.rs (attach request ID)
//!     → handlers.rs (CRUD operations against the store)
//!     → error.rs (map failures to status + JSON error body)
//!     → Send to client
//! ```

pub mod error;
pub mod handlers;
pub mod request;
pub mod server;

pub use error::ApiError;
pub use request::{RequestIdMaker, X_REQUEST_ID};
pub use server::{AppState, HttpServer};
