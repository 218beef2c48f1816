//! API error boundary.
//!
//! # Responsibilities
//! - Collect every failure a handler can produce into one type
//! - Map each failure to an HTTP status and JSON error body exactly once
//!
//! # Design Decisions
//! - No error propagates past this boundary; handlers return `ApiError`
//!   and axum renders it via `IntoResponse`

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::course::ValidationError;

/// Errors surfaced to HTTP clients.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Payload failed schema validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No course with the requested id.
    #[error("Course not found")]
    CourseNotFound,

    /// The request matched no route.
    #[error("Route not found")]
    RouteNotFound,
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::CourseNotFound | ApiError::RouteNotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}
