//! CRUD request handlers for the course collection.
//!
//! Each handler is a single stateless transaction: lock the store, read or
//! mutate, respond. The store guard is never held across an await point.

use axum::extract::{Path, State};
use axum::http::{StatusCode, Uri};
use axum::Json;

use crate::course::{Course, CoursePayload};
use crate::http::error::ApiError;
use crate::http::server::AppState;

/// GET /api/courses — all courses, insertion order.
pub async fn list_courses(State(state): State<AppState>) -> Json<Vec<Course>> {
    let store = state.store();
    Json(store.list().to_vec())
}

/// GET /api/courses/{id} — a single course, 404 when absent.
pub async fn get_course(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Course>, ApiError> {
    let store = state.store();
    let course = parse_id(&id)
        .and_then(|id| store.get(id).cloned())
        .ok_or(ApiError::CourseNotFound)?;

    Ok(Json(course))
}

/// POST /api/courses — validate, insert, 201 with the new record.
pub async fn create_course(
    State(state): State<AppState>,
    Json(payload): Json<CoursePayload>,
) -> Result<(StatusCode, Json<Course>), ApiError> {
    let name = payload.validate()?;

    let mut store = state.store();
    let course = store.insert(name);

    tracing::debug!(id = course.id, name = %course.name, "Course created");
    Ok((StatusCode::CREATED, Json(course)))
}

/// PUT /api/courses/{id} — lookup first (404), then validate (400).
pub async fn update_course(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<CoursePayload>,
) -> Result<Json<Course>, ApiError> {
    let mut store = state.store();
    let id = parse_id(&id)
        .filter(|id| store.get(*id).is_some())
        .ok_or(ApiError::CourseNotFound)?;

    let name = payload.validate()?;
    let course = store.update(id, name).ok_or(ApiError::CourseNotFound)?;

    tracing::debug!(id = course.id, name = %course.name, "Course updated");
    Ok(Json(course))
}

/// DELETE /api/courses/{id} — 200 with the removed record, 404 when absent.
pub async fn delete_course(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Course>, ApiError> {
    let mut store = state.store();
    let course = parse_id(&id)
        .and_then(|id| store.remove(id))
        .ok_or(ApiError::CourseNotFound)?;

    tracing::debug!(id = course.id, "Course deleted");
    Ok(Json(course))
}

/// Fallback for any unmatched method/path pair.
pub async fn route_not_found(uri: Uri) -> ApiError {
    tracing::warn!(path = %uri.path(), "No route matched");
    ApiError::RouteNotFound
}

// A non-numeric id can never match a record, so it falls through to the
// same NotFound answer as an unknown numeric id.
fn parse_id(raw: &str) -> Option<u64> {
    raw.parse().ok()
}
