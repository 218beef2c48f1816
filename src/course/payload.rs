//! Request payload validation.
//!
//! # Responsibilities
//! - Deserialize the client-supplied course body before any field access
//! - Enforce the name rules (present, at least 3 characters trimmed)
//! - Produce a [`CourseName`] only when validation succeeds

use serde::Deserialize;
use thiserror::Error;

/// Minimum trimmed name length accepted by the validator.
pub const MIN_NAME_LEN: usize = 3;

/// Client-supplied course body for create and update requests.
///
/// `name` is optional at the deserialization layer so that a missing field
/// is reported by the validator with a readable message instead of a
/// generic deserialization failure.
#[derive(Debug, Clone, Deserialize)]
pub struct CoursePayload {
    pub name: Option<String>,
}

/// A course name that has passed validation.
///
/// The only way to construct one is [`CoursePayload::validate`], so store
/// mutations that take a `CourseName` cannot persist an invalid name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseName(String);

impl CourseName {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

/// A payload that failed validation, with the violated rule spelled out.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl CoursePayload {
    /// Check the payload against the course schema.
    ///
    /// Succeeds iff `name` is present and its trimmed length is at least
    /// [`MIN_NAME_LEN`] characters. The stored value is the submitted
    /// string verbatim; trimming only applies to the length check.
    pub fn validate(&self) -> Result<CourseName, ValidationError> {
        let name = self
            .name
            .as_ref()
            .ok_or_else(|| ValidationError::new("name is required"))?;

        if name.trim().chars().count() < MIN_NAME_LEN {
            return Err(ValidationError::new(format!(
                "name must be at least {} characters long",
                MIN_NAME_LEN
            )));
        }

        Ok(CourseName(name.clone()))
    }
}
