//! Course domain subsystem.
//!
//! # Data Flow
//! ```text
//! request body (JSON)
//!     → payload.rs (deserialize, validate name rules)
//!     → CourseName (proof the name passed validation)
//!     → store.rs (id assignment, in-memory mutation)
//!     → Course (serialized back to the client)
//! ```
//!
//! # Design Decisions
//! - Store mutations only accept validated names; an unvalidated string
//!   cannot reach a persisted record
//! - Lookup misses are `None`; the HTTP boundary decides the status code
//! - Records live in insertion order for the process lifetime

pub mod model;
pub mod payload;
pub mod store;

pub use model::Course;
pub use payload::{CourseName, CoursePayload, ValidationError};
pub use store::CourseStore;
