//! In-memory course catalog HTTP service library.

pub mod config;
pub mod course;
pub mod http;

pub use config::ServerConfig;
pub use course::{Course, CoursePayload, CourseStore};
pub use http::HttpServer;
