//! Campus Server - REST API for campus analytics
//!
//! This crate provides the HTTP surface over the analytics core:
//!
//! - **Rankings**: top students by academic level and by department
//! - **Courses**: highest observed mark per course
//! - **Performance**: mean CGPA per department
//! - **Charts**: any result set rendered as an SVG bar chart
//!
//! # API Documentation
//!
//! When running the server, interactive API documentation is available
//! at `/swagger-ui`.

pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod openapi;
pub mod router;
pub mod state;

pub use config::ServerConfig;
pub use error::ApiError;
pub use router::create_router;
pub use state::AppState;
