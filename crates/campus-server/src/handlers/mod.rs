//! HTTP request handlers for API endpoints.

pub mod analytics;
pub mod charts;
pub mod health;
