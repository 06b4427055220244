//! Data Transfer Objects for API responses.

mod response;

pub use response::*;
