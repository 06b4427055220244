//! Campus DB - MongoDB access for the campus analytics system.
//!
//! Provides the connection provider ([`connect`], [`connect_with`]) and the
//! [`StudentRepository`] implementing `campus_core::StudentStore`.

mod provider;
mod repository;

pub use provider::{connect, connect_with, DbConfig};
pub use repository::StudentRepository;
