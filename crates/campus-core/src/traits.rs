//! Trait definitions for external dependencies.
//!
//! [`StudentStore`] abstracts over the document store so the analytics
//! service can be exercised against an in-memory implementation in tests
//! and against MongoDB in production.

use std::future::Future;

use crate::error::AppError;
use crate::models::{GradeRecord, StudentRecord};

/// Read-only access to the student-records store.
///
/// [`students`](StudentStore::students) should filter to the student role
/// where the store can do it server-side; the aggregation queries apply
/// the same filter again in memory, so extra documents are tolerated.
pub trait StudentStore: Send + Sync {
    /// Fetches all student records.
    fn students(&self) -> impl Future<Output = Result<Vec<StudentRecord>, AppError>> + Send;

    /// Fetches all grade records.
    fn grades(&self) -> impl Future<Output = Result<Vec<GradeRecord>, AppError>> + Send;

    /// Verifies the store is reachable.
    fn health_check(&self) -> impl Future<Output = Result<(), AppError>> + Send;
}
