//! Campus Core - Domain types, aggregation queries, and formatting.
//!
//! This crate provides the analytical core of the campus analytics system:
//!
//! - **Domain models**: [`StudentRecord`], [`GradeRecord`] and the nested
//!   performance block
//! - **Aggregation queries**: top students by level/department, highest
//!   course grades, department performance — pure functions over fetched
//!   records
//! - **Formatting**: rounding and percentage derivation for presentation
//! - **Charts**: hand-built SVG bar charts for the visualization endpoint
//! - **Traits**: [`StudentStore`] for dependency injection
//!
//! # Architecture
//!
//! This crate is reusable by different frontends (HTTP server, CLI).
//! Store access is decoupled through the [`StudentStore`] trait, so the
//! [`AnalyticsService`] can run against MongoDB in production and an
//! in-memory store in tests.

pub mod analytics;
pub mod chart;
pub mod error;
pub mod format;
pub mod models;
pub mod service;
pub mod traits;

pub use analytics::{
    department_performance, highest_course_grades, top_students_by_department,
    top_students_by_level, CourseGradeSummary, DepartmentPerformance, RankedGroup, TOP_N,
};
pub use chart::{Bar, BarChart, ChartKind};
pub use error::AppError;
pub use format::{CourseGradeRow, DepartmentRow, TopStudentRow};
pub use models::{CourseAttempt, GradeRecord, Performance, StudentRecord, STUDENT_ROLE};
pub use service::AnalyticsService;
pub use traits::StudentStore;
