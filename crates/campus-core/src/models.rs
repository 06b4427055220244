//! Domain models for student and grade records.
//!
//! Field names on the wire are camelCase to match the documents stored in
//! the `users` and `grades` collections. Unknown fields (driver internals
//! like `_id`) are ignored during deserialization.

use serde::{Deserialize, Serialize};

/// Role value identifying student documents in the `users` collection.
pub const STUDENT_ROLE: &str = "student";

/// A user document from the `users` collection, restricted to student role.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentRecord {
    /// Student identifier as stored by the registrar system.
    pub id: String,
    pub name: String,
    pub department: String,
    pub role: String,
    pub performance: Performance,
}

/// Nested academic performance block of a student document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Performance {
    pub academic_level: String,
    /// Cumulative grade-point average across the full record.
    pub cgpa: f64,
    /// Grade-point average for the current term only.
    pub term_gpa: f64,
    pub total_credit_hours_completed: i32,
    #[serde(default)]
    pub remaining_credit_hours: i32,
    #[serde(default)]
    pub max_allowed_credit_hours: i32,
    /// Categorical standing for the current term (e.g. "good standing").
    pub term_status: String,
    #[serde(default)]
    pub passed_courses: Vec<CourseAttempt>,
    #[serde(default)]
    pub failed_courses: Vec<CourseAttempt>,
}

/// A single course attempt with its grade outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseAttempt {
    pub course_code: String,
    #[serde(default)]
    pub term: String,
    pub grade: String,
}

/// A grade document from the `grades` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradeRecord {
    pub student_id: String,
    pub course_code: String,
    pub course_name: String,
    pub total_score: f64,
}
