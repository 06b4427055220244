//! Response DTOs for API endpoints.

use std::collections::BTreeMap;

use serde::Serialize;
use utoipa::ToSchema;

use campus_core::{CourseGradeRow, DepartmentRow, TopStudentRow};

// =============================================================================
// Health
// =============================================================================

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Health status ("healthy" or "degraded")
    pub status: String,
    /// Server version
    pub version: String,
    /// Database connectivity status
    pub database: ServiceStatus,
}

/// Status of an individual service component.
#[derive(Debug, Serialize, ToSchema)]
pub struct ServiceStatus {
    /// Whether the service is reachable
    pub healthy: bool,
    /// Optional message (e.g., error details)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

// =============================================================================
// Ranking endpoints
// =============================================================================

/// Academic level → ranked students.
pub type TopByLevelResponse = BTreeMap<String, Vec<LevelTopStudent>>;

/// Department → ranked students.
pub type TopByDepartmentResponse = BTreeMap<String, Vec<DepartmentTopStudent>>;

/// A ranked student in the top-by-level listing.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LevelTopStudent {
    pub student_id: String,
    pub student_name: String,
    pub department: String,
    /// Cumulative GPA, rounded to 2 decimals
    pub cgpa: f64,
    /// Current-term GPA, rounded to 2 decimals
    pub term_gpa: f64,
    pub total_credit_hours: i32,
    /// Share of passed courses graded A or A-, rounded to 1 decimal
    pub a_grades_percentage: f64,
    /// Term standing (e.g. "good standing", "probation")
    pub status: String,
}

impl From<TopStudentRow> for LevelTopStudent {
    fn from(row: TopStudentRow) -> Self {
        Self {
            student_id: row.student_id,
            student_name: row.student_name,
            department: row.department,
            cgpa: row.cgpa,
            term_gpa: row.term_gpa,
            total_credit_hours: row.total_credit_hours,
            a_grades_percentage: row.a_grades_percentage,
            status: row.status,
        }
    }
}

/// A ranked student in the top-by-department listing.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentTopStudent {
    pub student_id: String,
    pub student_name: String,
    pub academic_level: String,
    pub cgpa: f64,
    pub term_gpa: f64,
    pub total_credit_hours: i32,
    pub a_grades_percentage: f64,
    pub status: String,
}

impl From<TopStudentRow> for DepartmentTopStudent {
    fn from(row: TopStudentRow) -> Self {
        Self {
            student_id: row.student_id,
            student_name: row.student_name,
            academic_level: row.academic_level,
            cgpa: row.cgpa,
            term_gpa: row.term_gpa,
            total_credit_hours: row.total_credit_hours,
            a_grades_percentage: row.a_grades_percentage,
            status: row.status,
        }
    }
}

/// Converts a formatted key → rows map into its DTO form.
pub fn ranked_response<T: From<TopStudentRow>>(
    groups: BTreeMap<String, Vec<TopStudentRow>>,
) -> BTreeMap<String, Vec<T>> {
    groups
        .into_iter()
        .map(|(key, rows)| (key, rows.into_iter().map(T::from).collect()))
        .collect()
}

// =============================================================================
// Course grades & department performance
// =============================================================================

/// A course with its highest observed mark.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CourseGradeResponse {
    pub course_code: String,
    pub course_name: String,
    /// Highest total score, rounded to 2 decimals
    pub highest_mark: f64,
    /// Number of grade entries recorded for the course
    pub student_count: usize,
}

impl From<CourseGradeRow> for CourseGradeResponse {
    fn from(row: CourseGradeRow) -> Self {
        Self {
            course_code: row.course_code,
            course_name: row.course_name,
            highest_mark: row.highest_mark,
            student_count: row.student_count,
        }
    }
}

/// A department with its mean CGPA.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentPerformanceResponse {
    pub department: String,
    /// Mean CGPA across the department, rounded to 2 decimals
    pub average_mark: f64,
    pub student_count: usize,
}

impl From<DepartmentRow> for DepartmentPerformanceResponse {
    fn from(row: DepartmentRow) -> Self {
        Self {
            department: row.department,
            average_mark: row.average_mark,
            student_count: row.student_count,
        }
    }
}
