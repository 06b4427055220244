//! Presentation formatting of raw aggregation output.
//!
//! Pure transformations only: rounding, percentage derivation, and the
//! stable public field set. Nothing here touches the database.

use std::collections::BTreeMap;

use crate::analytics::{CourseGradeSummary, DepartmentPerformance, RankedGroup};
use crate::models::CourseAttempt;

/// Rounds to 2 decimal places (GPA values and averages).
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Rounds to 1 decimal place (derived percentages).
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Percentage of passed courses graded "A" or "A-", rounded to 1 decimal.
///
/// A student with no passed courses scores exactly 0.
pub fn a_grade_percentage(passed_courses: &[CourseAttempt]) -> f64 {
    if passed_courses.is_empty() {
        return 0.0;
    }
    let a_grades = passed_courses
        .iter()
        .filter(|c| c.grade == "A" || c.grade == "A-")
        .count();
    round1(a_grades as f64 / passed_courses.len() as f64 * 100.0)
}

/// A ranked student shaped for presentation.
///
/// Carries both the department and the academic level; each endpoint
/// serializes the one that is not its grouping key.
#[derive(Debug, Clone, PartialEq)]
pub struct TopStudentRow {
    pub student_id: String,
    pub student_name: String,
    pub department: String,
    pub academic_level: String,
    pub cgpa: f64,
    pub term_gpa: f64,
    pub total_credit_hours: i32,
    pub a_grades_percentage: f64,
    pub status: String,
}

/// A course summary shaped for presentation.
#[derive(Debug, Clone, PartialEq)]
pub struct CourseGradeRow {
    pub course_code: String,
    pub course_name: String,
    pub highest_mark: f64,
    pub student_count: usize,
}

/// A department performance summary shaped for presentation.
#[derive(Debug, Clone, PartialEq)]
pub struct DepartmentRow {
    pub department: String,
    pub average_mark: f64,
    pub student_count: usize,
}

/// Formats ranked groups into a key → rows mapping.
pub fn format_ranked(groups: Vec<RankedGroup>) -> BTreeMap<String, Vec<TopStudentRow>> {
    groups
        .into_iter()
        .map(|group| {
            let rows = group
                .top_students
                .into_iter()
                .map(|student| TopStudentRow {
                    student_id: student.id,
                    student_name: student.name,
                    department: student.department,
                    academic_level: student.performance.academic_level,
                    cgpa: round2(student.performance.cgpa),
                    term_gpa: round2(student.performance.term_gpa),
                    total_credit_hours: student.performance.total_credit_hours_completed,
                    a_grades_percentage: a_grade_percentage(&student.performance.passed_courses),
                    status: student.performance.term_status,
                })
                .collect();
            (group.key, rows)
        })
        .collect()
}

pub fn format_course_grades(summaries: Vec<CourseGradeSummary>) -> Vec<CourseGradeRow> {
    summaries
        .into_iter()
        .map(|summary| CourseGradeRow {
            course_code: summary.course_code,
            course_name: summary.course_name,
            highest_mark: round2(summary.highest_mark),
            student_count: summary.student_count,
        })
        .collect()
}

pub fn format_department_performance(performance: Vec<DepartmentPerformance>) -> Vec<DepartmentRow> {
    performance
        .into_iter()
        .map(|dept| DepartmentRow {
            department: dept.department,
            average_mark: round2(dept.average_cgpa),
            student_count: dept.student_count,
        })
        .collect()
}
