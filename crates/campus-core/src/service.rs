//! Analytics service combining store access, aggregation, and formatting.
//!
//! Every invocation is a fresh end-to-end read: fetch the relevant
//! collection, run the pure aggregation, format for presentation. No state
//! is retained between calls.

use std::collections::BTreeMap;

use crate::analytics;
use crate::error::AppError;
use crate::format::{
    self, CourseGradeRow, DepartmentRow, TopStudentRow,
};
use crate::traits::StudentStore;

/// Read-only analytics over the student-records store.
#[derive(Clone)]
pub struct AnalyticsService<S: StudentStore> {
    store: S,
}

impl<S: StudentStore> AnalyticsService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Top students per academic level, formatted for presentation.
    ///
    /// An empty map means the query ran but found no student records; a
    /// connectivity failure surfaces as an error instead.
    pub async fn top_by_level(&self) -> Result<BTreeMap<String, Vec<TopStudentRow>>, AppError> {
        let students = self.store.students().await?;
        Ok(format::format_ranked(analytics::top_students_by_level(
            &students,
        )))
    }

    /// Top students per department, formatted for presentation.
    pub async fn top_by_department(
        &self,
    ) -> Result<BTreeMap<String, Vec<TopStudentRow>>, AppError> {
        let students = self.store.students().await?;
        Ok(format::format_ranked(
            analytics::top_students_by_department(&students),
        ))
    }

    /// Top courses by highest observed mark.
    pub async fn highest_course_grades(&self) -> Result<Vec<CourseGradeRow>, AppError> {
        let grades = self.store.grades().await?;
        Ok(format::format_course_grades(analytics::highest_course_grades(
            &grades,
        )))
    }

    /// Mean CGPA per department, highest first.
    pub async fn department_performance(&self) -> Result<Vec<DepartmentRow>, AppError> {
        let students = self.store.students().await?;
        Ok(format::format_department_performance(
            analytics::department_performance(&students),
        ))
    }

    /// Verifies the underlying store is reachable.
    pub async fn health_check(&self) -> Result<(), AppError> {
        self.store.health_check().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GradeRecord, Performance, StudentRecord, STUDENT_ROLE};

    /// In-memory store used to exercise the full fetch → aggregate →
    /// format path without a database.
    #[derive(Clone, Default)]
    struct MemoryStore {
        students: Vec<StudentRecord>,
        grades: Vec<GradeRecord>,
        unreachable: bool,
    }

    impl StudentStore for MemoryStore {
        async fn students(&self) -> Result<Vec<StudentRecord>, AppError> {
            if self.unreachable {
                return Err(AppError::ConnectionFailed(
                    "server selection timed out".to_string(),
                ));
            }
            Ok(self.students.clone())
        }

        async fn grades(&self) -> Result<Vec<GradeRecord>, AppError> {
            if self.unreachable {
                return Err(AppError::ConnectionFailed(
                    "server selection timed out".to_string(),
                ));
            }
            Ok(self.grades.clone())
        }

        async fn health_check(&self) -> Result<(), AppError> {
            if self.unreachable {
                return Err(AppError::ConnectionFailed("ping failed".to_string()));
            }
            Ok(())
        }
    }

    fn student(id: &str, department: &str, cgpa: f64) -> StudentRecord {
        StudentRecord {
            id: id.to_string(),
            name: format!("Student {}", id),
            department: department.to_string(),
            role: STUDENT_ROLE.to_string(),
            performance: Performance {
                academic_level: "junior".to_string(),
                cgpa,
                term_gpa: cgpa,
                total_credit_hours_completed: 60,
                remaining_credit_hours: 84,
                max_allowed_credit_hours: 18,
                term_status: "good standing".to_string(),
                passed_courses: vec![],
                failed_courses: vec![],
            },
        }
    }

    /// Two departments: one with 12 students with distinct CGPAs, one with
    /// a single student. The larger one must be truncated to 10 rows sorted
    /// descending; the single student's CGPA is their department's mean.
    fn two_department_fixture() -> MemoryStore {
        let mut students: Vec<StudentRecord> = (0..12)
            .map(|i| student(&format!("cs{:02}", i), "Computer Science", 2.0 + i as f64 * 0.15))
            .collect();
        students.push(student("ph01", "Philosophy", 3.41));
        MemoryStore {
            students,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn top_by_department_truncates_and_sorts() {
        let service = AnalyticsService::new(two_department_fixture());
        let groups = service.top_by_department().await.unwrap();

        assert_eq!(groups.len(), 2);
        let cs = &groups["Computer Science"];
        assert_eq!(cs.len(), 10);
        for pair in cs.windows(2) {
            assert!(pair[0].cgpa >= pair[1].cgpa);
        }
        assert_eq!(groups["Philosophy"].len(), 1);
        assert_eq!(groups["Philosophy"][0].student_id, "ph01");
    }

    #[tokio::test]
    async fn department_performance_reports_both_departments() {
        let service = AnalyticsService::new(two_department_fixture());
        let rows = service.department_performance().await.unwrap();

        assert_eq!(rows.len(), 2);
        let philosophy = rows
            .iter()
            .find(|r| r.department == "Philosophy")
            .expect("Philosophy missing");
        assert_eq!(philosophy.average_mark, 3.41);
        assert_eq!(philosophy.student_count, 1);
        let cs = rows
            .iter()
            .find(|r| r.department == "Computer Science")
            .expect("Computer Science missing");
        assert_eq!(cs.student_count, 12);
    }

    #[tokio::test]
    async fn empty_store_yields_empty_results_not_errors() {
        let service = AnalyticsService::new(MemoryStore::default());
        assert!(service.top_by_level().await.unwrap().is_empty());
        assert!(service.highest_course_grades().await.unwrap().is_empty());
        assert!(service.department_performance().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn unreachable_store_surfaces_connectivity_error() {
        let service = AnalyticsService::new(MemoryStore {
            unreachable: true,
            ..Default::default()
        });

        let err = service.top_by_level().await.unwrap_err();
        assert!(err.is_connectivity());
        let err = service.health_check().await.unwrap_err();
        assert!(err.is_connectivity());
    }

    #[tokio::test]
    async fn highest_course_grades_flow() {
        let store = MemoryStore {
            grades: vec![
                GradeRecord {
                    student_id: "s1".to_string(),
                    course_code: "CS101".to_string(),
                    course_name: "Intro to Programming".to_string(),
                    total_score: 88.456,
                },
                GradeRecord {
                    student_id: "s2".to_string(),
                    course_code: "CS101".to_string(),
                    course_name: "Intro to Programming".to_string(),
                    total_score: 95.0,
                },
            ],
            ..Default::default()
        };
        let service = AnalyticsService::new(store);

        let rows = service.highest_course_grades().await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].highest_mark, 95.0);
        assert_eq!(rows[0].student_count, 2);
    }
}
