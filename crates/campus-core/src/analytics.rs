//! Aggregation queries over student and grade records.
//!
//! Each query is a pure function of the records passed in. The repository
//! fetches the relevant collections; everything here runs in memory so the
//! ranking and grouping rules can be tested without a database.
//!
//! Ordering is deterministic throughout: students tie-break on id
//! ascending, groups are emitted key-ascending, and score-ranked lists
//! tie-break on their code or key. The store's incidental document order
//! never leaks into results.

use std::collections::BTreeMap;

use crate::models::{GradeRecord, StudentRecord, STUDENT_ROLE};

/// Maximum number of entries in any ranked list.
pub const TOP_N: usize = 10;

/// A grouping key paired with its top students, CGPA descending.
#[derive(Debug, Clone)]
pub struct RankedGroup {
    pub key: String,
    pub top_students: Vec<StudentRecord>,
}

/// Course code/name paired with the maximum observed score and the number
/// of grade entries recorded for it.
#[derive(Debug, Clone)]
pub struct CourseGradeSummary {
    pub course_code: String,
    pub course_name: String,
    pub highest_mark: f64,
    pub student_count: usize,
}

/// Department paired with mean CGPA and student count.
#[derive(Debug, Clone)]
pub struct DepartmentPerformance {
    pub department: String,
    pub average_cgpa: f64,
    pub student_count: usize,
}

/// Top students per academic level, at most [`TOP_N`] each.
pub fn top_students_by_level(students: &[StudentRecord]) -> Vec<RankedGroup> {
    rank_by(students, |s| s.performance.academic_level.clone())
}

/// Top students per department, at most [`TOP_N`] each.
pub fn top_students_by_department(students: &[StudentRecord]) -> Vec<RankedGroup> {
    rank_by(students, |s| s.department.clone())
}

fn rank_by<F>(students: &[StudentRecord], key_fn: F) -> Vec<RankedGroup>
where
    F: Fn(&StudentRecord) -> String,
{
    let mut groups: BTreeMap<String, Vec<StudentRecord>> = BTreeMap::new();
    for student in students.iter().filter(|s| s.role == STUDENT_ROLE) {
        groups
            .entry(key_fn(student))
            .or_default()
            .push(student.clone());
    }

    groups
        .into_iter()
        .map(|(key, mut members)| {
            members.sort_by(|a, b| {
                b.performance
                    .cgpa
                    .total_cmp(&a.performance.cgpa)
                    .then_with(|| a.id.cmp(&b.id))
            });
            members.truncate(TOP_N);
            RankedGroup {
                key,
                top_students: members,
            }
        })
        .collect()
}

/// Highest mark per course, top [`TOP_N`] courses by maximum score.
///
/// The course name is the first one seen for a code. With concurrent writes
/// to the source collection that choice is nondeterministic; for this
/// read-mostly workload it is accepted as-is.
pub fn highest_course_grades(grades: &[GradeRecord]) -> Vec<CourseGradeSummary> {
    let mut by_course: BTreeMap<String, CourseGradeSummary> = BTreeMap::new();
    for grade in grades {
        by_course
            .entry(grade.course_code.clone())
            .and_modify(|summary| {
                summary.student_count += 1;
                if grade.total_score > summary.highest_mark {
                    summary.highest_mark = grade.total_score;
                }
            })
            .or_insert_with(|| CourseGradeSummary {
                course_code: grade.course_code.clone(),
                course_name: grade.course_name.clone(),
                highest_mark: grade.total_score,
                student_count: 1,
            });
    }

    let mut summaries: Vec<CourseGradeSummary> = by_course.into_values().collect();
    summaries.sort_by(|a, b| {
        b.highest_mark
            .total_cmp(&a.highest_mark)
            .then_with(|| a.course_code.cmp(&b.course_code))
    });
    summaries.truncate(TOP_N);
    summaries
}

/// Mean CGPA and student count per department, mean descending.
///
/// No minimum sample size: a department with one student reports that
/// student's CGPA as its mean.
pub fn department_performance(students: &[StudentRecord]) -> Vec<DepartmentPerformance> {
    let mut totals: BTreeMap<String, (f64, usize)> = BTreeMap::new();
    for student in students.iter().filter(|s| s.role == STUDENT_ROLE) {
        let entry = totals.entry(student.department.clone()).or_insert((0.0, 0));
        entry.0 += student.performance.cgpa;
        entry.1 += 1;
    }

    let mut performance: Vec<DepartmentPerformance> = totals
        .into_iter()
        .map(|(department, (total, count))| DepartmentPerformance {
            department,
            average_cgpa: total / count as f64,
            student_count: count,
        })
        .collect();

    performance.sort_by(|a, b| {
        b.average_cgpa
            .total_cmp(&a.average_cgpa)
            .then_with(|| a.department.cmp(&b.department))
    });
    performance
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Performance;

    fn student(id: &str, department: &str, level: &str, cgpa: f64) -> StudentRecord {
        StudentRecord {
            id: id.to_string(),
            name: format!("Student {}", id),
            department: department.to_string(),
            role: STUDENT_ROLE.to_string(),
            performance: Performance {
                academic_level: level.to_string(),
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

    fn grade(student_id: &str, code: &str, name: &str, score: f64) -> GradeRecord {
        GradeRecord {
            student_id: student_id.to_string(),
            course_code: code.to_string(),
            course_name: name.to_string(),
            total_score: score,
        }
    }

    #[test]
    fn ranked_groups_capped_and_sorted_descending() {
        let students: Vec<StudentRecord> = (0..15)
            .map(|i| student(&format!("s{:02}", i), "CS", "junior", 2.0 + i as f64 * 0.1))
            .collect();

        let groups = top_students_by_level(&students);
        assert_eq!(groups.len(), 1);
        let top = &groups[0].top_students;
        assert_eq!(top.len(), TOP_N);
        for pair in top.windows(2) {
            assert!(pair[0].performance.cgpa >= pair[1].performance.cgpa);
        }
        // Highest CGPA student survives the cut
        assert_eq!(top[0].id, "s14");
    }

    #[test]
    fn equal_cgpa_breaks_ties_by_id_ascending() {
        let students = vec![
            student("s2", "CS", "senior", 3.5),
            student("s1", "CS", "senior", 3.5),
            student("s3", "CS", "senior", 3.5),
        ];

        let groups = top_students_by_level(&students);
        let ids: Vec<&str> = groups[0]
            .top_students
            .iter()
            .map(|s| s.id.as_str())
            .collect();
        assert_eq!(ids, vec!["s1", "s2", "s3"]);
    }

    #[test]
    fn non_students_are_excluded() {
        let mut staff = student("t1", "CS", "senior", 4.0);
        staff.role = "teacher".to_string();
        let students = vec![staff, student("s1", "CS", "senior", 3.0)];

        let groups = top_students_by_department(&students);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].top_students.len(), 1);
        assert_eq!(groups[0].top_students[0].id, "s1");
    }

    #[test]
    fn groups_emitted_in_key_order() {
        let students = vec![
            student("s1", "Physics", "junior", 3.0),
            student("s2", "Biology", "junior", 3.2),
            student("s3", "Chemistry", "junior", 3.1),
        ];

        let groups = top_students_by_department(&students);
        let keys: Vec<&str> = groups.iter().map(|g| g.key.as_str()).collect();
        assert_eq!(keys, vec!["Biology", "Chemistry", "Physics"]);
    }

    #[test]
    fn empty_input_yields_no_groups() {
        assert!(top_students_by_level(&[]).is_empty());
        assert!(department_performance(&[]).is_empty());
        assert!(highest_course_grades(&[]).is_empty());
    }

    #[test]
    fn highest_mark_is_true_maximum() {
        let grades = vec![
            grade("s1", "CS101", "Intro to Programming", 88.0),
            grade("s2", "CS101", "Intro to Programming", 95.5),
            grade("s3", "CS101", "Intro to Programming", 91.0),
            grade("s1", "MA200", "Linear Algebra", 79.0),
        ];

        let summaries = highest_course_grades(&grades);
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].course_code, "CS101");
        assert_eq!(summaries[0].highest_mark, 95.5);
        assert_eq!(summaries[0].student_count, 3);
        assert_eq!(summaries[1].course_code, "MA200");
        assert_eq!(summaries[1].student_count, 1);
    }

    #[test]
    fn course_grades_capped_at_ten() {
        let grades: Vec<GradeRecord> = (0..12)
            .map(|i| {
                grade(
                    "s1",
                    &format!("C{:03}", i),
                    &format!("Course {}", i),
                    50.0 + i as f64,
                )
            })
            .collect();

        let summaries = highest_course_grades(&grades);
        assert_eq!(summaries.len(), TOP_N);
        // Lowest-scoring courses fell off the end
        assert!(summaries.iter().all(|s| s.highest_mark >= 52.0));
    }

    #[test]
    fn course_name_is_first_seen() {
        let grades = vec![
            grade("s1", "CS101", "Intro to Programming", 70.0),
            grade("s2", "CS101", "Programming I", 80.0),
        ];

        let summaries = highest_course_grades(&grades);
        assert_eq!(summaries[0].course_name, "Intro to Programming");
    }

    #[test]
    fn single_student_department_mean_is_their_cgpa() {
        let students = vec![student("s1", "Philosophy", "senior", 3.41)];

        let performance = department_performance(&students);
        assert_eq!(performance.len(), 1);
        assert_eq!(performance[0].average_cgpa, 3.41);
        assert_eq!(performance[0].student_count, 1);
    }

    #[test]
    fn departments_sorted_by_mean_descending() {
        let students = vec![
            student("s1", "CS", "junior", 3.0),
            student("s2", "CS", "junior", 3.4),
            student("s3", "Math", "junior", 3.8),
        ];

        let performance = department_performance(&students);
        assert_eq!(performance[0].department, "Math");
        assert_eq!(performance[1].department, "CS");
        assert!((performance[1].average_cgpa - 3.2).abs() < 1e-9);
        assert_eq!(performance[1].student_count, 2);
    }
}
