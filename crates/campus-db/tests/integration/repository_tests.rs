//! Repository tests against a containerized MongoDB.

use campus_core::AppError;
use campus_db::{connect, StudentRepository};

use super::common::{seed_fixture, setup_test_db};

#[tokio::test]
#[ignore = "requires Docker"]
async fn students_returns_only_student_role() {
    let (db, _container) = setup_test_db().await;
    seed_fixture(&db).await;
    let repo = StudentRepository::new(db);

    let students = repo.students().await.unwrap();
    assert_eq!(students.len(), 2);
    assert!(students.iter().all(|s| s.role == "student"));
    assert!(students.iter().any(|s| s.id == "2021-0001"));
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn grades_returns_all_entries() {
    let (db, _container) = setup_test_db().await;
    seed_fixture(&db).await;
    let repo = StudentRepository::new(db);

    let grades = repo.grades().await.unwrap();
    assert_eq!(grades.len(), 3);
    let cs101: Vec<_> = grades.iter().filter(|g| g.course_code == "CS101").collect();
    assert_eq!(cs101.len(), 2);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn empty_collections_yield_empty_vectors() {
    let (db, _container) = setup_test_db().await;
    let repo = StudentRepository::new(db);

    assert!(repo.students().await.unwrap().is_empty());
    assert!(repo.grades().await.unwrap().is_empty());
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn health_check_succeeds_on_live_database() {
    let (db, _container) = setup_test_db().await;
    let repo = StudentRepository::new(db);

    repo.health_check().await.unwrap();
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn connect_to_unreachable_server_fails_fast() {
    // Port 1 is never a MongoDB server; the bounded server-selection
    // timeout turns this into ConnectionFailed instead of a hang.
    let err = connect("mongodb://127.0.0.1:1", "college-system-test")
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::ConnectionFailed(_)));
}
