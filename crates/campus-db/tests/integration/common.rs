//! Test utilities for integration tests.
//!
//! Provides a helper to start an isolated MongoDB container and seed it
//! with fixture documents.

use mongodb::bson::{doc, Document};
use mongodb::Database;
use testcontainers::core::{ContainerPort, WaitFor};
use testcontainers::runners::AsyncRunner;
use testcontainers::{ContainerAsync, GenericImage};

use campus_db::connect;

/// Starts a MongoDB container and returns a connected database handle.
///
/// Each call creates a fresh, isolated container. Keep the returned
/// `ContainerAsync` alive for the test duration; the container is cleaned
/// up when it is dropped.
pub async fn setup_test_db() -> (Database, ContainerAsync<GenericImage>) {
    let container = GenericImage::new("mongo", "7")
        .with_exposed_port(ContainerPort::Tcp(27017))
        .with_wait_for(WaitFor::message_on_stdout("Waiting for connections"))
        .start()
        .await
        .expect("Failed to start MongoDB container");

    let host = container.get_host().await.expect("Failed to get host");
    let port = container
        .get_host_port_ipv4(27017)
        .await
        .expect("Failed to get port");

    let uri = format!("mongodb://{}:{}", host, port);
    let db = connect(&uri, "college-system-test")
        .await
        .expect("Failed to connect to test database");

    (db, container)
}

/// Seeds the `users` collection with two students and one teacher, and the
/// `grades` collection with three grade entries.
pub async fn seed_fixture(db: &Database) {
    let users: Vec<Document> = vec![
        student_doc("2021-0001", "Aya Hassan", "Computer Science", "junior", 3.8),
        student_doc("2021-0002", "Omar Said", "Computer Science", "junior", 3.2),
        doc! {
            "id": "staff-01",
            "name": "Dr. Mona Ali",
            "department": "Computer Science",
            "role": "teacher",
        },
    ];
    db.collection::<Document>("users")
        .insert_many(users, None)
        .await
        .expect("Failed to seed users");

    let grades: Vec<Document> = vec![
        grade_doc("2021-0001", "CS101", "Intro to Programming", 92.5),
        grade_doc("2021-0002", "CS101", "Intro to Programming", 84.0),
        grade_doc("2021-0001", "MA200", "Linear Algebra", 77.5),
    ];
    db.collection::<Document>("grades")
        .insert_many(grades, None)
        .await
        .expect("Failed to seed grades");
}

fn student_doc(id: &str, name: &str, department: &str, level: &str, cgpa: f64) -> Document {
    doc! {
        "id": id,
        "name": name,
        "department": department,
        "role": "student",
        "performance": {
            "academicLevel": level,
            "cgpa": cgpa,
            "termGpa": cgpa,
            "totalCreditHoursCompleted": 60,
            "remainingCreditHours": 84,
            "maxAllowedCreditHours": 18,
            "termStatus": "good standing",
            "passedCourses": [
                { "courseCode": "CS101", "term": "F23", "grade": "A" }
            ],
            "failedCourses": [],
        },
    }
}

fn grade_doc(student_id: &str, code: &str, name: &str, score: f64) -> Document {
    doc! {
        "studentId": student_id,
        "courseCode": code,
        "courseName": name,
        "totalScore": score,
    }
}
