//! Repository for the `users` and `grades` collections.

use futures::TryStreamExt;
use mongodb::bson::doc;
use mongodb::Database;

use campus_core::{AppError, GradeRecord, StudentRecord, STUDENT_ROLE};

const USERS_COLLECTION: &str = "users";
const GRADES_COLLECTION: &str = "grades";

/// Read-only access to student and grade documents.
///
/// Cheap to clone; the underlying client carries the connection pool.
#[derive(Clone)]
pub struct StudentRepository {
    db: Database,
}

impl StudentRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Fetches all documents with the student role from `users`.
    pub async fn students(&self) -> Result<Vec<StudentRecord>, AppError> {
        let cursor = self
            .db
            .collection::<StudentRecord>(USERS_COLLECTION)
            .find(doc! { "role": STUDENT_ROLE }, None)
            .await?;
        let students = cursor.try_collect().await?;
        Ok(students)
    }

    /// Fetches all grade documents.
    pub async fn grades(&self) -> Result<Vec<GradeRecord>, AppError> {
        let cursor = self
            .db
            .collection::<GradeRecord>(GRADES_COLLECTION)
            .find(doc! {}, None)
            .await?;
        let grades = cursor.try_collect().await?;
        Ok(grades)
    }

    /// Checks database connectivity with a ping command.
    pub async fn health_check(&self) -> Result<(), AppError> {
        self.db.run_command(doc! { "ping": 1 }, None).await?;
        Ok(())
    }
}

impl campus_core::traits::StudentStore for StudentRepository {
    async fn students(&self) -> Result<Vec<StudentRecord>, AppError> {
        StudentRepository::students(self).await
    }

    async fn grades(&self) -> Result<Vec<GradeRecord>, AppError> {
        StudentRepository::grades(self).await
    }

    async fn health_check(&self) -> Result<(), AppError> {
        StudentRepository::health_check(self).await
    }
}
