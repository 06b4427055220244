use tokio_util::sync::CancellationToken;

use campus_core::AnalyticsService;
use campus_db::StudentRepository;

/// Shared application state for all handlers.
///
/// This is wrapped in Arc internally by Axum when using `with_state()`,
/// so all fields must implement Clone (the repository clones cheaply over
/// the driver's pooled client).
#[derive(Clone)]
pub struct AppState {
    /// Analytics service for the four read-only queries
    pub analytics: AnalyticsService<StudentRepository>,

    /// Repository for direct database access (health checks)
    pub student_repo: StudentRepository,

    /// Cancellation token for graceful shutdown
    pub shutdown_token: CancellationToken,
}

impl AppState {
    /// Creates a new application state over a verified database handle.
    pub fn new(db: mongodb::Database, shutdown_token: CancellationToken) -> Self {
        let student_repo = StudentRepository::new(db);
        Self {
            analytics: AnalyticsService::new(student_repo.clone()),
            student_repo,
            shutdown_token,
        }
    }
}
