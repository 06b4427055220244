use mongodb::error::ErrorKind;
use thiserror::Error;

/// Application-wide error types.
///
/// Connectivity failure (the store is unreachable) must stay
/// distinguishable from everything else: the HTTP layer maps it to 503 and
/// the rest to 500. An empty result is not an error at all — queries
/// return empty collections and callers decide how to report them.
#[derive(Error, Debug)]
pub enum AppError {
    /// Database operation failed.
    ///
    /// Wraps all errors from the MongoDB driver, including query errors
    /// and deserialization failures on malformed documents.
    #[error("Database error: {0}")]
    DatabaseError(#[from] mongodb::error::Error),

    /// The store rejected the liveness check or could not be reached.
    ///
    /// The driver constructs clients lazily and defers connection errors,
    /// so this is raised by the connection provider after an explicit ping.
    #[error("Database connection failed: {0}")]
    ConnectionFailed(String),

    /// An unrecognized chart type was requested.
    #[error("Unknown chart type: {0}")]
    UnknownChart(String),

    /// Generic application error for cases not covered by specific variants.
    #[error("Error: {0}")]
    Generic(String),
}

impl AppError {
    /// Returns true if the error indicates the store is unreachable.
    ///
    /// Covers both the provider's explicit ping failure and driver errors
    /// raised mid-request when the server can no longer be selected.
    pub fn is_connectivity(&self) -> bool {
        match self {
            AppError::ConnectionFailed(_) => true,
            AppError::DatabaseError(err) => matches!(
                &*err.kind,
                ErrorKind::ServerSelection { .. } | ErrorKind::Io(_)
            ),
            _ => false,
        }
    }

    /// Returns a user-friendly error message suitable for CLI output.
    pub fn user_message(&self) -> String {
        match self {
            AppError::ConnectionFailed(msg) => {
                format!(
                    "Cannot connect to MongoDB: {}\n   Check MONGODB_URI and that the server is reachable.",
                    msg
                )
            }
            AppError::DatabaseError(err) if self.is_connectivity() => {
                format!(
                    "Lost connection to MongoDB: {}\n   Check MONGODB_URI and that the server is reachable.",
                    err
                )
            }
            _ => self.to_string(),
        }
    }
}
