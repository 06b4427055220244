//! Connection provider for the student-records database.
//!
//! The driver constructs clients lazily and defers connection errors, so a
//! freshly built client proves nothing. [`connect`] issues a `ping` command
//! before declaring success and reports failure as
//! [`AppError::ConnectionFailed`], which callers surface as
//! service-unavailable rather than an empty result.

use std::time::Duration;

use mongodb::bson::doc;
use mongodb::options::ClientOptions;
use mongodb::{Client, Database};
use tracing::{error, info};

use campus_core::AppError;

/// Pool and timeout settings for the MongoDB client.
///
/// The client owns a connection pool shared across requests; a bounded
/// server-selection timeout keeps an unreachable store from hanging
/// requests indefinitely.
#[derive(Debug, Clone)]
pub struct DbConfig {
    pub max_pool_size: u32,
    pub server_selection_timeout: Duration,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            max_pool_size: 10,
            server_selection_timeout: Duration::from_secs(5),
        }
    }
}

/// Connects with default pool settings and verifies reachability.
pub async fn connect(uri: &str, database: &str) -> Result<Database, AppError> {
    connect_with(uri, database, &DbConfig::default()).await
}

/// Connects with explicit pool settings and verifies reachability.
pub async fn connect_with(
    uri: &str,
    database: &str,
    config: &DbConfig,
) -> Result<Database, AppError> {
    let mut options = ClientOptions::parse(uri)
        .await
        .map_err(|e| AppError::ConnectionFailed(format!("invalid connection string: {}", e)))?;
    options.max_pool_size = Some(config.max_pool_size);
    options.server_selection_timeout = Some(config.server_selection_timeout);

    let client = Client::with_options(options)
        .map_err(|e| AppError::ConnectionFailed(e.to_string()))?;
    let db = client.database(database);

    // Liveness check: the client is lazy, only a round-trip proves the
    // server is actually there.
    if let Err(e) = db.run_command(doc! { "ping": 1 }, None).await {
        error!("MongoDB liveness check failed: {}", e);
        return Err(AppError::ConnectionFailed(e.to_string()));
    }

    info!("Connected to MongoDB database '{}'", database);
    Ok(db)
}
