use clap::Parser;

/// Server configuration parsed from command line arguments and environment variables
#[derive(Parser, Debug)]
#[command(name = "campus-server")]
#[command(author, version, about = "REST API server for campus analytics")]
pub struct ServerConfig {
    /// MongoDB connection string
    #[arg(long, env = "MONGODB_URI")]
    pub mongodb_uri: String,

    /// Name of the student-records database
    #[arg(long, env = "DATABASE_NAME", default_value = "college-system")]
    pub database_name: String,

    /// Server port to listen on
    #[arg(short, long, env = "PORT", default_value = "5000")]
    pub port: u16,

    /// Server host to bind to
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Comma-separated allowed CORS origins, or "*" for any
    #[arg(long, env = "CORS_ORIGINS", default_value = "*")]
    pub cors_origins: String,
}
