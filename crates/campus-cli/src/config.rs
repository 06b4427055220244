use clap::{Parser, Subcommand};

/// CLI configuration parsed from command line arguments and environment variables
#[derive(Parser, Debug)]
#[command(name = "campus")]
#[command(author, version, about = "Analytics reports over the student-records database")]
pub struct Config {
    /// MongoDB connection string
    #[arg(long, env = "MONGODB_URI")]
    pub mongodb_uri: String,

    /// Name of the student-records database
    #[arg(long, env = "DATABASE_NAME", default_value = "college-system")]
    pub database_name: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Top 10 students per academic level
    TopByLevel,
    /// Top 10 students per department
    TopByDepartment,
    /// Highest mark per course, top 10
    CourseGrades,
    /// Mean CGPA per department
    Performance,
    /// All four analyses in one report
    Report,
}
