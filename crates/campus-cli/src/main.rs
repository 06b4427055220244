//! Terminal frontend for the campus analytics queries.
//!
//! Logs go to stderr so the report tables on stdout stay pipeable.

mod config;

use std::collections::BTreeMap;

use clap::Parser;
use dotenvy::dotenv;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use campus_core::{
    AnalyticsService, AppError, CourseGradeRow, DepartmentRow, TopStudentRow,
};
use campus_db::StudentRepository;

use config::{Command, Config};

#[tokio::main]
async fn main() {
    dotenv().ok();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let config = Config::parse();

    if let Err(err) = run(config).await {
        eprintln!("{}", err.user_message());
        std::process::exit(1);
    }
}

async fn run(config: Config) -> Result<(), AppError> {
    info!("Connecting to database...");
    let db = campus_db::connect(&config.mongodb_uri, &config.database_name).await?;
    let service = AnalyticsService::new(StudentRepository::new(db));

    match config.command {
        Command::TopByLevel => {
            print_ranked("Top Students by Academic Level", "Level", &service.top_by_level().await?);
        }
        Command::TopByDepartment => {
            print_ranked(
                "Top Students by Department",
                "Department",
                &service.top_by_department().await?,
            );
        }
        Command::CourseGrades => {
            print_course_grades(&service.highest_course_grades().await?);
        }
        Command::Performance => {
            print_performance(&service.department_performance().await?);
        }
        Command::Report => {
            println!("=== Student Analytics Report ===");
            print_ranked("Top Students by Academic Level", "Level", &service.top_by_level().await?);
            print_ranked(
                "Top Students by Department",
                "Department",
                &service.top_by_department().await?,
            );
            print_course_grades(&service.highest_course_grades().await?);
            print_performance(&service.department_performance().await?);
        }
    }

    Ok(())
}

fn print_ranked(title: &str, key_label: &str, groups: &BTreeMap<String, Vec<TopStudentRow>>) {
    println!("\n{}\n", title);
    if groups.is_empty() {
        println!("  No student data found.");
        return;
    }

    for (key, rows) in groups {
        println!("{}: {}", key_label, key);
        println!(
            "  {:<12} {:<24} {:>6} {:>9} {:>7} {:>7}  {}",
            "ID", "Name", "CGPA", "Term GPA", "Hours", "A %", "Status"
        );
        for row in rows {
            println!(
                "  {:<12} {:<24} {:>6.2} {:>9.2} {:>7} {:>6.1}%  {}",
                row.student_id,
                truncate(&row.student_name, 24),
                row.cgpa,
                row.term_gpa,
                row.total_credit_hours,
                row.a_grades_percentage,
                row.status
            );
        }
        println!();
    }
}

fn print_course_grades(rows: &[CourseGradeRow]) {
    println!("\nTop Courses by Highest Mark\n");
    if rows.is_empty() {
        println!("  No grade data found.");
        return;
    }

    println!(
        "  {:<10} {:<32} {:>12} {:>10}",
        "Code", "Course", "Highest", "Students"
    );
    for row in rows {
        println!(
            "  {:<10} {:<32} {:>12.2} {:>10}",
            row.course_code,
            truncate(&row.course_name, 32),
            row.highest_mark,
            row.student_count
        );
    }
}

fn print_performance(rows: &[DepartmentRow]) {
    println!("\nDepartment Performance\n");
    if rows.is_empty() {
        println!("  No performance data found.");
        return;
    }

    println!(
        "  {:<28} {:>10} {:>10}",
        "Department", "Avg CGPA", "Students"
    );
    for row in rows {
        println!(
            "  {:<28} {:>10.2} {:>10}",
            truncate(&row.department, 28),
            row.average_mark,
            row.student_count
        );
    }
}

fn truncate(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_len - 3).collect();
        format!("{}...", truncated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_keeps_short_text() {
        assert_eq!(truncate("Algebra", 10), "Algebra");
    }

    #[test]
    fn truncate_shortens_long_text() {
        let out = truncate("An Extremely Verbose Course Title", 12);
        assert_eq!(out.chars().count(), 12);
        assert!(out.ends_with("..."));
    }
}
