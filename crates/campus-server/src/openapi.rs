//! OpenAPI documentation configuration.

use utoipa::OpenApi;

use crate::dto::{
    CourseGradeResponse, DepartmentPerformanceResponse, DepartmentTopStudent, HealthResponse,
    LevelTopStudent, ServiceStatus,
};
use crate::handlers::{analytics, charts, health};

/// OpenAPI documentation for the campus analytics API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Campus Analytics API",
        version = "0.1.0",
        description = "Read-only analytics over a student-records database.

Four aggregation queries over the `users` and `grades` collections:
top students by academic level, top students by department, highest
course grades, and department-level performance averages. Each result
set can also be rendered as an SVG bar chart.

## Quick Start

1. Check server health: `GET /api/health`
2. Top students by level: `GET /api/analytics/top-by-level`
3. Department averages: `GET /api/analytics/department-performance`
",
        license(
            name = "Apache-2.0",
            url = "https://www.apache.org/licenses/LICENSE-2.0"
        )
    ),
    servers(
        (url = "http://localhost:5000", description = "Local development server")
    ),
    paths(
        health::health_check,
        analytics::top_by_level,
        analytics::top_by_department,
        analytics::highest_course_grades,
        analytics::department_performance,
        charts::render_chart,
    ),
    components(schemas(
        HealthResponse,
        ServiceStatus,
        LevelTopStudent,
        DepartmentTopStudent,
        CourseGradeResponse,
        DepartmentPerformanceResponse,
    )),
    tags(
        (name = "analytics", description = "Aggregation queries and charts"),
        (name = "system", description = "Health and diagnostics"),
    )
)]
pub struct ApiDoc;
