//! Bar-chart rendering endpoint.

use axum::{
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
};

use campus_core::{BarChart, ChartKind};

use crate::error::ApiError;
use crate::state::AppState;

/// Renders one of the analytics result sets as an SVG bar chart.
///
/// For `level` and `department` the identifier names the group to plot;
/// for `courses` and `performance` it is accepted for route-shape
/// compatibility and ignored.
#[utoipa::path(
    get,
    path = "/api/analytics/visualization/{kind}/{identifier}",
    params(
        ("kind" = String, Path, description = "Chart type: level, department, courses, or performance"),
        ("identifier" = String, Path, description = "Group to plot (level or department name)"),
    ),
    responses(
        (status = 200, description = "SVG bar chart", body = String, content_type = "image/svg+xml"),
        (status = 400, description = "Unknown chart type"),
        (status = 404, description = "No data for the requested group"),
        (status = 503, description = "Database unavailable"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "analytics"
)]
pub async fn render_chart(
    State(state): State<AppState>,
    Path((kind, identifier)): Path<(String, String)>,
) -> Result<Response, ApiError> {
    let kind: ChartKind = kind.parse().map_err(ApiError::from)?;

    let chart = match kind {
        ChartKind::Level => {
            let groups = state.analytics.top_by_level().await.map_err(ApiError::from)?;
            let rows = groups.get(&identifier).ok_or_else(|| {
                ApiError::NotFound(format!("No student data for level: {}", identifier))
            })?;
            let mut chart = BarChart::new(format!("Top students in {} (CGPA)", identifier));
            for row in rows {
                chart.push(row.student_name.clone(), row.cgpa);
            }
            chart
        }
        ChartKind::Department => {
            let groups = state
                .analytics
                .top_by_department()
                .await
                .map_err(ApiError::from)?;
            let rows = groups.get(&identifier).ok_or_else(|| {
                ApiError::NotFound(format!("No student data for department: {}", identifier))
            })?;
            let mut chart = BarChart::new(format!("Top students in {} (CGPA)", identifier));
            for row in rows {
                chart.push(row.student_name.clone(), row.cgpa);
            }
            chart
        }
        ChartKind::Courses => {
            let rows = state
                .analytics
                .highest_course_grades()
                .await
                .map_err(ApiError::from)?;
            let mut chart = BarChart::new("Highest mark per course");
            for row in rows {
                chart.push(row.course_code, row.highest_mark);
            }
            chart
        }
        ChartKind::Performance => {
            let rows = state
                .analytics
                .department_performance()
                .await
                .map_err(ApiError::from)?;
            let mut chart = BarChart::new("Average CGPA by department");
            for row in rows {
                chart.push(row.department, row.average_mark);
            }
            chart
        }
    };

    if chart.is_empty() {
        return Err(ApiError::NotFound("No data to plot".to_string()));
    }

    Ok((
        [(header::CONTENT_TYPE, "image/svg+xml")],
        chart.render(),
    )
        .into_response())
}
