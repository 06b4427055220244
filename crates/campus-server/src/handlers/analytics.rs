//! Analytics endpoints: the four read-only aggregation queries.
//!
//! Each handler runs the same sequence: query through the analytics
//! service, treat an empty result as not-found, otherwise serialize the
//! formatted rows. Connectivity failures are mapped to 503 by
//! [`ApiError::from`].

use axum::{extract::State, Json};

use crate::dto::{
    ranked_response, CourseGradeResponse, DepartmentPerformanceResponse, DepartmentTopStudent,
    LevelTopStudent, TopByDepartmentResponse, TopByLevelResponse,
};
use crate::error::ApiError;
use crate::state::AppState;

/// Top 10 students per academic level, sorted by CGPA descending.
#[utoipa::path(
    get,
    path = "/api/analytics/top-by-level",
    responses(
        (status = 200, description = "Academic level mapped to its ranked students"),
        (status = 404, description = "No student data found"),
        (status = 503, description = "Database unavailable"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "analytics"
)]
pub async fn top_by_level(
    State(state): State<AppState>,
) -> Result<Json<TopByLevelResponse>, ApiError> {
    let groups = state.analytics.top_by_level().await.map_err(ApiError::from)?;
    if groups.is_empty() {
        return Err(ApiError::NotFound("No student data found".to_string()));
    }

    Ok(Json(ranked_response::<LevelTopStudent>(groups)))
}

/// Top 10 students per department, sorted by CGPA descending.
#[utoipa::path(
    get,
    path = "/api/analytics/top-by-department",
    responses(
        (status = 200, description = "Department mapped to its ranked students"),
        (status = 404, description = "No student data found"),
        (status = 503, description = "Database unavailable"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "analytics"
)]
pub async fn top_by_department(
    State(state): State<AppState>,
) -> Result<Json<TopByDepartmentResponse>, ApiError> {
    let groups = state
        .analytics
        .top_by_department()
        .await
        .map_err(ApiError::from)?;
    if groups.is_empty() {
        return Err(ApiError::NotFound("No student data found".to_string()));
    }

    Ok(Json(ranked_response::<DepartmentTopStudent>(groups)))
}

/// Top 10 courses by highest observed mark.
#[utoipa::path(
    get,
    path = "/api/analytics/highest-course-grades",
    responses(
        (status = 200, description = "Courses ranked by highest mark", body = [CourseGradeResponse]),
        (status = 404, description = "No grade data found"),
        (status = 503, description = "Database unavailable"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "analytics"
)]
pub async fn highest_course_grades(
    State(state): State<AppState>,
) -> Result<Json<Vec<CourseGradeResponse>>, ApiError> {
    let rows = state
        .analytics
        .highest_course_grades()
        .await
        .map_err(ApiError::from)?;
    if rows.is_empty() {
        return Err(ApiError::NotFound("No grade data found".to_string()));
    }

    Ok(Json(rows.into_iter().map(CourseGradeResponse::from).collect()))
}

/// Mean CGPA per department, highest first.
#[utoipa::path(
    get,
    path = "/api/analytics/department-performance",
    responses(
        (status = 200, description = "Departments ranked by mean CGPA", body = [DepartmentPerformanceResponse]),
        (status = 404, description = "No performance data found"),
        (status = 503, description = "Database unavailable"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "analytics"
)]
pub async fn department_performance(
    State(state): State<AppState>,
) -> Result<Json<Vec<DepartmentPerformanceResponse>>, ApiError> {
    let rows = state
        .analytics
        .department_performance()
        .await
        .map_err(ApiError::from)?;
    if rows.is_empty() {
        return Err(ApiError::NotFound("No performance data found".to_string()));
    }

    Ok(Json(
        rows.into_iter()
            .map(DepartmentPerformanceResponse::from)
            .collect(),
    ))
}
