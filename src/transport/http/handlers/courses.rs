use crate::domain::model::Course;
use crate::transport::http::handlers::common::{json_body, path_id};
use crate::transport::http::types::{AppState, ErrorResponse};
use crate::transport::http::ApiError;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

#[utoipa::path(
    post,
    path = "/courses",
    request_body = Course,
    responses(
        (status = 201, description = "Course created", body = Course),
        (status = 400, description = "Malformed body", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
pub async fn create_course_handler(
    State(state): State<AppState>,
    body: Result<Json<Course>, JsonRejection>,
) -> Result<(StatusCode, Json<Course>), ApiError> {
    let mut course = json_body(body)?;
    course.id = 0;

    state.courses.add(&mut course).await?;
    tracing::info!(id = course.id, "course created");

    Ok((StatusCode::CREATED, Json(course)))
}

#[utoipa::path(
    get,
    path = "/courses",
    responses(
        (status = 200, description = "All courses", body = Vec<Course>),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
pub async fn list_courses_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<Course>>, ApiError> {
    Ok(Json(state.courses.find_all().await?))
}

#[utoipa::path(
    get,
    path = "/courses/{id}",
    params(("id" = i64, Path, description = "Course id")),
    responses(
        (status = 200, description = "The course", body = Course),
        (status = 400, description = "Non-numeric id", body = ErrorResponse),
        (status = 404, description = "No such course", body = ErrorResponse)
    )
)]
pub async fn get_course_handler(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<Course>, ApiError> {
    let id = path_id(path)?;

    match state.courses.find_by_id(id).await? {
        Some(course) => Ok(Json(course)),
        None => Err(ApiError::not_found(format!(
            "Could Not find Course with id: {}",
            id
        ))),
    }
}
