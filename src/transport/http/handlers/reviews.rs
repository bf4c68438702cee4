use crate::domain::model::Review;
use crate::transport::http::handlers::common::{json_body, path_id};
use crate::transport::http::types::{AppState, ErrorResponse};
use crate::transport::http::ApiError;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

#[utoipa::path(
    post,
    path = "/courses/{id}/reviews",
    params(("id" = i64, Path, description = "Course id the review belongs to")),
    request_body = Review,
    responses(
        (status = 201, description = "Review created", body = Review),
        (status = 400, description = "Non-numeric id or malformed body", body = ErrorResponse),
        (status = 404, description = "No such course", body = ErrorResponse),
        (status = 500, description = "Store rejected the review", body = ErrorResponse)
    )
)]
pub async fn create_review_handler(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    body: Result<Json<Review>, JsonRejection>,
) -> Result<(StatusCode, Json<Review>), ApiError> {
    let course_id = path_id(path)?;

    // Fast rejection; the reviews.course_id foreign key still guards the insert.
    if state.courses.find_by_id(course_id).await?.is_none() {
        return Err(ApiError::not_found(format!(
            "Could not find Course with id: {}",
            course_id
        )));
    }

    let mut review = json_body(body)?;
    review.id = 0;
    review.course_id = course_id;

    state.reviews.add(&mut review).await?;
    tracing::info!(id = review.id, course_id, "review created");

    Ok((StatusCode::CREATED, Json(review)))
}

#[utoipa::path(
    get,
    path = "/reviews",
    responses(
        (status = 200, description = "All reviews", body = Vec<Review>),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
pub async fn list_reviews_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<Review>>, ApiError> {
    Ok(Json(state.reviews.find_all().await?))
}

#[utoipa::path(
    get,
    path = "/courses/{id}/reviews",
    params(("id" = i64, Path, description = "Course id")),
    responses(
        (status = 200, description = "Reviews for the course (possibly empty)", body = Vec<Review>),
        (status = 400, description = "Non-numeric id", body = ErrorResponse),
        (status = 404, description = "No such course", body = ErrorResponse)
    )
)]
pub async fn list_course_reviews_handler(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<Vec<Review>>, ApiError> {
    let course_id = path_id(path)?;

    if state.courses.find_by_id(course_id).await?.is_none() {
        return Err(ApiError::not_found(format!(
            "There is no such Course with id: {}",
            course_id
        )));
    }

    Ok(Json(state.reviews.find_by_course_id(course_id).await?))
}
