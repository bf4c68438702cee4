use crate::domain::model::{Course, Review};
use crate::transport::http::handlers::{common, courses, health, reviews};
use crate::transport::http::types::{AppState, ErrorResponse, HealthResponse};
use axum::http::header::CONTENT_TYPE;
use axum::http::HeaderValue;
use axum::routing::{get, post};
use axum::Router;
use tower_http::set_header::SetResponseHeaderLayer;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::healthcheck_handler,
        courses::create_course_handler,
        courses::list_courses_handler,
        courses::get_course_handler,
        reviews::create_review_handler,
        reviews::list_reviews_handler,
        reviews::list_course_reviews_handler
    ),
    components(schemas(Course, Review, ErrorResponse, HealthResponse))
)]
pub struct ApiDoc;

/// Builds the API router. Every response it produces, errors, unknown routes and
/// unsupported methods included, is a JSON document labelled `application/json`.
pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::healthcheck_handler))
        .route(
            "/courses",
            post(courses::create_course_handler).get(courses::list_courses_handler),
        )
        .route("/courses/:id", get(courses::get_course_handler))
        .route(
            "/courses/:id/reviews",
            post(reviews::create_review_handler).get(reviews::list_course_reviews_handler),
        )
        .route("/reviews", get(reviews::list_reviews_handler))
        .fallback(common::route_not_found)
        .method_not_allowed_fallback(common::method_not_allowed)
        .layer(SetResponseHeaderLayer::overriding(
            CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        ))
        .with_state(app_state)
}
