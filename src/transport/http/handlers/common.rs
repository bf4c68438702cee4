use crate::transport::http::ApiError;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::Path;
use axum::http::{Method, StatusCode, Uri};
use axum::Json;

/// Parses a numeric path identifier, rejecting anything else with 400.
pub fn parse_id(raw: &str) -> Result<i64, ApiError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| ApiError::bad_request("invalid id"))
}

/// Extracts the single `:id` path segment, rejecting undecodable or non-numeric ids with 400.
pub fn path_id(path: Result<Path<String>, PathRejection>) -> Result<i64, ApiError> {
    match path {
        Ok(Path(raw)) => parse_id(&raw),
        Err(rejection) => {
            tracing::debug!(%rejection, "path rejected");
            Err(ApiError::bad_request("invalid id"))
        }
    }
}

/// Unwraps a JSON body, turning decode failures into 400 instead of axum's plain-text rejection.
pub fn json_body<T>(body: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    match body {
        Ok(Json(value)) => Ok(value),
        Err(rejection) => Err(ApiError::bad_request(format!(
            "Invalid JSON body: {}",
            rejection.body_text()
        ))),
    }
}

pub async fn route_not_found(method: Method, uri: Uri) -> ApiError {
    ApiError::not_found(format!("No route for {} {}", method, uri.path()))
}

pub async fn method_not_allowed(method: Method, uri: Uri) -> ApiError {
    ApiError::new(
        StatusCode::METHOD_NOT_ALLOWED,
        format!("Method {} not allowed for {}", method, uri.path()),
    )
}
