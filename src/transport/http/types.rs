use crate::app::Database;
use crate::storage::{CourseStore, ReviewStore, SqliteCourseStore, SqliteReviewStore};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

/// Shared handler context, built once at startup and cloned into each request.
#[derive(Clone)]
pub struct AppState {
    pub database: Database,
    pub courses: Arc<dyn CourseStore>,
    pub reviews: Arc<dyn ReviewStore>,
}

impl AppState {
    /// Wires the SQLite stores onto the database's pool.
    pub fn new(database: Database) -> Self {
        let pool = database.pool().clone();
        Self {
            courses: Arc::new(SqliteCourseStore::new(pool.clone())),
            reviews: Arc::new(SqliteReviewStore::new(pool)),
            database,
        }
    }
}

/// Wire envelope for every failed request; `status` always equals the HTTP status.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct ErrorResponse {
    pub status: u16,
    #[serde(rename = "errorMsg")]
    pub error_msg: String,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct HealthResponse {
    pub status: String,
}
