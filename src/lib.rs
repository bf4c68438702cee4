pub mod app;
pub mod domain;
pub mod infra;
pub mod storage;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use app::database::Database;
pub use domain::model::{Course, Review};
pub use storage::{CourseStore, ReviewStore, StoreError};
pub use transport::http::ApiError;
