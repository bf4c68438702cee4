//! SQLite-backed store implementations.
//!
//! Both stores hold a clone of the shared `SqlitePool`. Each statement checks a
//! connection out of the pool for its own duration and hands it back whether
//! the statement succeeds or fails.

mod course_store;
mod review_store;
pub mod schema;

pub use course_store::SqliteCourseStore;
pub use review_store::SqliteReviewStore;
