//! Store access objects translating course/review operations into SQL.

pub mod error;
pub mod sqlite;
pub mod traits;

pub use error::StoreError;
pub use sqlite::{SqliteCourseStore, SqliteReviewStore};
pub use traits::{CourseStore, ReviewStore};
