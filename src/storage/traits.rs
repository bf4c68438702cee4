//! Store traits the HTTP layer is written against.
//!
//! Handlers only see `Arc<dyn CourseStore>` / `Arc<dyn ReviewStore>`, so the
//! SQLite implementations are injected once at startup and shared by every
//! request.

use crate::domain::model::{Course, Review};
use crate::storage::StoreError;
use async_trait::async_trait;

#[async_trait]
pub trait CourseStore: Send + Sync {
    /// Persists `name` and `url`, then writes the generated id back onto `course`.
    async fn add(&self, course: &mut Course) -> Result<(), StoreError>;

    /// Every persisted course, in storage order. Empty when there are none.
    async fn find_all(&self) -> Result<Vec<Course>, StoreError>;

    /// `Ok(None)` when no course has this id; absence is not an error.
    async fn find_by_id(&self, id: i64) -> Result<Option<Course>, StoreError>;
}

#[async_trait]
pub trait ReviewStore: Send + Sync {
    /// Persists the review and writes the generated id back onto `review`.
    ///
    /// Fails when `review.course_id` does not reference an existing course.
    async fn add(&self, review: &mut Review) -> Result<(), StoreError>;

    async fn find_all(&self) -> Result<Vec<Review>, StoreError>;

    /// Reviews for one course. Does not check that the course exists.
    async fn find_by_course_id(&self, course_id: i64) -> Result<Vec<Review>, StoreError>;
}
