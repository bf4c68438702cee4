use crate::domain::model::Review;
use crate::storage::{ReviewStore, StoreError};
use async_trait::async_trait;
use sqlx::SqlitePool;

/// Columns selected for every query that returns reviews.
///
/// `course_id` is decoded straight into `Review::course_id` by the `FromRow`
/// derive and leaves the API as `courseId`; keep this list and the struct in sync.
const REVIEW_COLUMNS: &str = "id, course_id, rating, comment";

/// SQLite implementation of [`ReviewStore`].
#[derive(Clone)]
pub struct SqliteReviewStore {
    pool: SqlitePool,
}

impl SqliteReviewStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReviewStore for SqliteReviewStore {
    async fn add(&self, review: &mut Review) -> Result<(), StoreError> {
        // The foreign key on course_id is the authoritative existence check.
        let result =
            sqlx::query("INSERT INTO reviews (course_id, rating, comment) VALUES (?, ?, ?)")
                .bind(review.course_id)
                .bind(review.rating)
                .bind(&review.comment)
                .execute(&self.pool)
                .await
                .map_err(StoreError::write("Problem adding review"))?;

        review.id = result.last_insert_rowid();
        tracing::debug!(id = review.id, course_id = review.course_id, "review inserted");
        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<Review>, StoreError> {
        let sql = format!("SELECT {} FROM reviews", REVIEW_COLUMNS);
        sqlx::query_as::<_, Review>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(StoreError::read("Problem listing reviews"))
    }

    async fn find_by_course_id(&self, course_id: i64) -> Result<Vec<Review>, StoreError> {
        let sql = format!("SELECT {} FROM reviews WHERE course_id = ?", REVIEW_COLUMNS);
        sqlx::query_as::<_, Review>(&sql)
            .bind(course_id)
            .fetch_all(&self.pool)
            .await
            .map_err(StoreError::read("Problem listing reviews for course"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Course;
    use crate::storage::sqlite::test_support::memory_db;
    use crate::storage::{CourseStore, SqliteCourseStore};

    struct Fixture {
        reviews: SqliteReviewStore,
        courses: SqliteCourseStore,
        course: Course,
    }

    async fn setup() -> Fixture {
        let db = memory_db().await;
        let courses = SqliteCourseStore::new(db.pool().clone());
        let reviews = SqliteReviewStore::new(db.pool().clone());
        let mut course = Course::new("Test", "http://testcourse.com");
        courses.add(&mut course).await.unwrap();
        Fixture {
            reviews,
            courses,
            course,
        }
    }

    fn new_test_review(course: &Course) -> Review {
        Review::new(course.id, 5, "this is a test review")
    }

    #[tokio::test]
    async fn added_review_sets_id() {
        let f = setup().await;
        let mut review = new_test_review(&f.course);
        let original_id = review.id;

        f.reviews.add(&mut review).await.unwrap();

        assert_ne!(original_id, review.id);
    }

    #[tokio::test]
    async fn added_reviews_are_all_returned_from_find_all() {
        let f = setup().await;
        f.reviews.add(&mut new_test_review(&f.course)).await.unwrap();
        f.reviews.add(&mut new_test_review(&f.course)).await.unwrap();

        assert_eq!(f.reviews.find_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn find_by_course_id_maps_the_foreign_key_column() {
        let f = setup().await;
        let mut review = new_test_review(&f.course);
        f.reviews.add(&mut review).await.unwrap();

        let found = f.reviews.find_by_course_id(f.course.id).await.unwrap();

        assert_eq!(found, vec![review]);
    }

    #[tokio::test]
    async fn find_by_course_id_only_returns_that_course() {
        let f = setup().await;
        let mut other = Course::new("Other", "http://other.com");
        f.courses.add(&mut other).await.unwrap();

        for _ in 0..3 {
            f.reviews.add(&mut new_test_review(&f.course)).await.unwrap();
        }
        f.reviews.add(&mut new_test_review(&other)).await.unwrap();

        assert_eq!(f.reviews.find_by_course_id(f.course.id).await.unwrap().len(), 3);
        assert_eq!(f.reviews.find_by_course_id(other.id).await.unwrap().len(), 1);
        assert_eq!(f.reviews.find_all().await.unwrap().len(), 4);
    }

    #[tokio::test]
    async fn no_reviews_returns_empty_list() {
        let f = setup().await;

        assert!(f.reviews.find_all().await.unwrap().is_empty());
        assert!(f
            .reviews
            .find_by_course_id(f.course.id)
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn adding_review_to_missing_course_fails() {
        let f = setup().await;
        let mut review = Review::new(46, 5, "Test comment");

        let err = f.reviews.add(&mut review).await.unwrap_err();

        assert!(matches!(err, StoreError::Write { .. }));
        assert_eq!(err.message(), "Problem adding review");
        assert_eq!(review.id, 0);
        assert!(f.reviews.find_all().await.unwrap().is_empty());
    }
}
