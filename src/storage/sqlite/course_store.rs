use crate::domain::model::Course;
use crate::storage::{CourseStore, StoreError};
use async_trait::async_trait;
use sqlx::SqlitePool;

/// SQLite implementation of [`CourseStore`].
#[derive(Clone)]
pub struct SqliteCourseStore {
    pool: SqlitePool,
}

impl SqliteCourseStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CourseStore for SqliteCourseStore {
    async fn add(&self, course: &mut Course) -> Result<(), StoreError> {
        let result = sqlx::query("INSERT INTO courses (name, url) VALUES (?, ?)")
            .bind(&course.name)
            .bind(&course.url)
            .execute(&self.pool)
            .await
            .map_err(StoreError::write("Problem adding course"))?;

        course.id = result.last_insert_rowid();
        tracing::debug!(id = course.id, "course inserted");
        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<Course>, StoreError> {
        sqlx::query_as::<_, Course>("SELECT id, name, url FROM courses")
            .fetch_all(&self.pool)
            .await
            .map_err(StoreError::read("Problem listing courses"))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Course>, StoreError> {
        sqlx::query_as::<_, Course>("SELECT id, name, url FROM courses WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(StoreError::read("Problem finding course"))
    }
}
