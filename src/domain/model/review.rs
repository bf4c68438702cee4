use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A rating plus comment attached to exactly one course.
///
/// On the wire the foreign key is `courseId`; in storage it is the `course_id`
/// column. When a review is created through the API the course id always comes
/// from the request path, never from the body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub course_id: i64,
    pub rating: i32,
    pub comment: String,
}

impl Review {
    pub fn new(course_id: i64, rating: i32, comment: impl Into<String>) -> Self {
        Self {
            id: 0,
            course_id,
            rating,
            comment: comment.into(),
        }
    }
}
