use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A course that reviews can be attached to.
///
/// `id` stays `0` until the record is persisted; the store writes the generated
/// key back after the insert. Any `id` sent by a client is ignored on create.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Course {
    #[serde(default)]
    pub id: i64,
    pub name: String,
    pub url: String,
}

impl Course {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: 0,
            name: name.into(),
            url: url.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_course_has_no_id() {
        let course = Course::new("Test", "http://test.com");
        assert_eq!(course.id, 0);
    }

    #[test]
    fn id_is_optional_in_request_bodies() {
        let course: Course =
            serde_json::from_str(r#"{"name":"Test","url":"http://test.com"}"#).unwrap();
        assert_eq!(course, Course::new("Test", "http://test.com"));
    }

    #[test]
    fn serializes_with_id() {
        let mut course = Course::new("Rust", "http://rust.dev");
        course.id = 7;
        let json = serde_json::to_value(&course).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "id": 7, "name": "Rust", "url": "http://rust.dev" })
        );
    }
}
