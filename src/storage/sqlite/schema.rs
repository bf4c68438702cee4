//! Init script run against every datasource at startup.
//!
//! Every statement is create-if-absent, so running the script against an
//! already initialized database leaves its data untouched.

use sqlx::SqlitePool;

pub const CREATE_COURSES_TABLE: &str = "CREATE TABLE IF NOT EXISTS courses (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    url TEXT NOT NULL
)";

pub const CREATE_REVIEWS_TABLE: &str = "CREATE TABLE IF NOT EXISTS reviews (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    course_id INTEGER NOT NULL REFERENCES courses(id),
    rating INTEGER NOT NULL,
    comment TEXT NOT NULL
)";

pub const INIT_SCRIPT: &[&str] = &[CREATE_COURSES_TABLE, CREATE_REVIEWS_TABLE];

pub async fn run_init_script(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    for statement in INIT_SCRIPT {
        sqlx::query(statement).execute(pool).await?;
    }
    Ok(())
}
