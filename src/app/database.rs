//! Datasource setup.
//!
//! Turns the configured datasource string into a SQLite pool, turns on
//! foreign-key enforcement for every connection and runs the init script.

use crate::storage::sqlite::schema;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use std::time::Duration;

/// Shared handle to the relational store. Cloning is cheap.
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Connects to `datasource` and runs the init script.
    ///
    /// Accepted forms: `sqlite:` URLs (query parameters included), plain file
    /// paths (`~` is expanded) and `:memory:`. Missing database files are created.
    pub async fn connect(datasource: &str) -> anyhow::Result<Self> {
        let (options, in_memory) = connect_options(datasource)?;
        // Already sqlx's default; set explicitly because reviews.course_id relies on it.
        let options = options.foreign_keys(true);

        // Every connection to an in-memory database sees its own empty store,
        // so keep exactly one alive for the lifetime of the pool.
        let pool_options = if in_memory {
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None::<Duration>)
                .max_lifetime(None::<Duration>)
        } else {
            SqlitePoolOptions::new().max_connections(5)
        };

        let pool = pool_options.connect_with(options).await?;
        schema::run_init_script(&pool).await?;
        tracing::info!(datasource, "datasource initialized");

        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub async fn ping(&self) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

fn connect_options(datasource: &str) -> Result<(SqliteConnectOptions, bool), sqlx::Error> {
    let is_url = datasource.starts_with("sqlite:");
    let target = datasource
        .strip_prefix("sqlite://")
        .or_else(|| datasource.strip_prefix("sqlite:"))
        .unwrap_or(datasource);
    let location = target.split('?').next().unwrap_or_default();

    if location.is_empty() || location == ":memory:" {
        return Ok((SqliteConnectOptions::from_str("sqlite::memory:")?, true));
    }

    // URLs may carry query parameters (`?mode=rwc`), so sqlx parses them;
    // bare paths are taken literally apart from `~`.
    let options = if is_url {
        SqliteConnectOptions::from_str(datasource)?
    } else {
        SqliteConnectOptions::new().filename(shellexpand::tilde(datasource).into_owned())
    };
    Ok((options.create_if_missing(true), false))
}
