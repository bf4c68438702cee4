use thiserror::Error;

/// Failure raised by a store when the relational engine rejects a statement.
///
/// Each variant carries a fixed, client-safe message alongside the native
/// driver error, which is kept as the `source` for logging.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{message}")]
    Write {
        message: &'static str,
        #[source]
        source: sqlx::Error,
    },
    #[error("{message}")]
    Read {
        message: &'static str,
        #[source]
        source: sqlx::Error,
    },
}

impl StoreError {
    pub fn write(message: &'static str) -> impl FnOnce(sqlx::Error) -> Self {
        move |source| StoreError::Write { message, source }
    }

    pub fn read(message: &'static str) -> impl FnOnce(sqlx::Error) -> Self {
        move |source| StoreError::Read { message, source }
    }

    pub fn message(&self) -> &'static str {
        match self {
            StoreError::Write { message, .. } | StoreError::Read { message, .. } => *message,
        }
    }
}
