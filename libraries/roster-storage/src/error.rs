/// Storage-specific errors
use roster_core::CoreError;
use thiserror::Error;

/// Storage error types
#[derive(Error, Debug)]
pub enum StorageError {
    /// Database connection error
    #[error("Database connection error: {0}")]
    Connection(String),

    /// Migration error
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

impl From<StorageError> for CoreError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Connection(msg) => CoreError::Connection(msg),
            StorageError::Migration(e) => CoreError::Connection(e.to_string()),
        }
    }
}

/// Whether the failure happened while turning a fetched row into values
fn is_decode(err: &sqlx::Error) -> bool {
    matches!(
        err,
        sqlx::Error::ColumnDecode { .. }
            | sqlx::Error::Decode(_)
            | sqlx::Error::ColumnNotFound(_)
            | sqlx::Error::ColumnIndexOutOfBounds { .. }
    )
}

/// Classify an error raised by a read statement
pub(crate) fn read_error(err: sqlx::Error) -> CoreError {
    if is_decode(&err) {
        CoreError::decode(err.to_string())
    } else {
        CoreError::query(err.to_string())
    }
}

/// Classify an error raised by a write statement
pub(crate) fn write_error(err: sqlx::Error) -> CoreError {
    CoreError::exec(err.to_string())
}
