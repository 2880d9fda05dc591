//! Test helpers for storage integration tests
//!
//! These helpers create test databases using REAL SQLite files (NOT in-memory)
//! so that every pooled connection sees the same schema and rows.

use roster_storage::SqliteUserStore;
use tempfile::TempDir;

/// Test database wrapper that cleans up on drop
pub struct TestDb {
    pub store: SqliteUserStore,
    _temp_dir: TempDir,
}

impl TestDb {
    /// Create a new test database with migrations applied
    pub async fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let db_path = temp_dir.path().join("test.db");
        let db_url = format!("sqlite://{}", db_path.display());

        let store = SqliteUserStore::connect(&db_url)
            .await
            .expect("Failed to open test database");

        Self {
            store,
            _temp_dir: temp_dir,
        }
    }
}
