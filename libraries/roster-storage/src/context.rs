use crate::{create_pool, run_migrations, users, StorageError};
use async_trait::async_trait;
use roster_core::{error::Result, storage::UserStore, types::*};
use sqlx::SqlitePool;

/// User store backed by a pooled `SQLite` connection
///
/// The pool is internally synchronized, so one instance is shared by all
/// request handlers.
#[derive(Clone)]
pub struct SqliteUserStore {
    pool: SqlitePool,
}

impl SqliteUserStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open the pool and bring the schema up to date
    pub async fn connect(database_url: &str) -> std::result::Result<Self, StorageError> {
        let pool = create_pool(database_url).await?;
        run_migrations(&pool).await?;
        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Close every pooled connection. Later queries fail with `PoolClosed`.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl UserStore for SqliteUserStore {
    async fn list_users(&self) -> Result<Vec<User>> {
        users::get_all(&self.pool).await
    }

    async fn insert_user(&self, user: &NewUser) -> Result<UserId> {
        users::insert(&self.pool, user).await
    }

    async fn get_user(&self, id: UserId) -> Result<User> {
        users::get_by_id(&self.pool, id).await
    }

    async fn count_users(&self) -> Result<i64> {
        users::count(&self.pool).await
    }
}
