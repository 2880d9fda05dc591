//! Storage trait for user records

use crate::error::Result;
use crate::types::{NewUser, User, UserId};
use async_trait::async_trait;

/// Access to the `users` table
///
/// Implementations must be safe to share across concurrently running
/// request handlers. Each method maps to a single statement; nothing here
/// spans a transaction.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// All users, most recently created (highest id) first
    async fn list_users(&self) -> Result<Vec<User>>;

    /// Insert a user and return the identifier assigned by the engine
    async fn insert_user(&self, user: &NewUser) -> Result<UserId>;

    /// Fetch a single user by identifier
    async fn get_user(&self, id: UserId) -> Result<User>;

    /// Number of stored users
    async fn count_users(&self) -> Result<i64>;
}
