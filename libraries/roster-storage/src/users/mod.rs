//! User queries

use crate::error::{read_error, write_error};
use roster_core::{
    error::{CoreError, Result},
    types::{format_unix_timestamp, NewUser, User, UserId},
};
use sqlx::SqlitePool;

/// Raw `users` row as stored
#[derive(Debug, sqlx::FromRow)]
struct UserRow {
    id: i64,
    name: String,
    email: String,
    created_at: i64,
}

impl TryFrom<UserRow> for User {
    type Error = CoreError;

    fn try_from(row: UserRow) -> Result<Self> {
        Ok(User {
            id: row.id,
            name: row.name,
            email: row.email,
            created_at: format_unix_timestamp(row.created_at)?,
        })
    }
}

/// Get all users, newest first
///
/// A single undecodable row fails the whole call.
pub async fn get_all(pool: &SqlitePool) -> Result<Vec<User>> {
    let rows = sqlx::query_as::<_, UserRow>(
        "SELECT id, name, email, created_at FROM users ORDER BY id DESC",
    )
    .fetch_all(pool)
    .await
    .map_err(read_error)?;

    rows.into_iter().map(User::try_from).collect()
}

/// Get user by ID
pub async fn get_by_id(pool: &SqlitePool, id: UserId) -> Result<User> {
    let row = sqlx::query_as::<_, UserRow>(
        "SELECT id, name, email, created_at FROM users WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await
    .map_err(read_error)?
    .ok_or_else(|| CoreError::not_found("User", id.to_string()))?;

    User::try_from(row)
}

/// Insert a user, returning the engine-assigned row id
///
/// `name` and `email` are bound as parameters; `id` and `created_at` are
/// left to the column defaults.
pub async fn insert(pool: &SqlitePool, user: &NewUser) -> Result<UserId> {
    let result = sqlx::query("INSERT INTO users (name, email) VALUES (?, ?)")
        .bind(&user.name)
        .bind(&user.email)
        .execute(pool)
        .await
        .map_err(write_error)?;

    if result.rows_affected() == 0 || result.last_insert_rowid() <= 0 {
        return Err(CoreError::MissingId(
            "no row id reported for insert".to_string(),
        ));
    }

    Ok(result.last_insert_rowid())
}

/// Count stored users
pub async fn count(pool: &SqlitePool) -> Result<i64> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await
        .map_err(read_error)?;

    Ok(count)
}
