//! User queries
//!
//! Every statement is written out explicitly and rows are mapped field by
//! field through [`UserRow`]. Soft-deleted rows (`deleted_at IS NOT NULL`)
//! are filtered out of every read and write.

use crate::error::{Result, StorageError};
use chrono::{DateTime, Utc};
use roster_core::types::{CreateUser, DateOfBirth, Timestamps, UpdateUser, User, UserId};
use sqlx::{Executor, Sqlite, SqlitePool};

const ENTITY: &str = "User";

/// Raw `users` row
#[derive(Debug, sqlx::FromRow)]
struct UserRow {
    id: i64,
    name: String,
    dob: Option<String>,
    address: String,
    description: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
}

impl UserRow {
    fn into_user(self) -> Result<User> {
        let id = u64::try_from(self.id)
            .map_err(|_| StorageError::InvalidData(format!("negative user id {}", self.id)))?;

        let dob = self
            .dob
            .as_deref()
            .map(DateOfBirth::parse)
            .transpose()
            .map_err(|_| {
                StorageError::InvalidData(format!("user {} has malformed dob {:?}", id, self.dob))
            })?;

        Ok(User {
            id: UserId::new(id),
            name: self.name,
            dob,
            address: self.address,
            description: self.description,
            timestamps: Timestamps {
                created_at: self.created_at,
                updated_at: self.updated_at,
                deleted_at: self.deleted_at,
            },
        })
    }
}

/// SQLite rowids are signed; ids above `i64::MAX` can never exist.
fn row_id(id: UserId) -> Option<i64> {
    i64::try_from(id.get()).ok()
}

/// Fetch a row by rowid, soft-deleted or not
async fn fetch_any<'e, E>(executor: E, id: i64) -> Result<Option<User>>
where
    E: Executor<'e, Database = Sqlite>,
{
    let row = sqlx::query_as::<_, UserRow>(
        r#"
        SELECT id, name, dob, address, description, created_at, updated_at, deleted_at
        FROM users
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(executor)
    .await?;

    row.map(UserRow::into_user).transpose()
}

/// Get all live users ordered by id
pub async fn get_all(pool: &SqlitePool) -> Result<Vec<User>> {
    let rows = sqlx::query_as::<_, UserRow>(
        r#"
        SELECT id, name, dob, address, description, created_at, updated_at, deleted_at
        FROM users
        WHERE deleted_at IS NULL
        ORDER BY id
        "#,
    )
    .fetch_all(pool)
    .await?;

    rows.into_iter().map(UserRow::into_user).collect()
}

/// Get a live user by id
pub async fn get_by_id(pool: &SqlitePool, id: UserId) -> Result<Option<User>> {
    let Some(id) = row_id(id) else {
        return Ok(None);
    };

    let row = sqlx::query_as::<_, UserRow>(
        r#"
        SELECT id, name, dob, address, description, created_at, updated_at, deleted_at
        FROM users
        WHERE id = ? AND deleted_at IS NULL
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    row.map(UserRow::into_user).transpose()
}

/// Insert a user and return it with its assigned id
pub async fn create(pool: &SqlitePool, user: CreateUser) -> Result<User> {
    let now = Utc::now();
    let mut tx = pool.begin().await?;

    let result = sqlx::query(
        r#"
        INSERT INTO users (name, dob, address, description, created_at, updated_at)
        VALUES (?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&user.name)
    .bind(user.dob.to_string())
    .bind(&user.address)
    .bind(&user.description)
    .bind(now)
    .bind(now)
    .execute(&mut *tx)
    .await?;

    let id = result.last_insert_rowid();
    let created = fetch_any(&mut *tx, id)
        .await?
        .ok_or_else(|| StorageError::not_found(ENTITY, id))?;

    tx.commit().await?;

    tracing::debug!(user_id = id, "Created user");
    Ok(created)
}

/// Overwrite all mutable fields of a live user
///
/// Returns `StorageError::NotFound` if there is no live row for `id`.
pub async fn update(pool: &SqlitePool, id: UserId, user: UpdateUser) -> Result<User> {
    let raw_id = row_id(id).ok_or_else(|| StorageError::not_found(ENTITY, id))?;
    let now = Utc::now();
    let mut tx = pool.begin().await?;

    let result = sqlx::query(
        r#"
        UPDATE users
        SET name = ?, dob = ?, address = ?, description = ?, updated_at = ?
        WHERE id = ? AND deleted_at IS NULL
        "#,
    )
    .bind(&user.name)
    .bind(user.dob.map(|dob| dob.to_string()))
    .bind(&user.address)
    .bind(&user.description)
    .bind(now)
    .bind(raw_id)
    .execute(&mut *tx)
    .await?;

    if result.rows_affected() == 0 {
        return Err(StorageError::not_found(ENTITY, id));
    }

    let updated = fetch_any(&mut *tx, raw_id)
        .await?
        .ok_or_else(|| StorageError::not_found(ENTITY, id))?;

    tx.commit().await?;

    tracing::debug!(user_id = raw_id, "Updated user");
    Ok(updated)
}

/// Soft-delete a live user and return the deleted record
///
/// The row stays in the table with `deleted_at` set; it no longer shows up
/// in any query of this module except as the return value here.
pub async fn delete(pool: &SqlitePool, id: UserId) -> Result<User> {
    let raw_id = row_id(id).ok_or_else(|| StorageError::not_found(ENTITY, id))?;
    let now = Utc::now();
    let mut tx = pool.begin().await?;

    let result = sqlx::query("UPDATE users SET deleted_at = ? WHERE id = ? AND deleted_at IS NULL")
        .bind(now)
        .bind(raw_id)
        .execute(&mut *tx)
        .await?;

    if result.rows_affected() == 0 {
        return Err(StorageError::not_found(ENTITY, id));
    }

    let deleted = fetch_any(&mut *tx, raw_id)
        .await?
        .ok_or_else(|| StorageError::not_found(ENTITY, id))?;

    tx.commit().await?;

    tracing::debug!(user_id = raw_id, "Soft-deleted user");
    Ok(deleted)
}
