//! Repository trait for user persistence

use crate::error::Result;
use crate::types::{CreateUser, UpdateUser, User, UserId};
use async_trait::async_trait;

/// Persistence operations for users
///
/// Implementations only see validated input. Reads and writes ignore
/// soft-deleted rows, so a deleted user behaves exactly like one that
/// never existed.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user; the store assigns the id
    async fn create(&self, user: CreateUser) -> Result<User>;

    /// Get a live user by id
    async fn get_by_id(&self, id: UserId) -> Result<Option<User>>;

    /// Get all live users, ordered by id
    async fn list_all(&self) -> Result<Vec<User>>;

    /// Overwrite every mutable field of an existing user
    ///
    /// Fails with `RosterError::NotFound` when `id` has no live row; it
    /// never inserts.
    async fn update(&self, id: UserId, user: UpdateUser) -> Result<User>;

    /// Soft-delete a user and return the deleted record
    async fn delete(&self, id: UserId) -> Result<User>;
}
