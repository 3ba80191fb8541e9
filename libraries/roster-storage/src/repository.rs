use crate::users;
use async_trait::async_trait;
use roster_core::{
    error::Result,
    repository::UserRepository,
    types::{CreateUser, UpdateUser, User, UserId},
};
use sqlx::SqlitePool;

/// `SQLite`-backed user repository
///
/// Cheap to clone; all clones share one connection pool.
#[derive(Clone)]
pub struct SqliteUserRepository {
    pool: SqlitePool,
}

impl SqliteUserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn create(&self, user: CreateUser) -> Result<User> {
        Ok(users::create(&self.pool, user).await?)
    }

    async fn get_by_id(&self, id: UserId) -> Result<Option<User>> {
        Ok(users::get_by_id(&self.pool, id).await?)
    }

    async fn list_all(&self) -> Result<Vec<User>> {
        Ok(users::get_all(&self.pool).await?)
    }

    async fn update(&self, id: UserId, user: UpdateUser) -> Result<User> {
        Ok(users::update(&self.pool, id, user).await?)
    }

    async fn delete(&self, id: UserId) -> Result<User> {
        Ok(users::delete(&self.pool, id).await?)
    }
}
