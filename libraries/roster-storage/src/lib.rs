//! Roster Storage
//!
//! `SQLite` persistence for the Roster user service.
//!
//! # Architecture
//!
//! - **Versioned schema**: migrations under `migrations/` are embedded and
//!   applied by [`run_migrations`]
//! - **Vertical slice**: the [`users`] module owns its queries and row mapping
//! - **Repository**: [`SqliteUserRepository`] exposes the slice through the
//!   `roster_core::UserRepository` trait
//!
//! # Example
//!
//! ```rust,no_run
//! use roster_storage::{create_pool, run_migrations, SqliteUserRepository};
//! use roster_core::UserRepository;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = create_pool("sqlite://users.db", 5).await?;
//! run_migrations(&pool).await?;
//!
//! let repo = SqliteUserRepository::new(pool);
//! let users = repo.list_all().await?;
//! # Ok(())
//! # }
//! ```

mod error;
mod repository;

// Vertical slices
pub mod users;

pub use error::{Result, StorageError};
pub use repository::SqliteUserRepository;

use sqlx::migrate::Migrator;
use sqlx::sqlite::SqlitePool;

// Embed migrations into binary
static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Run database migrations
///
/// This should be called once when the application starts to ensure
/// the database schema is up to date.
///
/// # Errors
///
/// Returns `StorageError::Migration` if migrations fail to run, including
/// when an already-applied migration no longer matches its recorded checksum
pub async fn run_migrations(pool: &SqlitePool) -> Result<()> {
    MIGRATOR.run(pool).await?;
    tracing::info!("Database migrations applied");
    Ok(())
}

/// Create a new `SQLite` pool
///
/// # Arguments
///
/// * `database_url` - `SQLite` connection string (e.g., `<sqlite://users.db>`)
/// * `max_connections` - Upper bound on pooled connections
///
/// # Errors
///
/// Returns an error if the connection fails
pub async fn create_pool(
    database_url: &str,
    max_connections: u32,
) -> std::result::Result<SqlitePool, sqlx::Error> {
    use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
    use std::str::FromStr;

    tracing::debug!(database_url, "Creating SQLite pool");

    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(std::time::Duration::from_secs(30));

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;

    tracing::debug!(max_connections, "SQLite pool created");

    Ok(pool)
}
