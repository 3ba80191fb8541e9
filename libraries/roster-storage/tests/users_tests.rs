//! Integration tests for the users vertical slice
//!
//! Covers:
//! - Id assignment and read-back
//! - Full-overwrite updates, including clearing the date of birth
//! - Soft delete visibility
//! - The repository trait over the same pool


use roster_core::types::{DateOfBirth, UpdateUser, UserId};
use roster_core::{RosterError, UserRepository};
use roster_storage::{users, SqliteUserRepository, StorageError};
use test_helpers::*;

#[tokio::test]
async fn test_create_assigns_increasing_ids() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let first = users::create(pool, create_user_input("alice")).await.unwrap();
    let second = users::create(pool, create_user_input("bob")).await.unwrap();

    assert!(first.id.get() > 0);
    assert!(second.id.get() > first.id.get());
    assert_eq!(first.name, "alice");
    assert_eq!(first.dob, DateOfBirth::from_ymd(1990, 4, 12));
    assert!(!first.timestamps.is_deleted());
}

#[tokio::test]
async fn test_get_by_id_round_trip() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let created = users::create(pool, create_user_input("carol")).await.unwrap();
    let fetched = users::get_by_id(pool, created.id).await.unwrap().unwrap();

    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_get_by_id_unknown_is_none() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    assert!(users::get_by_id(pool, UserId::new(12345)).await.unwrap().is_none());
    assert!(users::get_by_id(pool, UserId::new(u64::MAX)).await.unwrap().is_none());
}

#[tokio::test]
async fn test_get_all_orders_by_id() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    assert!(users::get_all(pool).await.unwrap().is_empty());

    let mut ids = Vec::new();
    for name in ["zoe", "adam", "mia"] {
        ids.push(users::create(pool, create_user_input(name)).await.unwrap().id);
    }

    let all = users::get_all(pool).await.unwrap();
    let listed: Vec<UserId> = all.iter().map(|u| u.id).collect();
    assert_eq!(listed, ids);
}

#[tokio::test]
async fn test_update_overwrites_every_field() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let created = users::create(pool, create_user_input("dave")).await.unwrap();

    let updated = users::update(
        pool,
        created.id,
        UpdateUser {
            name: "David".to_string(),
            dob: None,
            address: String::new(),
            description: "renamed".to_string(),
        },
    )
    .await
    .unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "David");
    assert_eq!(updated.dob, None);
    assert_eq!(updated.address, "");
    assert_eq!(updated.description, "renamed");
    assert_eq!(updated.timestamps.created_at, created.timestamps.created_at);
    assert!(updated.timestamps.updated_at >= created.timestamps.updated_at);

    let fetched = users::get_by_id(pool, created.id).await.unwrap().unwrap();
    assert_eq!(fetched, updated);
}

#[tokio::test]
async fn test_update_unknown_id_does_not_insert() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let err = users::update(
        pool,
        UserId::new(77),
        UpdateUser {
            name: "ghost".to_string(),
            dob: None,
            address: String::new(),
            description: String::new(),
        },
    )
    .await
    .unwrap_err();

    assert!(matches!(err, StorageError::NotFound { .. }));
    assert!(users::get_all(pool).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_delete_is_soft() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let created = users::create(pool, create_user_input("erin")).await.unwrap();
    let deleted = users::delete(pool, created.id).await.unwrap();

    assert_eq!(deleted.id, created.id);
    assert_eq!(deleted.name, created.name);
    assert!(deleted.timestamps.is_deleted());

    // Hidden from reads
    assert!(users::get_by_id(pool, created.id).await.unwrap().is_none());
    assert!(users::get_all(pool).await.unwrap().is_empty());

    // Row is still on disk
    let remaining: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE deleted_at IS NOT NULL")
        .fetch_one(pool)
        .await
        .unwrap();
    assert_eq!(remaining, 1);

    // A second delete and an update both see nothing
    assert!(matches!(
        users::delete(pool, created.id).await,
        Err(StorageError::NotFound { .. })
    ));
    assert!(matches!(
        users::update(
            pool,
            created.id,
            UpdateUser {
                name: "back".to_string(),
                dob: None,
                address: String::new(),
                description: String::new(),
            },
        )
        .await,
        Err(StorageError::NotFound { .. })
    ));
}

#[tokio::test]
async fn test_ids_are_not_reused_after_delete() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let first = users::create(pool, create_user_input("fay")).await.unwrap();
    users::delete(pool, first.id).await.unwrap();
    let second = users::create(pool, create_user_input("gus")).await.unwrap();

    assert!(second.id.get() > first.id.get());
}

#[tokio::test]
async fn test_migrations_are_idempotent() {
    let test_db = TestDb::new().await;

    roster_storage::run_migrations(test_db.pool()).await.unwrap();
}

#[tokio::test]
async fn test_modified_migration_history_is_rejected() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    sqlx::query("UPDATE _sqlx_migrations SET checksum = x'00'")
        .execute(pool)
        .await
        .unwrap();

    let err = roster_storage::run_migrations(pool).await.unwrap_err();
    assert!(matches!(err, StorageError::Migration(_)));

    let err: RosterError = err.into();
    assert!(matches!(err, RosterError::Storage(_)));
}

#[tokio::test]
async fn test_repository_lists_live_users() {
    let test_db = TestDb::new().await;
    let repo = SqliteUserRepository::new(test_db.pool().clone());

    let kept = repo.create(create_user_input("ivy")).await.unwrap();
    let gone = repo.create(create_user_input("jon")).await.unwrap();
    repo.delete(gone.id).await.unwrap();

    let listed = repo.list_all().await.unwrap();
    assert_eq!(listed, vec![kept]);
}

#[tokio::test]
async fn test_repository_maps_not_found() {
    let test_db = TestDb::new().await;
    let repo = SqliteUserRepository::new(test_db.pool().clone());

    let created = repo.create(create_user_input("hal")).await.unwrap();
    assert_eq!(repo.list_all().await.unwrap().len(), 1);
    assert_eq!(repo.get_by_id(created.id).await.unwrap(), Some(created.clone()));

    repo.delete(created.id).await.unwrap();

    let err = repo.delete(created.id).await.unwrap_err();
    assert!(matches!(err, RosterError::NotFound { .. }));
    assert_eq!(err.to_string(), format!("User not found: {}", created.id));
}

#[tokio::test]
async fn test_concurrent_creates_get_unique_ids() {
    let test_db = TestDb::new().await;
    let repo = SqliteUserRepository::new(test_db.pool().clone());

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let repo = repo.clone();
            tokio::spawn(async move { repo.create(create_user_input(&format!("user{}", i))).await })
        })
        .collect();

    let mut ids = Vec::new();
    for handle in handles {
        ids.push(handle.await.unwrap().unwrap().id);
    }
    ids.sort();
    ids.dedup();

    assert_eq!(ids.len(), 8);
}
