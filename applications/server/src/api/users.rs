/// Users API routes
use crate::{error::Result, error::ServerError, state::AppState};
use axum::{
    body::Bytes,
    extract::{Path, State},
    Json,
};
use roster_core::types::{NewUser, User, UserChanges, UserId, INVALID_ID};
use serde::de::DeserializeOwned;

const INVALID_PAYLOAD: &str = "invalid request payload";

/// Parse a path segment as a base-10 user id
fn parse_id(raw: &str) -> Result<UserId> {
    raw.parse::<UserId>()
        .map_err(|_| ServerError::BadRequest(INVALID_ID.to_string()))
}

/// Decode a JSON body regardless of the declared content type
fn decode_payload<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    serde_json::from_slice(body).map_err(|e| {
        tracing::debug!("Rejected request payload: {}", e);
        ServerError::BadRequest(INVALID_PAYLOAD.to_string())
    })
}

/// GET /user/:id
/// Get a single user
pub async fn get_user(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
) -> Result<Json<User>> {
    let id = parse_id(&id)?;

    let user = app_state
        .users
        .get_by_id(id)
        .await?
        .ok_or_else(|| ServerError::NotFound(format!("User not found: {}", id)))?;

    Ok(Json(user))
}

/// GET /users
/// List every user
pub async fn list_users(State(app_state): State<AppState>) -> Result<Json<Vec<User>>> {
    let users = app_state.users.list_all().await?;
    Ok(Json(users))
}

/// POST /user
/// Create a user; the store assigns the id
pub async fn create_user(State(app_state): State<AppState>, body: Bytes) -> Result<Json<User>> {
    let payload: NewUser = decode_payload(&body)?;
    let user = payload.validate()?;

    let created = app_state.users.create(user).await?;
    tracing::info!(user_id = %created.id, "User created");

    Ok(Json(created))
}

/// PUT /user/:id
/// Overwrite a user; the path id wins over any id in the body
pub async fn update_user(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
    body: Bytes,
) -> Result<Json<User>> {
    let id = parse_id(&id)?;
    let changes: UserChanges = decode_payload(&body)?;
    let user = changes.validate(id)?;

    let updated = app_state.users.update(id, user).await?;
    tracing::info!(user_id = %id, "User updated");

    Ok(Json(updated))
}

/// DELETE /user/:id
/// Soft-delete a user and echo the deleted record
pub async fn delete_user(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
) -> Result<Json<User>> {
    let id = parse_id(&id)?;

    let deleted = app_state.users.delete(id).await?;
    tracing::info!(user_id = %id, "User deleted");

    Ok(Json(deleted))
}
