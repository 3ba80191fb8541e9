/// Common test utilities and fixtures
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use roster_server::{create_router, AppState};
use roster_storage::SqliteUserRepository;
use std::sync::Arc;
use tempfile::TempDir;
use tower::util::ServiceExt;

/// Router backed by a fresh SQLite file; keep the `TempDir` alive for the test
pub async fn create_test_app() -> (Router, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let db_url = format!("sqlite://{}", temp_dir.path().join("test.db").display());

    let pool = roster_storage::create_pool(&db_url, 5).await.unwrap();
    roster_storage::run_migrations(&pool).await.unwrap();

    let state = AppState::new(Arc::new(SqliteUserRepository::new(pool)));
    (create_router(state), temp_dir)
}

/// Send one request and return the status and the parsed JSON body
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<&str>,
) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if body.is_some() {
        builder = builder.header(header::CONTENT_TYPE, "application/json");
    }
    let request = builder
        .body(body.map_or_else(Body::empty, |b| Body::from(b.to_string())))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, json)
}

/// Create a user through the API and return its id
pub async fn create_user(app: &Router, name: &str, dob: &str) -> u64 {
    let body = serde_json::json!({
        "name": name,
        "dob": dob,
        "address": format!("{} Road", name),
        "description": format!("about {}", name),
    });

    let (status, json) = send(app, "POST", "/user", Some(&body.to_string())).await;
    assert_eq!(status, StatusCode::OK, "create failed: {}", json);

    json["id"].as_u64().unwrap()
}
