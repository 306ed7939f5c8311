#![allow(dead_code)]

//! Test infrastructure for uc-server API tests


pub use mock_store::MockUserStore;

use uc_core::User;
use uc_db::UserRepository;
use uc_server::AppState;

use std::sync::Arc;

use axum::{Router, body::Body, http::Request};
use chrono::Utc;
use http::StatusCode;
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tower::ServiceExt;

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new().filename(":memory:");

    let pool = SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect_with(options)
        .await
        .expect("Failed to create test database");

    uc_db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// AppState backed by a fresh in-memory SQLite store
pub async fn create_sqlite_app_state() -> AppState {
    let pool = create_test_pool().await;
    AppState::new(Arc::new(UserRepository::new(pool)))
}

/// AppState backed by the given mock
pub fn create_mock_app_state(mock: &Arc<MockUserStore>) -> AppState {
    AppState::new(mock.clone())
}

/// Build a user the way the store would have persisted it
pub fn test_user(id: i64, name: &str, email: &str) -> User {
    let now = Utc::now();
    User {
        id,
        name: name.to_string(),
        email: email.to_string(),
        created_at: now,
        updated_at: now,
        deleted_at: None,
    }
}

/// Send one request through the router and return status + raw body text
pub async fn send(app: Router, method: &str, uri: &str, body: Option<&str>) -> (StatusCode, String) {
    let builder = Request::builder().method(method).uri(uri);

    let request = match body {
        Some(payload) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(payload.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();

    (status, String::from_utf8(bytes.to_vec()).unwrap())
}
