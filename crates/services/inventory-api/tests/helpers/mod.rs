#![allow(dead_code)]

use std::path::Path;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::SqlitePool;
use tower::ServiceExt;

use inventory_api::config::DatabaseConfig;
use inventory_api::{create_router, DbPool};

/// Fresh, migrated in-memory database. Each call gets its own database.
pub async fn setup_test_db() -> SqlitePool {
    let db = DbPool::new(&DatabaseConfig::in_memory())
        .await
        .expect("Failed to create in-memory database");

    db.run_migrations().await.expect("Failed to run migrations");

    db.inner().clone()
}

/// Migrated database file in `dir`, shared by up to `max_connections`
/// connections.
pub async fn setup_file_db(dir: &Path, max_connections: u32) -> SqlitePool {
    let config = DatabaseConfig {
        url: format!("sqlite://{}", dir.join("inventory.db").display()),
        max_connections,
        ..DatabaseConfig::default()
    };

    let db = DbPool::new(&config)
        .await
        .expect("Failed to create database file");

    db.run_migrations().await.expect("Failed to run migrations");

    db.inner().clone()
}

pub fn create_test_app(pool: SqlitePool) -> Router {
    create_router(pool)
}

/// Sends one request and returns the status with the parsed JSON body
/// (`Value::Null` for an empty body).
pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);

    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    respond(app, request).await
}

/// Like `send`, but with a raw JSON-typed body that need not parse.
pub async fn send_raw(app: &Router, method: &str, uri: &str, body: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    respond(app, request).await
}

async fn respond(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();

    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            panic!("Non-JSON response body: {}", String::from_utf8_lossy(&bytes))
        })
    };

    (status, value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_setup_test_db() {
        let pool = setup_test_db().await;
        assert!(sqlx::query("SELECT 1").execute(&pool).await.is_ok());
    }
}
