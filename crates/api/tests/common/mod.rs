//! Shared helpers for HTTP-level integration tests.
//!
//! Uses Axum's `tower::ServiceExt` to send requests directly to the
//! router without an actual TCP listener, through the same middleware
//! stack production uses.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use inkstone_api::config::ServerConfig;
use inkstone_api::router::build_app_router;
use inkstone_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
    }
}

/// Build the full application router with all middleware layers, using
/// the given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Send a GET request.
pub async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(
        Request::builder()
            .uri(uri)
            .body(Body::empty())
            .expect("request"),
    )
    .await
    .expect("response")
}

/// Send a POST request with a JSON body.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("request"),
    )
    .await
    .expect("response")
}

/// Send a PUT request with a JSON body.
pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    app.oneshot(
        Request::builder()
            .method("PUT")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("request"),
    )
    .await
    .expect("response")
}

/// Collect a response body as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("valid JSON body")
}

/// Seed a writer, a genre, and a novel over HTTP; returns
/// `(author_id, genre_id, novel_id)`.
pub async fn seed_novel_over_http(pool: &PgPool, tag: &str) -> (i64, i64, i64) {
    let author = body_json(post_json(
        build_test_app(pool.clone()),
        "/api/v1/users",
        serde_json::json!({
            "username": format!("writer_{tag}"),
            "email": format!("writer_{tag}@example.com"),
            "password": "secret",
            "role": "writer",
        }),
    )
    .await)
    .await;
    let author_id = author["data"]["id"].as_i64().expect("author id");

    let genre = body_json(post_json(
        build_test_app(pool.clone()),
        "/api/v1/genres",
        serde_json::json!({
            "name": format!("genre {tag}"),
            "slug": format!("genre-{tag}"),
        }),
    )
    .await)
    .await;
    let genre_id = genre["data"]["id"].as_i64().expect("genre id");

    let novel = body_json(post_json(
        build_test_app(pool.clone()),
        "/api/v1/novels",
        serde_json::json!({
            "title": format!("Novel {tag}"),
            "slug": format!("novel-{tag}"),
            "author_id": author_id,
            "genre_id": genre_id,
        }),
    )
    .await)
    .await;
    let novel_id = novel["data"]["id"].as_i64().expect("novel id");

    (author_id, genre_id, novel_id)
}
