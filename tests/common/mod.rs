#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value as JsonValue;
use sqlx::SqlitePool;
use tower::ServiceExt;
use trood_backend::{
    config::Config,
    database::pool::{connect, run_migrations},
    routes::create_router,
    AppState,
};

pub async fn setup_pool() -> SqlitePool {
    let pool = connect("sqlite::memory:", 1).await.expect("pool");
    run_migrations(&pool).await.expect("migrations");
    pool
}

pub async fn setup_app() -> (Router, SqlitePool) {
    let pool = setup_pool().await;
    let app = create_router(AppState::new(pool.clone()), &Config::default()).expect("router");
    (app, pool)
}

pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<JsonValue>,
) -> (StatusCode, JsonValue) {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let resp = app.clone().oneshot(req).await.unwrap();
    read(resp).await
}

pub async fn send_raw(app: &Router, method: &str, uri: &str, body: &str) -> (StatusCode, JsonValue) {
    let req = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    read(resp).await
}

async fn read(resp: axum::response::Response) -> (StatusCode, JsonValue) {
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    let body = if bytes.is_empty() {
        JsonValue::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

pub async fn create_project(app: &Router, name: &str) -> i64 {
    let (status, body) = send(
        app,
        "POST",
        "/projects",
        Some(serde_json::json!({
            "name": name,
            "description": "desc",
            "deadline": "01.01.2026",
            "experience": "1+"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_i64().expect("project id")
}
