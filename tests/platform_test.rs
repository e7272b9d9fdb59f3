mod common;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
};
use common::{send, setup_app};
use tower::ServiceExt;

#[tokio::test]
async fn health_reports_ok() {
    let (app, _pool) = setup_app().await;

    let (status, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn health_hides_driver_error_text() {
    let (app, pool) = setup_app().await;
    pool.close().await;

    let (status, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, serde_json::json!({ "error": "Database unavailable" }));
}

#[tokio::test]
async fn openapi_document_lists_resources() {
    let (app, _pool) = setup_app().await;

    let (status, body) = send(&app, "GET", "/api-docs/openapi.json", None).await;
    assert_eq!(status, StatusCode::OK);
    let paths = body["paths"].as_object().expect("paths");
    for path in [
        "/projects",
        "/projects/{id}",
        "/projects/{id}/vacancies",
        "/vacancies/{id}",
    ] {
        assert!(paths.contains_key(path), "missing {}", path);
    }
}

#[tokio::test]
async fn preflight_from_configured_origin_is_allowed_and_cached() {
    let (app, _pool) = setup_app().await;

    let req = Request::builder()
        .method(Method::OPTIONS)
        .uri("/projects")
        .header(header::ORIGIN, "http://localhost:5173")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
        .body(Body::empty())
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();

    assert!(resp.status().is_success());
    let headers = resp.headers();
    assert_eq!(
        headers[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "http://localhost:5173"
    );
    assert_eq!(headers[header::ACCESS_CONTROL_MAX_AGE], "43200");
}

#[tokio::test]
async fn other_origins_get_no_cors_grant() {
    let (app, _pool) = setup_app().await;

    let req = Request::builder()
        .method(Method::GET)
        .uri("/projects")
        .header(header::ORIGIN, "http://evil.example")
        .body(Body::empty())
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .is_none());
}

#[tokio::test]
async fn configured_origin_gets_cors_grant_on_simple_request() {
    let (app, _pool) = setup_app().await;

    let req = Request::builder()
        .method(Method::GET)
        .uri("/projects")
        .header(header::ORIGIN, "http://localhost:5173")
        .body(Body::empty())
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "http://localhost:5173"
    );
}
