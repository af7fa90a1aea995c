//! End-to-end smoke tests for the full resmapd stack.
//!
//! Each test spins up the complete application (in-memory store, real
//! service, real axum router) and exercises the HTTP layer via
//! `tower::ServiceExt::oneshot` — no TCP port is bound.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::Response;
use http_body_util::BodyExt;
use resmap_adapter_http_axum::router;
use resmap_adapter_http_axum::state::AppState;
use resmap_adapter_store_memory::MemoryResourceStore;
use resmap_app::services::resource_service::ResourceService;
use serde_json::{Value, json};
use tower::ServiceExt;

/// Build a fully-wired router backed by an empty in-memory store.
fn app() -> axum::Router {
    router::build(AppState::new(ResourceService::new(
        MemoryResourceStore::new(),
    )))
}

/// Build a router whose store fails every operation with `message`.
fn faulty_app(message: &str) -> axum::Router {
    let store = MemoryResourceStore::new();
    store.fail_with(message);
    router::build(AppState::new(ResourceService::new(store)))
}

fn get_resources() -> Request<Body> {
    Request::builder()
        .uri("/api/resources")
        .body(Body::empty())
        .unwrap()
}

fn post_resource(body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/resources")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Health check
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_ok_when_health_check_called() {
    let resp = app()
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
}

// ---------------------------------------------------------------------------
// GET /api/resources
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_empty_array_when_store_empty() {
    let resp = app().oneshot(get_resources()).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, json!([]));
}

#[tokio::test]
async fn should_list_previously_created_resources() {
    let app = app();

    for name in ["Shelter A", "Shelter B"] {
        let resp = app
            .clone()
            .oneshot(post_resource(&json!({
                "name": name,
                "latitude": 40.7,
                "longitude": -74.0,
            })))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    let resp = app.oneshot(get_resources()).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    let names: Vec<&str> = rows.iter().map(|r| r["name"].as_str().unwrap()).collect();
    assert_eq!(names, ["Shelter A", "Shelter B"]);
}

// ---------------------------------------------------------------------------
// POST /api/resources — success
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_create_resource_and_return_it_with_id() {
    let resp = app()
        .oneshot(post_resource(&json!({
            "name": "Shelter A",
            "latitude": 40.7,
            "longitude": -74.0,
            "type": "shelter",
        })))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = body_json(resp).await;
    assert_eq!(body["name"], "Shelter A");
    assert_eq!(body["latitude"], 40.7);
    assert_eq!(body["longitude"], -74.0);
    assert_eq!(body["type"], "shelter");
    assert!(body["id"].as_str().is_some(), "id should be a non-null id");
}

#[tokio::test]
async fn should_create_resource_without_optional_type() {
    let resp = app()
        .oneshot(post_resource(&json!({
            "name": "Water Point",
            "latitude": 12.5,
            "longitude": 8.25,
        })))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = body_json(resp).await;
    assert_eq!(body["name"], "Water Point");
    assert!(body["type"].is_null());
}

// ---------------------------------------------------------------------------
// POST /api/resources — validation
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_reject_create_when_coordinates_missing() {
    let resp = app()
        .oneshot(post_resource(&json!({"name": "Shelter B"})))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(resp).await,
        json!({"error": "Missing required fields"})
    );
}

#[tokio::test]
async fn should_reject_create_when_name_missing() {
    let resp = app()
        .oneshot(post_resource(&json!({
            "latitude": 40.7,
            "longitude": -74.0,
        })))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(resp).await,
        json!({"error": "Missing required fields"})
    );
}

#[tokio::test]
async fn should_reject_create_when_name_empty() {
    let resp = app()
        .oneshot(post_resource(&json!({
            "name": "",
            "latitude": 40.7,
            "longitude": -74.0,
        })))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// Zero is treated as missing, not as a valid coordinate. Long-standing
// contract; clients rely on the 400.
#[tokio::test]
async fn should_reject_create_when_latitude_is_zero() {
    let resp = app()
        .oneshot(post_resource(&json!({
            "name": "Null Island Camp",
            "latitude": 0,
            "longitude": -74.0,
        })))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(resp).await,
        json!({"error": "Missing required fields"})
    );
}

#[tokio::test]
async fn should_reject_create_when_longitude_is_zero() {
    let resp = app()
        .oneshot(post_resource(&json!({
            "name": "Null Island Camp",
            "latitude": 40.7,
            "longitude": 0,
        })))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn should_not_touch_store_when_validation_fails() {
    let app = app();

    let resp = app
        .clone()
        .oneshot(post_resource(&json!({"name": "Shelter B"})))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let resp = app.oneshot(get_resources()).await.unwrap();
    assert_eq!(body_json(resp).await, json!([]));
}

// ---------------------------------------------------------------------------
// Store failures
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_relay_store_error_on_list() {
    let resp = faulty_app("simulated outage")
        .oneshot(get_resources())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_json(resp).await, json!({"error": "simulated outage"}));
}

#[tokio::test]
async fn should_relay_store_error_on_create() {
    let resp = faulty_app("simulated outage")
        .oneshot(post_resource(&json!({
            "name": "Shelter A",
            "latitude": 40.7,
            "longitude": -74.0,
        })))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_json(resp).await, json!({"error": "simulated outage"}));
}

// ---------------------------------------------------------------------------
// Framework defaults
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_reject_malformed_json_body() {
    let resp = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/resources")
                .header("content-type", "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(resp.status().is_client_error());
}

#[tokio::test]
async fn should_reject_unsupported_method() {
    let resp = app()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/api/resources")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
}
