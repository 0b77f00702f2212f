#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use classrate_api::config::ServerConfig;
use classrate_api::router::build_app_router;
use classrate_api::sessions::SessionRosters;
use classrate_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and the built-in roster.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        roster_path: None,
        session_capacity: 16,
    }
}

/// Fresh state over the built-in roster, an empty ledger and a seeded
/// session cache.
pub fn test_state() -> AppState {
    let config = test_config();
    let roster = classrate_db::load_roster(None).unwrap();
    let mut state = AppState::new(roster, config.clone());
    state.sessions = std::sync::Arc::new(SessionRosters::with_seed(config.session_capacity, 7));
    state
}

/// Build the full application router over `state`.
///
/// The state is cloned into the router, so callers can keep a handle to the
/// same ledger and inspect it after requests.
pub fn build_test_app(state: &AppState) -> Router {
    build_app_router(state.clone(), &test_config())
}

pub async fn send(app: Router, method: Method, uri: &str, body: Body) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(body)
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, Body::empty()).await
}

pub async fn post_json(app: Router, uri: &str, json: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Body::from(json.to_string())).await
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// A valid rating payload for `person_id`.
pub fn rating_payload(person_id: &str, scores: [i64; 4]) -> serde_json::Value {
    serde_json::json!({
        "personId": person_id,
        "beauty": scores[0],
        "funny": scores[1],
        "personality": scores[2],
        "intelligence": scores[3],
    })
}
