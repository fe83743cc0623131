//! Shared helpers: in-process app driven through Tower's oneshot

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use pizza_server::{Config, DocumentStore, ServerState, build_app};

/// Fresh in-memory store with the sample menu
pub async fn seeded_state() -> ServerState {
    ServerState::initialize(&Config::in_memory()).await
}

/// Fresh in-memory store, nothing inserted
pub async fn empty_state() -> ServerState {
    let mut config = Config::in_memory();
    config.seed_on_startup = false;
    ServerState::initialize(&config).await
}

/// Store that never connected
pub fn degraded_state() -> ServerState {
    ServerState::new(Config::in_memory(), DocumentStore::disconnected("pizza"))
}

pub async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: &Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

pub fn app(state: &ServerState) -> Router {
    build_app(state.clone())
}

pub fn order_body() -> Value {
    serde_json::json!({
        "customer": { "name": "Ada", "phone": "555-0100", "address": "1 Loop Rd" },
        "items": [{
            "pizza_id": "anything",
            "name": "Margherita",
            "size": "Large",
            "unit_price": 12.5,
            "quantity": 2
        }],
        "subtotal": 25.0,
        "delivery_fee": 2.5,
        "total": 27.5
    })
}
