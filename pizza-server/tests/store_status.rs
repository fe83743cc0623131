//! Seeding, diagnostics, health and degraded-store behaviour

mod common;

use common::{app, degraded_state, empty_state, get, order_body, post_json, seeded_state};
use http::StatusCode;
use pizza_server::db::repository::PizzaRepository;
use pizza_server::db::seed::seed_pizzas;
use serde_json::json;

#[tokio::test]
async fn test_seeding_twice_no_duplicates() {
    let state = seeded_state().await;
    let repo = PizzaRepository::new(state.store.clone());
    assert_eq!(seed_pizzas(&repo).await.unwrap(), 0);

    let (_, body) = get(app(&state), "/api/pizzas").await;
    assert_eq!(body.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_diagnostics_connected() {
    let state = seeded_state().await;
    let (status, body) = get(app(&state), "/test").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["backend"], json!("✅ Running"));
    assert_eq!(body["database"], json!("✅ Connected & Working"));
    assert_eq!(body["database_url"], json!("❌ Not Set"));
    assert_eq!(body["database_name"], json!("pizza"));
    assert_eq!(body["connection_status"], json!("Connected"));
    assert!(
        body["collections"]
            .as_array()
            .unwrap()
            .contains(&json!("pizza"))
    );
}

#[tokio::test]
async fn test_diagnostics_empty_store() {
    let state = empty_state().await;
    let (_, body) = get(app(&state), "/test").await;
    assert_eq!(body["connection_status"], json!("Connected"));
    assert_eq!(body["collections"], json!([]));
}

#[tokio::test]
async fn test_health() {
    let state = seeded_state().await;
    let (status, body) = get(app(&state), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], json!("ok"));
    assert_eq!(body["database"], json!("connected"));
}

#[tokio::test]
async fn test_degraded_store() {
    let state = degraded_state();

    let (status, body) = get(app(&state), "/api/pizzas").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    let (status, _) = get(app(&state), "/api/pizzas/00000000000000000000").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = post_json(app(&state), "/api/orders", &order_body()).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["code"], json!(9003));

    let (status, body) = get(app(&state), "/test").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["connection_status"], json!("Not Connected"));
    assert_eq!(body["database"], json!("⚠️  Available but not initialized"));
    assert!(body["database_url"].is_null());

    let (_, body) = get(app(&state), "/health").await;
    assert_eq!(body["database"], json!("unavailable"));
}
