//! Diagnostics Handlers

use axum::{Json, extract::State};
use serde::Serialize;
use serde_json::{Value, json};

use crate::core::ServerState;

/// Upper bound on collection names reported
pub const MAX_COLLECTIONS: usize = 10;

/// Error text is cut to this many characters
const ERROR_PREVIEW_CHARS: usize = 50;

#[derive(Debug, Serialize)]
pub struct DiagnosticsResponse {
    pub backend: &'static str,
    pub database: String,
    pub database_url: Option<&'static str>,
    pub database_name: Option<String>,
    pub connection_status: &'static str,
    pub collections: Vec<String>,
}

/// GET /
pub async fn root() -> Json<Value> {
    Json(json!({ "message": "Pizza Delivery Backend running" }))
}

/// GET /test - 后端与数据库状态
pub async fn diagnostics(State(state): State<ServerState>) -> Json<DiagnosticsResponse> {
    let store = &state.store;

    if !store.is_connected() {
        return Json(DiagnosticsResponse {
            backend: "✅ Running",
            database: "⚠️  Available but not initialized".to_string(),
            database_url: None,
            database_name: None,
            connection_status: "Not Connected",
            collections: Vec::new(),
        });
    }

    let mut response = DiagnosticsResponse {
        backend: "✅ Running",
        database: "✅ Available".to_string(),
        database_url: Some(if state.config.store.url_from_env {
            "✅ Set"
        } else {
            "❌ Not Set"
        }),
        database_name: Some(store.database_name().to_string()),
        connection_status: "Connected",
        collections: Vec::new(),
    };

    match store.list_collections().await {
        Ok(mut names) => {
            names.truncate(MAX_COLLECTIONS);
            response.collections = names;
            response.database = "✅ Connected & Working".to_string();
        }
        Err(e) => {
            let preview: String = e.to_string().chars().take(ERROR_PREVIEW_CHARS).collect();
            tracing::warn!(error = %e, "Listing collections failed");
            response.database = format!("⚠️  Connected but Error: {preview}");
        }
    }

    Json(response)
}
