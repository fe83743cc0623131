//! 健康检查路由
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /health | GET | 存活检查 + 数据库状态 |
//!
//! ```json
//! { "status": "ok", "version": "0.1.0", "database": "connected" }
//! ```

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/health", get(health))
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// 服务状态 (始终为 ok)
    status: &'static str,
    version: &'static str,
    /// connected | unavailable
    database: &'static str,
}

/// 基础健康检查
///
/// The service answers even when the store is down; `database` tells which.
pub async fn health(State(state): State<ServerState>) -> Json<HealthResponse> {
    let database = match state.store.ping().await {
        Ok(()) => "connected",
        Err(e) => {
            tracing::debug!(error = %e, "Health check: store not reachable");
            "unavailable"
        }
    };

    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        database,
    })
}
