//! API 路由模块
//!
//! - [`diagnostics`] - 根路径与 `/test` 诊断
//! - [`health`] - 健康检查
//! - [`pizzas`] - 菜单接口
//! - [`orders`] - 下单接口

pub mod convert;

pub mod diagnostics;
pub mod health;
pub mod orders;
pub mod pizzas;

use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::core::ServerState;

/// 所有路由 (未绑定状态)
pub fn build_router() -> Router<ServerState> {
    Router::new()
        .merge(diagnostics::router())
        .merge(health::router())
        .merge(pizzas::router())
        .merge(orders::router())
}

/// 完整应用: 路由 + 状态 + 中间件
///
/// CORS is fully permissive.
pub fn build_app(state: ServerState) -> Router {
    build_router()
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
}
