//! Pizza API 模块
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /api/pizzas | GET | 菜单列表 (`?category=` 精确匹配) |
//! | /api/pizzas/{pizza_id} | GET | 单个披萨 |
//! | /api/featured | GET | 推荐披萨 |

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .nest("/api/pizzas", routes())
        .route("/api/featured", get(handler::featured))
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list))
        .route("/{pizza_id}", get(handler::get_by_id))
}
