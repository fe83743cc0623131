//! 诊断路由
//!
//! `GET /test` reports backend and store status. It never fails; store
//! problems are described in the body.

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::root))
        .route("/test", get(handler::diagnostics))
}
