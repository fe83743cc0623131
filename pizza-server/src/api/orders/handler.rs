//! Order API Handlers

use axum::{Json, extract::State};

use crate::core::ServerState;
use crate::db::repository::OrderRepository;
use crate::utils::{AppResult, ValidatedJson};
use shared::models::{Order, OrderReceipt};

/// POST /api/orders - 下单
///
/// The receipt reports `"received"`; the stored order keeps its own status.
pub async fn create(
    State(state): State<ServerState>,
    ValidatedJson(order): ValidatedJson<Order>,
) -> AppResult<Json<OrderReceipt>> {
    let repo = OrderRepository::new(state.store.clone());
    let id = repo.create(&order).await?;
    Ok(Json(OrderReceipt::received(id)))
}
