//! Pizza API Handlers

use axum::{
    Json,
    extract::{Path, Query, State, rejection::QueryRejection},
};
use serde_json::Value;

use crate::api::convert::{to_serializable, to_serializable_all};
use crate::core::ServerState;
use crate::db::DocumentId;
use crate::db::repository::{PizzaRepository, pizza::TABLE};
use crate::utils::{AppError, AppResult, ErrorCode};

/// `category` filter from the query string
///
/// When the parameter repeats, the last value wins. An empty value means no
/// filter.
fn category_filter(params: &[(String, String)]) -> Option<&str> {
    params
        .iter()
        .rev()
        .find(|(key, _)| key == "category")
        .map(|(_, value)| value.as_str())
        .filter(|c| !c.is_empty())
}

/// GET /api/pizzas - 获取菜单
pub async fn list(
    State(state): State<ServerState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> AppResult<Json<Vec<Value>>> {
    let Query(params) = query.map_err(|e| AppError::invalid_request(e.body_text()))?;
    let repo = PizzaRepository::new(state.store.clone());
    let pizzas = repo.find_all(category_filter(&params)).await?;
    Ok(Json(to_serializable_all(pizzas)))
}

/// GET /api/pizzas/{pizza_id} - 获取单个披萨
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(pizza_id): Path<String>,
) -> AppResult<Json<Value>> {
    let id = DocumentId::parse(TABLE, &pizza_id).map_err(|e| {
        tracing::debug!(pizza_id = %pizza_id, error = %e, "Rejected pizza id");
        AppError::invalid_id(&pizza_id)
    })?;

    let repo = PizzaRepository::new(state.store.clone());
    let pizza = repo.find_by_id(&id).await?;
    to_serializable(pizza)
        .map(Json)
        .ok_or_else(|| AppError::new(ErrorCode::PizzaNotFound))
}

/// GET /api/featured - 推荐披萨
pub async fn featured(State(state): State<ServerState>) -> AppResult<Json<Vec<Value>>> {
    let repo = PizzaRepository::new(state.store.clone());
    let pizzas = repo.find_featured().await?;
    Ok(Json(to_serializable_all(pizzas)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_category_filter() {
        assert_eq!(category_filter(&params(&[])), None);
        assert_eq!(category_filter(&params(&[("category", "")])), None);
        assert_eq!(
            category_filter(&params(&[("category", "vegan")])),
            Some("vegan")
        );
        assert_eq!(
            category_filter(&params(&[("category", "classic"), ("category", "vegan")])),
            Some("vegan")
        );
        assert_eq!(
            category_filter(&params(&[("sort", "name"), ("category", "classic")])),
            Some("classic")
        );
    }
}
