//! Order Repository

use super::{BaseRepository, RepoResult};
use crate::db::{Document, DocumentId, DocumentStore};
use shared::models::Order;

pub const TABLE: &str = "order";

#[derive(Clone)]
pub struct OrderRepository {
    base: BaseRepository,
}

impl OrderRepository {
    pub fn new(store: DocumentStore) -> Self {
        Self {
            base: BaseRepository::new(store),
        }
    }

    /// Persist a validated order, returning its generated key
    pub async fn create(&self, order: &Order) -> RepoResult<String> {
        let id = self.base.store().create_document(TABLE, order).await?;
        tracing::info!(
            order_id = %id,
            items = order.items.len(),
            total = order.total,
            "Order stored"
        );
        Ok(id)
    }

    pub async fn find_by_id(&self, id: &DocumentId) -> RepoResult<Option<Document>> {
        self.base.store().find_document(TABLE, id).await
    }
}
