//! Pizza Repository

use super::{BaseRepository, RepoResult};
use crate::db::{Document, DocumentId, DocumentStore, Filter};
use shared::models::Pizza;

pub const TABLE: &str = "pizza";

#[derive(Clone)]
pub struct PizzaRepository {
    base: BaseRepository,
}

impl PizzaRepository {
    pub fn new(store: DocumentStore) -> Self {
        Self {
            base: BaseRepository::new(store),
        }
    }

    pub fn store(&self) -> &DocumentStore {
        self.base.store()
    }

    /// Find all pizzas, optionally restricted to one category (exact match)
    pub async fn find_all(&self, category: Option<&str>) -> RepoResult<Vec<Document>> {
        let filter = match category {
            Some(category) => Filter::new().eq("category", category),
            None => Filter::new(),
        };
        self.base.store().get_documents(TABLE, &filter).await
    }

    /// Find pizzas flagged as popular
    pub async fn find_featured(&self) -> RepoResult<Vec<Document>> {
        self.base
            .store()
            .get_documents(TABLE, &Filter::new().eq("is_popular", true))
            .await
    }

    pub async fn find_by_id(&self, id: &DocumentId) -> RepoResult<Option<Document>> {
        self.base.store().find_document(TABLE, id).await
    }

    /// Create a new pizza, returning its generated key
    pub async fn create(&self, pizza: &Pizza) -> RepoResult<String> {
        self.base.store().create_document(TABLE, pizza).await
    }

    pub async fn count(&self) -> RepoResult<usize> {
        self.base.store().count_documents(TABLE).await
    }
}
