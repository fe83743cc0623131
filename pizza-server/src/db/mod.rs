//! Database Module
//!
//! Document store adapter over SurrealDB. One handle is built at startup
//! and shared by every request; see [`DocumentStore`].

pub mod id;
pub mod repository;
pub mod seed;

pub use id::{DocumentId, IdError};
pub use repository::{RepoError, RepoResult};

use std::time::Duration;

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use surrealdb::Surreal;
use surrealdb::engine::any::{self, Any};
use surrealdb::opt::auth::Root;

use crate::core::config::StoreConfig;

/// Field carrying the store-assigned key on documents read back
pub const ID_FIELD: &str = "_id";

/// A stored record as returned by the store: its fields plus [`ID_FIELD`]
pub type Document = Map<String, Value>;

/// Exact-match filter; every field must equal its value
#[derive(Debug, Clone, Default)]
pub struct Filter {
    fields: Vec<(String, Value)>,
}

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn eq(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.push((field.into(), value.into()));
        self
    }

    /// `WHERE` clause with `$f0..$fn` placeholders, or an empty string
    fn where_clause(&self) -> RepoResult<String> {
        if self.fields.is_empty() {
            return Ok(String::new());
        }

        let mut clauses = Vec::with_capacity(self.fields.len());
        for (i, (field, _)) in self.fields.iter().enumerate() {
            if !is_plain_ident(field) {
                return Err(RepoError::InvalidFilter(field.clone()));
            }
            clauses.push(format!("{field} = $f{i}"));
        }
        Ok(format!(" WHERE {}", clauses.join(" AND ")))
    }
}

fn is_plain_ident(field: &str) -> bool {
    let mut chars = field.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[derive(Deserialize)]
struct CountRow {
    count: usize,
}

/// Document store handle
///
/// Wraps an optional SurrealDB connection. When the connection could not be
/// established, or is lost later, the handle runs degraded: reads return
/// empty results and writes fail with [`RepoError::Unavailable`]. Cloning is
/// cheap.
#[derive(Clone)]
pub struct DocumentStore {
    db: Option<Surreal<Any>>,
    database_name: String,
}

impl std::fmt::Debug for DocumentStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentStore")
            .field("connected", &self.is_connected())
            .field("database_name", &self.database_name)
            .finish()
    }
}

impl DocumentStore {
    /// Connect using `config`, falling back to degraded mode on failure
    pub async fn connect(config: &StoreConfig) -> Self {
        let timeout = Duration::from_millis(config.connect_timeout_ms);
        match tokio::time::timeout(timeout, Self::open(config)).await {
            Ok(Ok(db)) => {
                tracing::info!(
                    url = %config.url,
                    namespace = %config.namespace,
                    database = %config.database,
                    "Document store connected"
                );
                Self {
                    db: Some(db),
                    database_name: config.database.clone(),
                }
            }
            Ok(Err(e)) => {
                tracing::warn!(error = %e, url = %config.url, "Document store unavailable, running degraded");
                Self::disconnected(&config.database)
            }
            Err(_) => {
                tracing::warn!(
                    url = %config.url,
                    timeout_ms = config.connect_timeout_ms,
                    "Document store connection timed out, running degraded"
                );
                Self::disconnected(&config.database)
            }
        }
    }

    async fn open(config: &StoreConfig) -> Result<Surreal<Any>, surrealdb::Error> {
        let db = any::connect(config.url.as_str()).await?;
        if let (Some(username), Some(password)) = (&config.username, &config.password) {
            db.signin(Root {
                username: username.as_str(),
                password: password.as_str(),
            })
            .await?;
        }
        db.use_ns(config.namespace.as_str())
            .use_db(config.database.as_str())
            .await?;
        Ok(db)
    }

    /// A handle with no connection behind it
    pub fn disconnected(database_name: &str) -> Self {
        Self {
            db: None,
            database_name: database_name.to_string(),
        }
    }

    pub fn is_connected(&self) -> bool {
        self.db.is_some()
    }

    pub fn database_name(&self) -> &str {
        &self.database_name
    }

    /// Insert one record; returns the key the store generated for it
    ///
    /// `created_at`/`updated_at` are stamped on the stored record.
    pub async fn create_document<T: Serialize>(
        &self,
        collection: &str,
        data: &T,
    ) -> RepoResult<String> {
        let db = self.db.as_ref().ok_or(RepoError::Unavailable)?;

        let mut content = match serde_json::to_value(data)? {
            Value::Object(map) => map,
            other => {
                return Err(RepoError::Serialization(format!(
                    "document must be an object, got {other}"
                )));
            }
        };
        content.remove(ID_FIELD);
        content.remove("id");
        let now = Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true);
        content.insert("created_at".into(), Value::String(now.clone()));
        content.insert("updated_at".into(), Value::String(now));

        let mut response = db
            .query("CREATE type::table($table) CONTENT $data RETURN VALUE record::id(id)")
            .bind(("table", collection.to_string()))
            .bind(("data", Value::Object(content)))
            .await?;
        let keys: Vec<String> = response.take(0)?;

        let key = keys
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::Database(format!("Failed to create {collection} document")))?;
        tracing::debug!(collection, id = %key, "Document created");
        Ok(key)
    }

    /// All records of `collection` matching `filter`, in no particular order
    pub async fn get_documents(
        &self,
        collection: &str,
        filter: &Filter,
    ) -> RepoResult<Vec<Document>> {
        let where_clause = filter.where_clause()?;
        let Some(db) = self.db.as_ref() else {
            tracing::debug!(collection, "Store unavailable, returning no documents");
            return Ok(Vec::new());
        };

        let sql = format!(
            "SELECT *, record::id(id) AS {ID_FIELD} OMIT id FROM type::table($table){where_clause}"
        );
        let result: RepoResult<Vec<Document>> = async {
            let mut query = db.query(sql).bind(("table", collection.to_string()));
            for (i, (_, value)) in filter.fields.iter().enumerate() {
                query = query.bind((format!("f{i}"), value.clone()));
            }
            let mut response = query.await?;
            let rows: Vec<Value> = response.take(0)?;
            Ok(into_documents(rows))
        }
        .await;
        degrade_read(collection, result)
    }

    /// One record by key, `None` if absent
    pub async fn find_document(
        &self,
        collection: &str,
        id: &DocumentId,
    ) -> RepoResult<Option<Document>> {
        let Some(db) = self.db.as_ref() else {
            return Ok(None);
        };

        let result: RepoResult<Option<Document>> = async {
            let mut response = db
                .query(format!(
                    "SELECT *, record::id(id) AS {ID_FIELD} OMIT id FROM type::thing($table, $key)"
                ))
                .bind(("table", collection.to_string()))
                .bind(("key", id.key().to_string()))
                .await?;
            let rows: Vec<Value> = response.take(0)?;
            Ok(into_documents(rows).into_iter().next())
        }
        .await;
        degrade_read(collection, result)
    }

    pub async fn count_documents(&self, collection: &str) -> RepoResult<usize> {
        let Some(db) = self.db.as_ref() else {
            return Ok(0);
        };

        let result: RepoResult<usize> = async {
            let mut response = db
                .query("SELECT count() FROM type::table($table) GROUP ALL")
                .bind(("table", collection.to_string()))
                .await?;
            let rows: Vec<CountRow> = response.take(0)?;
            Ok(rows.first().map(|r| r.count).unwrap_or(0))
        }
        .await;
        degrade_read(collection, result)
    }

    /// Collection names known to the database
    pub async fn list_collections(&self) -> RepoResult<Vec<String>> {
        let db = self.db.as_ref().ok_or(RepoError::Unavailable)?;

        let mut response = db.query("INFO FOR DB").await?;
        let info: Option<Value> = response.take(0)?;
        let mut names: Vec<String> = info
            .as_ref()
            .and_then(|v| v.get("tables"))
            .and_then(Value::as_object)
            .map(|tables| tables.keys().cloned().collect())
            .unwrap_or_default();
        names.sort();
        Ok(names)
    }

    /// Round-trip to the store
    pub async fn ping(&self) -> RepoResult<()> {
        let db = self.db.as_ref().ok_or(RepoError::Unavailable)?;
        db.health().await?;
        Ok(())
    }
}

/// Reads on a lost connection behave like reads on a store that never
/// connected: empty, not an error
fn degrade_read<T: Default>(collection: &str, result: RepoResult<T>) -> RepoResult<T> {
    match result {
        Err(RepoError::Unavailable) => {
            tracing::debug!(collection, "Store unavailable, returning empty result");
            Ok(T::default())
        }
        other => other,
    }
}

fn into_documents(rows: Vec<Value>) -> Vec<Document> {
    rows.into_iter()
        .filter_map(|row| match row {
            Value::Object(map) => Some(map),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    async fn memory_store() -> DocumentStore {
        DocumentStore::connect(&StoreConfig::in_memory()).await
    }

    #[test]
    fn test_filter_where_clause() {
        assert_eq!(Filter::new().where_clause().unwrap(), "");
        assert_eq!(
            Filter::new()
                .eq("category", "vegan")
                .eq("is_popular", true)
                .where_clause()
                .unwrap(),
            " WHERE category = $f0 AND is_popular = $f1"
        );
    }

    #[test]
    fn test_filter_rejects_non_identifiers() {
        let err = Filter::new()
            .eq("category = 'x' OR true", "y")
            .where_clause()
            .unwrap_err();
        assert!(matches!(err, RepoError::InvalidFilter(_)));
        assert!(Filter::new().eq("1abc", 1).where_clause().is_err());
    }

    #[tokio::test]
    async fn test_create_and_get_documents() {
        let store = memory_store().await;
        assert!(store.is_connected());

        let first = store
            .create_document("widget", &json!({ "kind": "a", "n": 1 }))
            .await
            .unwrap();
        let second = store
            .create_document("widget", &json!({ "kind": "b", "n": 2 }))
            .await
            .unwrap();
        assert_ne!(first, second);
        assert_eq!(first.len(), id::KEY_LEN);

        let all = store.get_documents("widget", &Filter::new()).await.unwrap();
        assert_eq!(all.len(), 2);
        for doc in &all {
            assert!(doc.get(ID_FIELD).and_then(Value::as_str).is_some());
            assert!(!doc.contains_key("id"));
            assert!(doc.contains_key("created_at"));
        }

        let only_b = store
            .get_documents("widget", &Filter::new().eq("kind", "b"))
            .await
            .unwrap();
        assert_eq!(only_b.len(), 1);
        assert_eq!(only_b[0][ID_FIELD], json!(second));
        assert_eq!(only_b[0]["n"], json!(2));
    }

    #[tokio::test]
    async fn test_client_supplied_id_is_ignored() {
        let store = memory_store().await;
        let key = store
            .create_document("widget", &json!({ "id": "mine", "_id": "also-mine" }))
            .await
            .unwrap();
        assert_ne!(key, "mine");
        assert_ne!(key, "also-mine");
    }

    #[tokio::test]
    async fn test_find_document() {
        let store = memory_store().await;
        let key = store
            .create_document("widget", &json!({ "kind": "a" }))
            .await
            .unwrap();

        let id = DocumentId::parse("widget", &key).unwrap();
        let found = store.find_document("widget", &id).await.unwrap().unwrap();
        assert_eq!(found[ID_FIELD], json!(key));

        let missing = DocumentId::parse("widget", "00000000000000000000").unwrap();
        assert!(store.find_document("widget", &missing).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_count_and_collections() {
        let store = memory_store().await;
        assert_eq!(store.count_documents("widget").await.unwrap(), 0);

        store.create_document("widget", &json!({})).await.unwrap();
        store.create_document("widget", &json!({})).await.unwrap();
        store.create_document("gadget", &json!({})).await.unwrap();

        assert_eq!(store.count_documents("widget").await.unwrap(), 2);
        assert_eq!(
            store.list_collections().await.unwrap(),
            vec!["gadget".to_string(), "widget".to_string()]
        );
        assert!(store.ping().await.is_ok());
    }

    #[tokio::test]
    async fn test_non_object_document_rejected() {
        let store = memory_store().await;
        let err = store.create_document("widget", &json!([1, 2])).await.unwrap_err();
        assert!(matches!(err, RepoError::Serialization(_)));
    }

    #[tokio::test]
    async fn test_disconnected_store_degrades() {
        let store = DocumentStore::disconnected("pizza");
        assert!(!store.is_connected());

        assert!(store.get_documents("widget", &Filter::new()).await.unwrap().is_empty());
        assert_eq!(store.count_documents("widget").await.unwrap(), 0);
        let id = DocumentId::parse("widget", "00000000000000000000").unwrap();
        assert!(store.find_document("widget", &id).await.unwrap().is_none());

        assert!(matches!(
            store.create_document("widget", &json!({})).await,
            Err(RepoError::Unavailable)
        ));
        assert!(matches!(store.ping().await, Err(RepoError::Unavailable)));
    }

    #[tokio::test]
    async fn test_lost_connection_degrades() {
        // A client whose connection is gone reports it on every call
        let store = DocumentStore {
            db: Some(Surreal::init()),
            database_name: "pizza".into(),
        };

        assert!(store.get_documents("widget", &Filter::new()).await.unwrap().is_empty());
        assert_eq!(store.count_documents("widget").await.unwrap(), 0);
        let id = DocumentId::parse("widget", "00000000000000000000").unwrap();
        assert!(store.find_document("widget", &id).await.unwrap().is_none());

        assert!(matches!(
            store.create_document("widget", &json!({})).await,
            Err(RepoError::Unavailable)
        ));
        assert!(matches!(store.list_collections().await, Err(RepoError::Unavailable)));
    }

    #[test]
    fn test_degrade_read_keeps_other_errors() {
        let empty: RepoResult<Vec<Document>> = degrade_read("widget", Err(RepoError::Unavailable));
        assert!(empty.unwrap().is_empty());

        let fault: RepoResult<usize> = degrade_read("widget", Err(RepoError::Database("boom".into())));
        assert!(matches!(fault, Err(RepoError::Database(_))));
    }

    #[tokio::test]
    async fn test_unreachable_store_connects_degraded() {
        let mut config = StoreConfig::in_memory();
        config.url = "ws://127.0.0.1:1".into();
        config.connect_timeout_ms = 2000;

        let store = DocumentStore::connect(&config).await;
        assert!(!store.is_connected());
        assert_eq!(store.database_name(), "pizza");
    }
}
