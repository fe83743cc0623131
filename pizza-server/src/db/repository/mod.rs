//! Repository Module
//!
//! Typed access to the menu and order collections on top of [`DocumentStore`].

pub mod order;
pub mod pizza;

// Re-exports
pub use order::OrderRepository;
pub use pizza::PizzaRepository;

use shared::error::AppError;
use thiserror::Error;

use super::DocumentStore;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Document store unavailable")]
    Unavailable,

    #[error("Database error: {0}")]
    Database(String),

    #[error("Invalid filter field: {0}")]
    InvalidFilter(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        if is_connection_lost(&err) {
            tracing::warn!(error = %err, "Document store connection lost");
            return RepoError::Unavailable;
        }
        RepoError::Database(err.to_string())
    }
}

/// Transport failures: the socket dropped or the router task is gone
fn is_connection_lost(err: &surrealdb::Error) -> bool {
    use surrealdb::error::Api;

    match err {
        surrealdb::Error::Api(Api::Ws(_) | Api::Http(_) | Api::ConnectionUninitialised) => true,
        // async_channel send/recv failures on the router channel
        surrealdb::Error::Api(Api::InternalError(msg)) => msg.contains("closed channel"),
        _ => false,
    }
}

impl From<serde_json::Error> for RepoError {
    fn from(err: serde_json::Error) -> Self {
        RepoError::Serialization(err.to_string())
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::Unavailable => AppError::store_unavailable(),
            RepoError::Database(msg) => AppError::database(msg),
            RepoError::Validation(msg) => AppError::validation(msg),
            RepoError::InvalidFilter(_) | RepoError::Serialization(_) => {
                AppError::internal(err.to_string())
            }
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Base repository with store reference
#[derive(Clone)]
pub struct BaseRepository {
    store: DocumentStore,
}

impl BaseRepository {
    pub fn new(store: DocumentStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &DocumentStore {
        &self.store
    }
}
