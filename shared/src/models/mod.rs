//! Data models
//!
//! Entity schemas shared by the server and its clients. Request bodies are
//! deserialized into these types and then checked with [`validator::Validate`]
//! before they reach the store. Store identifiers are not part of the
//! schemas; they are attached on read as `id`.

pub mod order;
pub mod pizza;

// Re-exports
pub use order::*;
pub use pizza::*;
