//! Shared types for the pizza backend
//!
//! Entity schemas, error codes and the error envelope used by
//! `pizza-server` and by anything that talks to its API.

pub mod error;
pub mod models;
