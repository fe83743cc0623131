//! Document identifiers
//!
//! The store generates record keys as 20 characters from `[0-9a-z]`.
//! Path parameters are parsed into [`DocumentId`] before any store access so
//! that a malformed identifier is reported separately from a missing record.
//! The full `table:key` form is accepted when the table matches.

use std::fmt;
use thiserror::Error;

/// Length of a store-generated record key
pub const KEY_LEN: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdError {
    #[error("identifier is empty")]
    Empty,

    #[error("identifier belongs to table '{0}'")]
    WrongTable(String),

    #[error("identifier must be {KEY_LEN} characters, got {0}")]
    Length(usize),

    #[error("identifier contains invalid character {0:?}")]
    InvalidChar(char),
}

/// A well-formed record key within one collection
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DocumentId(String);

impl DocumentId {
    /// Parse a raw key (`k3x9...`) or record reference (`pizza:k3x9...`)
    pub fn parse(collection: &str, raw: &str) -> Result<Self, IdError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(IdError::Empty);
        }

        let key = match raw.split_once(':') {
            Some((table, key)) if table == collection => key,
            Some((table, _)) => return Err(IdError::WrongTable(table.to_string())),
            None => raw,
        };

        let len = key.chars().count();
        if len != KEY_LEN {
            return Err(IdError::Length(len));
        }
        if let Some(c) = key
            .chars()
            .find(|c| !(c.is_ascii_digit() || c.is_ascii_lowercase()))
        {
            return Err(IdError::InvalidChar(c));
        }

        Ok(Self(key.to_string()))
    }

    pub fn key(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
