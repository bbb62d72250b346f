//! The book record.

use serde::{Deserialize, Serialize};

/// A single book in the catalog.
///
/// The identifier is supplied by the caller, never generated by the
/// server. All fields default to the empty string when missing from a
/// request body; no validation happens beyond JSON decoding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Book {
    pub id: String,
    pub author: String,
    pub name: String,
}

impl Book {
    /// Create a new book record
    pub fn new(id: impl Into<String>, author: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            author: author.into(),
            name: name.into(),
        }
    }
}
