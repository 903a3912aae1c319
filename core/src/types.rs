//! Domain DTOs for the book collection API.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently.
//! Integration tests catch any schema drift between the two crates.

use serde::{Deserialize, Serialize};

/// Genre stored when the user leaves the field blank.
pub const DEFAULT_GENRE: &str = "Unknown";

/// Store-assigned book identity.
pub type BookId = i64;

/// A single book returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub year: i32,
    #[serde(default = "default_genre")]
    pub genre: String,
}

/// Request payload for creating a new book. The id is always assigned by the
/// store, so it has no place here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub year: i32,
    #[serde(default = "default_genre")]
    pub genre: String,
}

/// Request payload for updating an existing book. Only the fields present in
/// the JSON are applied; omitted fields remain unchanged on the server.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
}

fn default_genre() -> String {
    DEFAULT_GENRE.to_string()
}

impl Book {
    /// Descriptive fields without the identity.
    pub fn fields(&self) -> NewBook {
        NewBook {
            title: self.title.clone(),
            author: self.author.clone(),
            year: self.year,
            genre: self.genre.clone(),
        }
    }
}
