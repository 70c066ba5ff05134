// Port for a hosted document collection.
//
// Purpose
// - Mirror what the hosted document database offers: documents with a store-assigned id and
//   server timestamp, listed newest first, added, and merged field by field.
//
// Boundaries
// - Fields are untyped JSON. Callers decide how to read them.

use async_trait::async_trait;
use serde_json::{Map, Value};
use thiserror::Error;

pub type Fields = Map<String, Value>;

#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: String,
    /// Server timestamp in epoch milliseconds.
    pub created_at: i64,
    pub fields: Fields,
}

#[derive(Debug, Error)]
pub enum DocumentStoreError {
    #[error("document {id} not found in {collection}")]
    NotFound { collection: String, id: String },

    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait DocumentCollection: Send + Sync {
    fn name(&self) -> &str;

    /// All documents ordered by `created_at` descending.
    async fn list_newest_first(&self) -> Result<Vec<Document>, DocumentStoreError>;

    async fn get(&self, id: &str) -> Result<Document, DocumentStoreError>;

    async fn add(&self, fields: Fields) -> Result<Document, DocumentStoreError>;

    /// Overwrites the given fields of an existing document and returns it.
    async fn merge(&self, id: &str, fields: Fields) -> Result<Document, DocumentStoreError>;
}

pub mod in_memory;
