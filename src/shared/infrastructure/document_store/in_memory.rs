// In memory implementation of the DocumentCollection port.
//
// Purpose
// - Support handler tests and local development without the hosted database.
//
// Responsibilities
// - Assign ids (UUID v7) and non-decreasing server timestamps on add.
// - List documents newest first, later inserts first on equal timestamps.

use crate::shared::infrastructure::document_store::{
    Document, DocumentCollection, DocumentStoreError, Fields,
};
use chrono::Utc;
use std::cmp::Reverse;
use tokio::sync::RwLock;
use uuid::Uuid;

pub struct InMemoryCollection {
    name: String,
    documents: RwLock<Vec<Document>>,
    is_offline: bool,
}

impl InMemoryCollection {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            documents: RwLock::new(Vec::new()),
            is_offline: false,
        }
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    /// Stores a document as given, for seeding data written by other clients.
    pub async fn insert(&self, document: Document) {
        self.documents.write().await.push(document);
    }

    fn ensure_online(&self) -> Result<(), DocumentStoreError> {
        if self.is_offline {
            return Err(DocumentStoreError::Backend(format!(
                "collection {} offline",
                self.name
            )));
        }
        Ok(())
    }

    fn not_found(&self, id: &str) -> DocumentStoreError {
        DocumentStoreError::NotFound {
            collection: self.name.clone(),
            id: id.to_string(),
        }
    }
}

#[async_trait::async_trait]
impl DocumentCollection for InMemoryCollection {
    fn name(&self) -> &str {
        &self.name
    }

    async fn list_newest_first(&self) -> Result<Vec<Document>, DocumentStoreError> {
        self.ensure_online()?;
        let mut documents: Vec<Document> =
            self.documents.read().await.iter().rev().cloned().collect();
        documents.sort_by_key(|document| Reverse(document.created_at));
        Ok(documents)
    }

    async fn get(&self, id: &str) -> Result<Document, DocumentStoreError> {
        self.ensure_online()?;
        self.documents
            .read()
            .await
            .iter()
            .find(|document| document.id == id)
            .cloned()
            .ok_or_else(|| self.not_found(id))
    }

    async fn add(&self, fields: Fields) -> Result<Document, DocumentStoreError> {
        self.ensure_online()?;
        let mut documents = self.documents.write().await;
        let now = Utc::now().timestamp_millis();
        let created_at = documents
            .iter()
            .map(|document| document.created_at)
            .max()
            .map_or(now, |latest| latest.max(now));
        let document = Document {
            id: Uuid::now_v7().to_string(),
            created_at,
            fields,
        };
        documents.push(document.clone());
        Ok(document)
    }

    async fn merge(&self, id: &str, fields: Fields) -> Result<Document, DocumentStoreError> {
        self.ensure_online()?;
        let mut documents = self.documents.write().await;
        let document = documents
            .iter_mut()
            .find(|document| document.id == id)
            .ok_or_else(|| self.not_found(id))?;
        document.fields.extend(fields);
        Ok(document.clone())
    }
}
