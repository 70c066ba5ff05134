// DeliveryLogStore backed by a document collection.
//
// Responsibilities
// - Write entry fields as document fields; the collection assigns id and created_at.
// - Tolerate whatever other clients wrote: absent or mistyped fields become "", numeric prices and
//   phones become their decimal text.

use crate::modules::delivery_log::core::entry::{
    DeliveryEntry, EntryFields, EntryPatch, coerce_text,
};
use crate::modules::delivery_log::core::ports::{DeliveryLogStore, StoreError};
use crate::shared::infrastructure::document_store::{
    Document, DocumentCollection, DocumentStoreError, Fields,
};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

pub const DATE: &str = "date";
pub const NAME: &str = "name";
pub const PRODUCT: &str = "product";
pub const PRICE: &str = "price";
pub const PHONE: &str = "phone";
pub const ADDRESS: &str = "address";
pub const LINK: &str = "link";

pub struct DocumentRecordStore<TCollection>
where
    TCollection: DocumentCollection + 'static,
{
    collection: Arc<TCollection>,
}

impl<TCollection> DocumentRecordStore<TCollection>
where
    TCollection: DocumentCollection + 'static,
{
    pub fn new(collection: Arc<TCollection>) -> Self {
        Self { collection }
    }
}

impl From<DocumentStoreError> for StoreError {
    fn from(error: DocumentStoreError) -> Self {
        match error {
            DocumentStoreError::NotFound { id, .. } => StoreError::NotFound { id },
            DocumentStoreError::Backend(reason) => StoreError::Unavailable(reason),
        }
    }
}

pub fn entry_from_document(document: &Document) -> DeliveryEntry {
    let text = |key: &str| document.fields.get(key).map(coerce_text).unwrap_or_default();
    DeliveryEntry {
        id: document.id.clone(),
        date: text(DATE),
        name: text(NAME),
        product: text(PRODUCT),
        price: text(PRICE),
        phone: text(PHONE),
        address: text(ADDRESS),
        link: text(LINK),
        created_at: document.created_at,
    }
}

fn fields_to_document(fields: EntryFields) -> Fields {
    [
        (DATE, fields.date),
        (NAME, fields.name),
        (PRODUCT, fields.product),
        (PRICE, fields.price),
        (PHONE, fields.phone),
        (ADDRESS, fields.address),
        (LINK, fields.link),
    ]
    .into_iter()
    .map(|(key, value)| (key.to_string(), Value::String(value)))
    .collect()
}

fn patch_to_document(patch: EntryPatch) -> Fields {
    [
        (NAME, patch.name),
        (PHONE, patch.phone),
        (PRODUCT, patch.product),
        (PRICE, patch.price),
        (ADDRESS, patch.address),
        (LINK, patch.link),
    ]
    .into_iter()
    .filter_map(|(key, value)| value.map(|value| (key.to_string(), Value::String(value))))
    .collect()
}

#[async_trait]
impl<TCollection> DeliveryLogStore for DocumentRecordStore<TCollection>
where
    TCollection: DocumentCollection + 'static,
{
    async fn fetch_all(&self) -> Result<Vec<DeliveryEntry>, StoreError> {
        let documents = self.collection.list_newest_first().await?;
        Ok(documents.iter().map(entry_from_document).collect())
    }

    async fn fetch_one(&self, id: &str) -> Result<DeliveryEntry, StoreError> {
        let document = self.collection.get(id).await?;
        Ok(entry_from_document(&document))
    }

    async fn create(&self, fields: EntryFields) -> Result<DeliveryEntry, StoreError> {
        let document = self.collection.add(fields_to_document(fields)).await?;
        Ok(entry_from_document(&document))
    }

    async fn update(&self, id: &str, patch: EntryPatch) -> Result<DeliveryEntry, StoreError> {
        let document = self.collection.merge(id, patch_to_document(patch)).await?;
        Ok(entry_from_document(&document))
    }
}
