// Ports the delivery log needs from the outside world.
//
// Purpose
// - DeliveryLogStore: fetch-all, fetch-one, create and update-one against the persisted
//   delivery_log collection.
//
// Boundaries
// - No concrete input or output here. Adapters implement these traits in the adapters layer.

use crate::modules::delivery_log::core::entry::{DeliveryEntry, EntryFields, EntryPatch};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("delivery entry {id} not found")]
    NotFound { id: String },

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

#[async_trait]
pub trait DeliveryLogStore: Send + Sync {
    /// Every entry, newest `created_at` first.
    async fn fetch_all(&self) -> Result<Vec<DeliveryEntry>, StoreError>;

    async fn fetch_one(&self, id: &str) -> Result<DeliveryEntry, StoreError>;

    /// Persists a new entry; the store assigns `id` and `created_at`.
    async fn create(&self, fields: EntryFields) -> Result<DeliveryEntry, StoreError>;

    /// Overwrites the editable fields present in `patch`. `id` and `created_at` never change.
    async fn update(&self, id: &str, patch: EntryPatch) -> Result<DeliveryEntry, StoreError>;
}
