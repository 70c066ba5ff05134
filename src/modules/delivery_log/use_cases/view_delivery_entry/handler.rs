use crate::modules::delivery_log::core::detail::EntryDetail;
use crate::modules::delivery_log::core::ports::DeliveryLogStore;
use crate::modules::delivery_log::use_cases::errors::ApplicationError;
use std::sync::Arc;
use tracing::warn;

pub struct ViewDeliveryEntryHandler {
    store: Arc<dyn DeliveryLogStore>,
}

impl ViewDeliveryEntryHandler {
    pub fn new(store: Arc<dyn DeliveryLogStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, id: &str) -> Result<EntryDetail, ApplicationError> {
        let entry = self.store.fetch_one(id).await.map_err(|error| {
            warn!(%error, id, "failed to load delivery entry");
            ApplicationError::Store(error)
        })?;
        Ok(EntryDetail::from(&entry))
    }
}
