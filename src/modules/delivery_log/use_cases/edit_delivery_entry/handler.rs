use crate::modules::delivery_log::core::entry::DeliveryEntry;
use crate::modules::delivery_log::core::ports::DeliveryLogStore;
use crate::modules::delivery_log::use_cases::edit_delivery_entry::command::EditDeliveryEntry;
use crate::modules::delivery_log::use_cases::edit_delivery_entry::decide::decide_edit;
use crate::modules::delivery_log::use_cases::edit_delivery_entry::decision::Decision;
use crate::modules::delivery_log::use_cases::errors::ApplicationError;
use std::sync::Arc;
use tracing::{info, warn};

pub struct EditDeliveryEntryHandler {
    store: Arc<dyn DeliveryLogStore>,
}

impl EditDeliveryEntryHandler {
    pub fn new(store: Arc<dyn DeliveryLogStore>) -> Self {
        Self { store }
    }

    /// Writes the edit and returns the entry as persisted. Concurrent edits are last write wins.
    pub async fn handle(
        &self,
        command: EditDeliveryEntry,
    ) -> Result<DeliveryEntry, ApplicationError> {
        match decide_edit(command) {
            Decision::Accepted { id, patch } => {
                let entry = self.store.update(&id, patch).await.map_err(|error| {
                    warn!(%error, id = %id, "failed to update delivery entry");
                    ApplicationError::Store(error)
                })?;
                info!(id = %entry.id, "delivery entry updated");
                Ok(entry)
            }
            Decision::Rejected { reason } => Err(ApplicationError::Rejected(reason)),
        }
    }
}
