use crate::modules::delivery_log::core::entry::DeliveryEntry;
use crate::modules::delivery_log::core::ports::DeliveryLogStore;
use crate::modules::delivery_log::use_cases::errors::ApplicationError;
use crate::modules::delivery_log::use_cases::record_delivery::command::RecordDelivery;
use crate::modules::delivery_log::use_cases::record_delivery::decide::decide_record;
use crate::modules::delivery_log::use_cases::record_delivery::decision::Decision;
use std::sync::Arc;
use tracing::{info, warn};

pub struct RecordDeliveryHandler {
    store: Arc<dyn DeliveryLogStore>,
}

impl RecordDeliveryHandler {
    pub fn new(store: Arc<dyn DeliveryLogStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, command: RecordDelivery) -> Result<DeliveryEntry, ApplicationError> {
        match decide_record(command) {
            Decision::Accepted { fields } => {
                let entry = self.store.create(fields).await.map_err(|error| {
                    warn!(%error, "failed to record delivery");
                    ApplicationError::Store(error)
                })?;
                info!(id = %entry.id, "delivery recorded");
                Ok(entry)
            }
            Decision::Rejected { reason } => Err(ApplicationError::Rejected(reason)),
        }
    }
}
