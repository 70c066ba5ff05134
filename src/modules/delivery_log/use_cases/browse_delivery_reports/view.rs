// Stateful reports screen for a single client session.
//
// Purpose
// - Drive the reports reducer with the outcomes of real store calls: a load on activation,
//   user events in between, and saves through the edit reconciler.
//
// Notes
// - A load is split in begin_load / finish_load so a caller that runs the fetch elsewhere can
//   still hand the result back; results for a superseded ticket or a closed view are dropped.
// - Store failures are logged here and kept in the state; nothing panics or retries.

use crate::modules::delivery_log::core::entry::DeliveryEntry;
use crate::modules::delivery_log::core::ports::{DeliveryLogStore, StoreError};
use crate::modules::delivery_log::core::reports::events::ReportsEvent;
use crate::modules::delivery_log::core::reports::reduce::reduce;
use crate::modules::delivery_log::core::reports::state::{LoadTicket, ReportsState};
use crate::modules::delivery_log::use_cases::edit_delivery_entry::handler::EditDeliveryEntryHandler;
use crate::modules::delivery_log::use_cases::edit_delivery_entry::reconcile::apply_edit;
use crate::modules::delivery_log::use_cases::errors::ApplicationError;
use crate::modules::delivery_log::use_cases::list_delivery_reports::handler::ReportsPageView;
use std::mem;
use std::num::NonZeroUsize;
use std::sync::Arc;
use tracing::{debug, info, warn};

pub struct ReportsView {
    store: Arc<dyn DeliveryLogStore>,
    editor: Arc<EditDeliveryEntryHandler>,
    state: ReportsState,
}

impl ReportsView {
    pub fn new(
        store: Arc<dyn DeliveryLogStore>,
        editor: Arc<EditDeliveryEntryHandler>,
        page_size: NonZeroUsize,
    ) -> Self {
        Self {
            store,
            editor,
            state: ReportsState::new(page_size),
        }
    }

    pub fn state(&self) -> &ReportsState {
        &self.state
    }

    pub fn page_view(&self) -> ReportsPageView {
        ReportsPageView::from(&self.state)
    }

    pub fn dispatch(&mut self, event: ReportsEvent) {
        let page_size = self.state.page_size();
        let state = mem::replace(&mut self.state, ReportsState::new(page_size));
        self.state = reduce(state, event);
    }

    /// Opens the view and fetches the full list once.
    pub async fn activate(&mut self) {
        let Some(ticket) = self.begin_load() else {
            return;
        };
        let result = self.store.fetch_all().await;
        self.finish_load(ticket, result);
    }

    pub fn begin_load(&mut self) -> Option<LoadTicket> {
        self.dispatch(ReportsEvent::ViewActivated);
        self.state.status().ticket()
    }

    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<Vec<DeliveryEntry>, StoreError>,
    ) {
        if !self.state.is_active() || self.state.status().ticket() != Some(ticket) {
            debug!(ticket = ticket.0, "discarding a stale load result");
            return;
        }
        match result {
            Ok(entries) => {
                info!(count = entries.len(), "delivery reports loaded");
                self.dispatch(ReportsEvent::DataLoaded { ticket, entries });
            }
            Err(error) => {
                warn!(%error, "failed to load delivery reports");
                self.dispatch(ReportsEvent::LoadFailed {
                    ticket,
                    reason: error.to_string(),
                });
            }
        }
    }

    pub fn deactivate(&mut self) {
        self.dispatch(ReportsEvent::ViewDeactivated);
    }

    /// Saves the open draft. On error the draft stays open and the list is unchanged.
    pub async fn save_edit(&mut self) -> Result<(), ApplicationError> {
        match apply_edit(&self.editor, &self.state).await {
            Ok(next) => {
                self.state = next;
                Ok(())
            }
            Err(error) => {
                warn!(%error, "edit not saved");
                Err(error)
            }
        }
    }
}
