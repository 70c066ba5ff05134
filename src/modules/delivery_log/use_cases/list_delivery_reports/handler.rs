// One-shot render of the reports screen: fetch everything, then let the reducer apply the
// query and the requested page.
//
// Notes
// - The page number is clamped, so a stale link past the last page shows the last page.

use crate::modules::delivery_log::core::detail::format_rupees;
use crate::modules::delivery_log::core::entry::DeliveryEntry;
use crate::modules::delivery_log::core::ports::DeliveryLogStore;
use crate::modules::delivery_log::core::reports::events::ReportsEvent;
use crate::modules::delivery_log::core::reports::reduce::reduce;
use crate::modules::delivery_log::core::reports::state::ReportsState;
use crate::modules::delivery_log::use_cases::errors::ApplicationError;
use serde::Serialize;
use std::num::NonZeroUsize;
use std::sync::Arc;
use tracing::warn;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportsQuery {
    pub query: String,
    pub page: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    pub serial: usize,
    #[serde(flatten)]
    pub entry: DeliveryEntry,
    pub price_display: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportsPageView {
    pub no_entries: bool,
    pub query: String,
    pub page: usize,
    pub total_pages: usize,
    pub page_size: usize,
    pub has_prev: bool,
    pub has_next: bool,
    /// Number of entries matching the query, across all pages.
    pub total_entries: usize,
    pub rows: Vec<ReportRow>,
}

impl From<&ReportsState> for ReportsPageView {
    fn from(state: &ReportsState) -> Self {
        let page = state.visible_page();
        let rows = page
            .items()
            .iter()
            .enumerate()
            .map(|(index, entry)| ReportRow {
                serial: page.serial(index),
                entry: (*entry).clone(),
                price_display: format_rupees(entry.price_amount()),
            })
            .collect();
        Self {
            no_entries: page.items().is_empty(),
            query: state.query().to_string(),
            page: page.number(),
            total_pages: page.total_pages(),
            page_size: state.page_size().get(),
            has_prev: page.has_prev(),
            has_next: page.has_next(),
            total_entries: state.filtered().len(),
            rows,
        }
    }
}

pub struct ListDeliveryReportsHandler {
    store: Arc<dyn DeliveryLogStore>,
    page_size: NonZeroUsize,
}

impl ListDeliveryReportsHandler {
    pub fn new(store: Arc<dyn DeliveryLogStore>, page_size: NonZeroUsize) -> Self {
        Self { store, page_size }
    }

    pub fn page_size(&self) -> NonZeroUsize {
        self.page_size
    }

    pub async fn handle(&self, query: ReportsQuery) -> Result<ReportsPageView, ApplicationError> {
        let entries = self.store.fetch_all().await.map_err(|error| {
            warn!(%error, "failed to load delivery reports");
            ApplicationError::Store(error)
        })?;

        let state = [
            ReportsEvent::QueryChanged(query.query),
            ReportsEvent::PageChanged(query.page),
        ]
        .into_iter()
        .fold(ReportsState::ready(self.page_size, entries), reduce);

        Ok(ReportsPageView::from(&state))
    }
}
