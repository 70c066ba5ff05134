// View state of the delivery reports screen.
//
// Notes
// - Only the full entry list, query and page are stored. The filtered list and the page
//   count are computed on every read so they cannot drift from the full list.
// - Overlay makes "at most one of detail view or edit form" a property of the type.
// - LoadStatus carries the loading flag and the failure reason in one value, so the two
//   can never be set together.

use crate::modules::delivery_log::core::detail::EntryDetail;
use crate::modules::delivery_log::core::entry::DeliveryEntry;
use crate::modules::delivery_log::core::pagination::{self, Page};
use crate::modules::delivery_log::core::search;
use std::num::NonZeroUsize;

/// Identifies one fetch so a late result from a superseded fetch can be dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LoadTicket(pub u64);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading {
        ticket: LoadTicket,
    },
    Ready,
    Failed {
        reason: String,
    },
}

impl LoadStatus {
    pub fn ticket(&self) -> Option<LoadTicket> {
        match self {
            LoadStatus::Loading { ticket } => Some(*ticket),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Overlay {
    #[default]
    None,
    Viewing(DeliveryEntry),
    /// Working copy of the entry being edited.
    Editing(DeliveryEntry),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportsState {
    pub(super) entries: Vec<DeliveryEntry>,
    pub(super) query: String,
    pub(super) page: usize,
    pub(super) page_size: NonZeroUsize,
    pub(super) overlay: Overlay,
    pub(super) status: LoadStatus,
    pub(super) active: bool,
    pub(super) generation: u64,
}

impl ReportsState {
    pub fn new(page_size: NonZeroUsize) -> Self {
        Self {
            entries: Vec::new(),
            query: String::new(),
            page: 1,
            page_size,
            overlay: Overlay::None,
            status: LoadStatus::Idle,
            active: false,
            generation: 0,
        }
    }

    /// A state that already holds a fetched list, for one-shot renders.
    pub fn ready(page_size: NonZeroUsize, entries: Vec<DeliveryEntry>) -> Self {
        Self {
            entries,
            status: LoadStatus::Ready,
            ..Self::new(page_size)
        }
    }

    pub fn entries(&self) -> &[DeliveryEntry] {
        &self.entries
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> NonZeroUsize {
        self.page_size
    }

    pub fn overlay(&self) -> &Overlay {
        &self.overlay
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.status, LoadStatus::Loading { .. })
    }

    pub fn error(&self) -> Option<&str> {
        match &self.status {
            LoadStatus::Failed { reason } => Some(reason),
            _ => None,
        }
    }

    pub fn filtered(&self) -> Vec<&DeliveryEntry> {
        search::filter(&self.entries, &self.query)
    }

    pub fn total_pages(&self) -> usize {
        pagination::total_pages(self.filtered().len(), self.page_size)
    }

    pub fn visible_page(&self) -> Page<&DeliveryEntry> {
        pagination::paginate(&self.filtered(), self.page, self.page_size)
    }

    pub fn can_go_prev(&self) -> bool {
        self.page > 1
    }

    pub fn can_go_next(&self) -> bool {
        self.page < self.total_pages()
    }

    pub fn detail(&self) -> Option<EntryDetail> {
        match &self.overlay {
            Overlay::Viewing(entry) => Some(EntryDetail::from(entry)),
            _ => None,
        }
    }

    pub fn draft(&self) -> Option<&DeliveryEntry> {
        match &self.overlay {
            Overlay::Editing(draft) => Some(draft),
            _ => None,
        }
    }

    pub fn find(&self, id: &str) -> Option<&DeliveryEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }
}
