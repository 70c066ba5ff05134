use crate::modules::delivery_log::core::entry::{DeliveryEntry, EntryPatch};
use crate::modules::delivery_log::core::reports::state::LoadTicket;

/// Everything that can happen to the reports screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportsEvent {
    /// The screen was opened; a fetch of the full list starts.
    ViewActivated,
    /// The screen was closed; any fetch still in flight is discarded when it lands.
    ViewDeactivated,
    DataLoaded {
        ticket: LoadTicket,
        entries: Vec<DeliveryEntry>,
    },
    LoadFailed {
        ticket: LoadTicket,
        reason: String,
    },
    QueryChanged(String),
    PageChanged(usize),
    NextPage,
    PreviousPage,
    EntryViewed(String),
    EditStarted(String),
    DraftChanged(EntryPatch),
    /// The store accepted an edit; carries the entry as persisted.
    EditApplied(DeliveryEntry),
    OverlayClosed,
}
