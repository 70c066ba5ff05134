// Reduce function: combine the current reports state with an event to produce the next state.
//
// Boundaries
// - No input or output. The store calls happen in the use cases; only their outcomes arrive
//   here as events.

use crate::modules::delivery_log::core::entry::EntryPatch;
use crate::modules::delivery_log::core::pagination::clamp_page;
use crate::modules::delivery_log::core::reports::events::ReportsEvent;
use crate::modules::delivery_log::core::reports::state::{
    LoadStatus, LoadTicket, Overlay, ReportsState,
};

pub fn reduce(mut state: ReportsState, event: ReportsEvent) -> ReportsState {
    match event {
        ReportsEvent::ViewActivated => {
            state.generation += 1;
            state.active = true;
            state.status = LoadStatus::Loading {
                ticket: LoadTicket(state.generation),
            };
        }
        ReportsEvent::ViewDeactivated => {
            state.active = false;
            state.overlay = Overlay::None;
            if state.is_loading() {
                state.status = LoadStatus::Idle;
            }
        }
        ReportsEvent::DataLoaded { ticket, entries } => {
            if awaits(&state, ticket) {
                state.entries = entries;
                state.page = 1;
                state.status = LoadStatus::Ready;
            }
        }
        ReportsEvent::LoadFailed { ticket, reason } => {
            if awaits(&state, ticket) {
                // Empty with the error, never a stale list next to it.
                state.entries.clear();
                state.page = 1;
                state.status = LoadStatus::Failed { reason };
            }
        }
        ReportsEvent::QueryChanged(query) => {
            state.query = query;
            state.page = 1;
        }
        ReportsEvent::PageChanged(page) => {
            state.page = clamp_page(page, state.total_pages());
        }
        ReportsEvent::NextPage => {
            if state.can_go_next() {
                state.page += 1;
            }
        }
        ReportsEvent::PreviousPage => {
            if state.can_go_prev() {
                state.page -= 1;
            }
        }
        ReportsEvent::EntryViewed(id) => {
            if state.draft().is_none() {
                if let Some(entry) = state.find(&id).cloned() {
                    state.overlay = Overlay::Viewing(entry);
                }
            }
        }
        ReportsEvent::EditStarted(id) => {
            if state.draft().is_none() {
                if let Some(entry) = state.find(&id).cloned() {
                    state.overlay = Overlay::Editing(entry);
                }
            }
        }
        ReportsEvent::DraftChanged(patch) => {
            if let Overlay::Editing(draft) = &mut state.overlay {
                draft.apply_patch(&patch);
            }
        }
        ReportsEvent::EditApplied(updated) => {
            if let Some(existing) = state.entries.iter_mut().find(|e| e.id == updated.id) {
                existing.apply_patch(&EntryPatch::from_entry(&updated));
            }
            if matches!(&state.overlay, Overlay::Editing(draft) if draft.id == updated.id) {
                state.overlay = Overlay::None;
            }
            state.page = clamp_page(state.page, state.total_pages());
        }
        ReportsEvent::OverlayClosed => {
            state.overlay = Overlay::None;
        }
    }
    state
}

// A result is only taken while the view is open and waiting on that exact fetch.
fn awaits(state: &ReportsState, ticket: LoadTicket) -> bool {
    state.active && state.status.ticket() == Some(ticket)
}
