// Edit reconciliation: persist the open draft, then reflect the persisted entry in the
// locally held list without re-fetching.
//
// Notes
// - Write then reflect. On any error the caller keeps its state as it was, so the edit form
//   stays open with the draft and the list is untouched.
// - Only fields the draft changed are submitted. A record written elsewhere with a missing or
//   malformed field can still be edited as long as that field is left alone.

use crate::modules::delivery_log::core::reports::events::ReportsEvent;
use crate::modules::delivery_log::core::reports::reduce::reduce;
use crate::modules::delivery_log::core::reports::state::ReportsState;
use crate::modules::delivery_log::use_cases::edit_delivery_entry::command::EditDeliveryEntry;
use crate::modules::delivery_log::use_cases::edit_delivery_entry::handler::EditDeliveryEntryHandler;
use crate::modules::delivery_log::use_cases::errors::ApplicationError;

pub async fn apply_edit(
    handler: &EditDeliveryEntryHandler,
    state: &ReportsState,
) -> Result<ReportsState, ApplicationError> {
    let draft = state.draft().ok_or(ApplicationError::NoEditInProgress)?;
    let command = match state.find(&draft.id) {
        Some(original) => EditDeliveryEntry::from_changes(original, draft),
        None => EditDeliveryEntry::from_draft(draft),
    };
    let updated = handler.handle(command).await?;
    Ok(reduce(state.clone(), ReportsEvent::EditApplied(updated)))
}
