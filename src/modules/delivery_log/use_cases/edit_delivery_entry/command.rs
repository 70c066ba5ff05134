use crate::modules::delivery_log::core::entry::{DeliveryEntry, EntryPatch};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditDeliveryEntry {
    pub id: String,
    pub patch: EntryPatch,
}

impl EditDeliveryEntry {
    /// Submits every editable field of a working copy, including ones left untouched.
    pub fn from_draft(draft: &DeliveryEntry) -> Self {
        Self {
            id: draft.id.clone(),
            patch: EntryPatch::from_entry(draft),
        }
    }

    /// Submits only the fields the draft changed, so untouched fields are neither
    /// validated nor rewritten.
    pub fn from_changes(original: &DeliveryEntry, draft: &DeliveryEntry) -> Self {
        Self {
            id: draft.id.clone(),
            patch: EntryPatch::between(original, draft),
        }
    }
}
