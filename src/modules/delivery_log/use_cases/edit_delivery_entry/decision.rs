use crate::modules::delivery_log::core::entry::EntryPatch;
use crate::modules::delivery_log::core::validation::DecideError;

#[derive(Debug)]
pub enum Decision {
    Accepted { id: String, patch: EntryPatch },
    Rejected { reason: DecideError },
}
