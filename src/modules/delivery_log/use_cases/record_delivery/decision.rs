use crate::modules::delivery_log::core::entry::EntryFields;
use crate::modules::delivery_log::core::validation::DecideError;

#[derive(Debug)]
pub enum Decision {
    Accepted { fields: EntryFields },
    Rejected { reason: DecideError },
}
