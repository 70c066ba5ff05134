use crate::modules::delivery_log::core::ports::StoreError;
use crate::modules::delivery_log::core::validation::DecideError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("domain rejected: {0}")]
    Rejected(#[from] DecideError),

    #[error("no edit in progress")]
    NoEditInProgress,
}
