use crate::store::StoreError;
use thiserror::Error;

/// Everything an operation can fail with. All variants are terminal for the
/// invocation; the binary prints the message and exits normally.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Description is required")]
    EmptyDescription,
    #[error("Invalid status: {0}")]
    InvalidStatus(String),
    #[error("Task with ID {0} not found")]
    NotFound(u32),
    #[error(transparent)]
    Store(#[from] StoreError),
}
