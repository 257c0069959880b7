//! Error type for item store operations.

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreError {
    #[error("Item not found: {0}")]
    NotFound(u64),

    #[error("Item id counter exhausted")]
    IdExhausted,
}
