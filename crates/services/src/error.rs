//! Shared error types for the services crate.

use thiserror::Error;

use derm_core::model::DatasetError;
use storage::StorageError;

/// Errors emitted by the session controller.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("this set is not available: {0}")]
    UnavailableSet(#[from] DatasetError),
    #[error("no quiz session is active")]
    NoActiveSession,
    #[error("the current question has not been answered yet")]
    NotAnswered,
    #[error("the session has not finished")]
    NotFinished,
}

/// Errors emitted while loading the dataset at startup.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DatasetLoadError {
    #[error(transparent)]
    Storage(#[from] StorageError),
}
