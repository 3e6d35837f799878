use async_trait::async_trait;
use derm_core::model::Dataset;
use std::sync::Arc;
use thiserror::Error;

use crate::source::{DataLocation, FileSource, HttpSource};

/// Errors surfaced by dataset sources.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("dataset not found: {0}")]
    NotFound(String),

    #[error("connection error: {0}")]
    Connection(String),

    #[error("dataset request failed with status {0}")]
    HttpStatus(u16),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Contract for the one-shot dataset load at startup.
///
/// Implementations do not retry and do not return partial results: a
/// failed load is surfaced to the caller as-is.
#[async_trait]
pub trait DatasetSource: Send + Sync {
    /// Fetch and decode the full dataset.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the document cannot be fetched or parsed.
    async fn load(&self) -> Result<Dataset, StorageError>;

    /// Human-readable description of where the data comes from, for logs.
    fn describe(&self) -> String;
}

/// Dataset held in memory, for tests and prototyping.
#[derive(Clone, Default)]
pub struct InMemorySource {
    dataset: Arc<Dataset>,
}

impl InMemorySource {
    #[must_use]
    pub fn new(dataset: Dataset) -> Self {
        Self {
            dataset: Arc::new(dataset),
        }
    }
}

#[async_trait]
impl DatasetSource for InMemorySource {
    async fn load(&self) -> Result<Dataset, StorageError> {
        Ok(Dataset::clone(&self.dataset))
    }

    fn describe(&self) -> String {
        "in-memory".to_string()
    }
}

/// Holds the configured dataset source behind a trait object for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub dataset: Arc<dyn DatasetSource>,
}

impl Storage {
    #[must_use]
    pub fn in_memory(dataset: Dataset) -> Self {
        let source: Arc<dyn DatasetSource> = Arc::new(InMemorySource::new(dataset));
        Self { dataset: source }
    }

    /// Pick the source matching a configured data location.
    #[must_use]
    pub fn from_location(location: &DataLocation) -> Self {
        let source: Arc<dyn DatasetSource> = match location {
            DataLocation::File(path) => Arc::new(FileSource::new(path.clone())),
            DataLocation::Url(url) => Arc::new(HttpSource::new(url.clone())),
        };
        Self { dataset: source }
    }
}
