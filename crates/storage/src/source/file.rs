use std::path::PathBuf;

use async_trait::async_trait;
use derm_core::model::Dataset;
use tracing::info;

use crate::repository::{DatasetSource, StorageError};
use super::mapping::decode_dataset;

/// Reads the dataset document from the local filesystem.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl DatasetSource for FileSource {
    async fn load(&self) -> Result<Dataset, StorageError> {
        let bytes = tokio::fs::read(&self.path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                StorageError::NotFound(self.path.display().to_string())
            } else {
                StorageError::Io(e)
            }
        })?;
        let dataset = decode_dataset(&bytes)?;
        info!(
            path = %self.path.display(),
            modules = dataset.modules.len(),
            questions = dataset.question_count(),
            "loaded quiz dataset"
        );
        Ok(dataset)
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}
