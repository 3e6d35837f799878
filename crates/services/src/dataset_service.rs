use std::sync::Arc;

use derm_core::model::Dataset;
use storage::DatasetSource;
use tracing::{error, info};

use crate::error::DatasetLoadError;

/// Performs the one-shot dataset load and hands out a shared, immutable copy.
#[derive(Clone)]
pub struct DatasetService {
    source: Arc<dyn DatasetSource>,
}

impl DatasetService {
    #[must_use]
    pub fn new(source: Arc<dyn DatasetSource>) -> Self {
        Self { source }
    }

    /// Load the dataset. There is no retry; callers surface the failure.
    ///
    /// # Errors
    ///
    /// Returns `DatasetLoadError` if the source cannot be fetched or parsed.
    pub async fn load(&self) -> Result<Arc<Dataset>, DatasetLoadError> {
        let origin = self.source.describe();
        info!(%origin, "loading quiz dataset");
        match self.source.load().await {
            Ok(dataset) => {
                info!(
                    %origin,
                    modules = dataset.modules.len(),
                    questions = dataset.question_count(),
                    "quiz dataset ready"
                );
                Ok(Arc::new(dataset))
            }
            Err(err) => {
                error!(%origin, error = %err, "quiz dataset failed to load");
                Err(err.into())
            }
        }
    }
}
