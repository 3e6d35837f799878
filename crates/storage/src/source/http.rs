use async_trait::async_trait;
use derm_core::model::Dataset;
use tracing::info;
use url::Url;

use crate::repository::{DatasetSource, StorageError};
use super::mapping::decode_dataset;

fn conn<E: core::fmt::Display>(e: E) -> StorageError {
    StorageError::Connection(e.to_string())
}

/// Fetches the dataset document over HTTP(S) with a single GET.
#[derive(Debug, Clone)]
pub struct HttpSource {
    url: Url,
    client: reqwest::Client,
}

impl HttpSource {
    #[must_use]
    pub fn new(url: Url) -> Self {
        Self {
            url,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl DatasetSource for HttpSource {
    async fn load(&self) -> Result<Dataset, StorageError> {
        let response = self
            .client
            .get(self.url.clone())
            .send()
            .await
            .map_err(conn)?;
        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(StorageError::NotFound(self.url.to_string()));
        }
        if !status.is_success() {
            return Err(StorageError::HttpStatus(status.as_u16()));
        }
        let bytes = response.bytes().await.map_err(conn)?;
        let dataset = decode_dataset(&bytes)?;
        info!(
            url = %self.url,
            modules = dataset.modules.len(),
            questions = dataset.question_count(),
            "fetched quiz dataset"
        );
        Ok(dataset)
    }

    fn describe(&self) -> String {
        format!("url {}", self.url)
    }
}
