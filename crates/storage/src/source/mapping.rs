use derm_core::model::Dataset;
use tracing::{debug, warn};

use crate::repository::StorageError;

fn ser<E: core::fmt::Display>(e: E) -> StorageError {
    StorageError::Serialization(e.to_string())
}

/// Decode the JSON dataset document.
///
/// Unknown module and diagnosis codes are accepted; they are only logged here
/// because the picker ignores unknown modules and labels fall back to raw codes.
///
/// # Errors
///
/// Returns `StorageError::Serialization` if the bytes are not a valid document.
pub fn decode_dataset(bytes: &[u8]) -> Result<Dataset, StorageError> {
    let dataset: Dataset = serde_json::from_slice(bytes).map_err(ser)?;

    for module in dataset.unknown_modules() {
        debug!(%module, "dataset contains a module the picker does not show");
    }
    for code in dataset.unknown_diagnoses() {
        warn!(%code, "dataset uses a diagnosis code without a display label");
    }

    Ok(dataset)
}
