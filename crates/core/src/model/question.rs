use serde::{Deserialize, Serialize};

use crate::model::ids::{DiagnosisCode, QuestionId};

/// A single lesion image with its confirmed diagnosis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
    pub diagnosis: DiagnosisCode,
    /// Where the case was harvested from; informational only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl Question {
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        image_url: impl Into<String>,
        diagnosis: impl Into<DiagnosisCode>,
    ) -> Self {
        Self {
            id: QuestionId::new(id),
            image_url: image_url.into(),
            diagnosis: diagnosis.into(),
            source: None,
        }
    }
}
