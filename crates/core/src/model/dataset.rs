use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::{DiagnosisCode, ModuleCode};
use crate::model::labels::{KnownDiagnosis, KnownModule};
use crate::model::question::Question;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

/// Lookup failures when resolving a module/set pair to playable questions.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DatasetError {
    #[error("module {module} is not present in the dataset")]
    UnknownModule { module: ModuleCode },

    #[error("module {module} has no set {set_index} ({available} available)")]
    SetOutOfRange {
        module: ModuleCode,
        set_index: usize,
        available: usize,
    },

    #[error("set {set_index} of module {module} has no questions")]
    EmptySet { module: ModuleCode, set_index: usize },
}

//
// ─── SETS ──────────────────────────────────────────────────────────────────────
//

/// A fixed, ordered group of questions within a module.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuizSet(Vec<Question>);

impl QuizSet {
    #[must_use]
    pub fn new(questions: Vec<Question>) -> Self {
        Self(questions)
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn first(&self) -> Option<&Question> {
        self.0.first()
    }

    /// Distinct diagnoses of this set in order of first appearance.
    #[must_use]
    pub fn answer_labels(&self) -> Vec<DiagnosisCode> {
        answer_label_set(&self.0)
    }
}

/// Distinct diagnosis codes across `questions`, in order of first appearance.
#[must_use]
pub fn answer_label_set(questions: &[Question]) -> Vec<DiagnosisCode> {
    let mut seen = BTreeSet::new();
    let mut labels = Vec::new();
    for question in questions {
        if seen.insert(&question.diagnosis) {
            labels.push(question.diagnosis.clone());
        }
    }
    labels
}

//
// ─── METADATA ──────────────────────────────────────────────────────────────────
//

/// Dataset-level metadata. Only `counts` is required by the quiz; the
/// remaining fields describe how the sets were built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetMeta {
    #[serde(default)]
    pub counts: BTreeMap<DiagnosisCode, u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audience: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_per_label: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scanned_lesions: Option<u64>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub set_sizes: BTreeMap<ModuleCode, Vec<usize>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

//
// ─── DATASET ───────────────────────────────────────────────────────────────────
//

/// The whole quiz dataset: modules with their fixed sets plus aggregate counts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub modules: BTreeMap<ModuleCode, Vec<QuizSet>>,
    #[serde(default)]
    pub meta: DatasetMeta,
}

impl Dataset {
    #[must_use]
    pub fn new(modules: BTreeMap<ModuleCode, Vec<QuizSet>>, meta: DatasetMeta) -> Self {
        Self { modules, meta }
    }

    /// Sets of a module; empty when the module is absent.
    #[must_use]
    pub fn sets(&self, module: &ModuleCode) -> &[QuizSet] {
        self.modules.get(module).map(Vec::as_slice).unwrap_or_default()
    }

    /// Resolve a module/set pair to a set that can be played.
    ///
    /// # Errors
    ///
    /// Returns `DatasetError` when the module or set is missing, or the set is empty.
    pub fn playable_set(
        &self,
        module: &ModuleCode,
        set_index: usize,
    ) -> Result<&QuizSet, DatasetError> {
        let sets = self
            .modules
            .get(module)
            .ok_or_else(|| DatasetError::UnknownModule {
                module: module.clone(),
            })?;
        let set = sets.get(set_index).ok_or_else(|| DatasetError::SetOutOfRange {
            module: module.clone(),
            set_index,
            available: sets.len(),
        })?;
        if set.is_empty() {
            return Err(DatasetError::EmptySet {
                module: module.clone(),
                set_index,
            });
        }
        Ok(set)
    }

    /// Aggregate count for a diagnosis from the metadata.
    #[must_use]
    pub fn count_for(&self, diagnosis: &DiagnosisCode) -> Option<u32> {
        self.meta.counts.get(diagnosis).copied()
    }

    #[must_use]
    pub fn question_count(&self) -> usize {
        self.modules
            .values()
            .flat_map(|sets| sets.iter())
            .map(QuizSet::len)
            .sum()
    }

    /// Module codes present in the data that the registry does not know.
    #[must_use]
    pub fn unknown_modules(&self) -> Vec<&ModuleCode> {
        self.modules
            .keys()
            .filter(|code| KnownModule::from_code(code).is_none())
            .collect()
    }

    /// Diagnosis codes used by questions that the registry does not know.
    #[must_use]
    pub fn unknown_diagnoses(&self) -> BTreeSet<&DiagnosisCode> {
        self.modules
            .values()
            .flat_map(|sets| sets.iter())
            .flat_map(|set| set.questions().iter())
            .map(|question| &question.diagnosis)
            .filter(|code| KnownDiagnosis::from_code(code).is_none())
            .collect()
    }
}
