use std::sync::Arc;

use derm_core::model::{
    Dataset, DiagnosisCode, KnownModule, ModuleCode, Question, answer_label_set, display_label,
};

/// Presentation-agnostic summary of one module for the picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleOverview {
    pub code: ModuleCode,
    pub title: String,
    /// Image of the first question of the first set, if any.
    pub preview_image: Option<String>,
    pub sets: Vec<SetOverview>,
    pub label_counts: Vec<LabelCount>,
}

impl ModuleOverview {
    #[must_use]
    pub fn set_count(&self) -> usize {
        self.sets.len()
    }

    #[must_use]
    pub fn has_sets(&self) -> bool {
        !self.sets.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetOverview {
    pub index: usize,
    pub question_count: usize,
}

/// Aggregate dataset count for one diagnosis present in a module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelCount {
    pub code: DiagnosisCode,
    pub label: String,
    /// `None` when the metadata has no count for this code.
    pub count: Option<u32>,
}

/// Builds the module picker listing from the loaded dataset.
///
/// Only modules known to the label registry are listed, in registry order;
/// unknown module codes in the data are skipped.
#[derive(Debug, Clone)]
pub struct CatalogService {
    dataset: Arc<Dataset>,
}

impl CatalogService {
    #[must_use]
    pub fn new(dataset: Arc<Dataset>) -> Self {
        Self { dataset }
    }

    #[must_use]
    pub fn modules(&self) -> Vec<ModuleOverview> {
        KnownModule::ALL
            .into_iter()
            .map(|module| self.overview(module))
            .collect()
    }

    fn overview(&self, module: KnownModule) -> ModuleOverview {
        let code = module.code();
        let sets = self.dataset.sets(&code);

        let preview_image = sets
            .first()
            .and_then(|set| set.first())
            .map(|question| question.image_url.clone());

        let all_questions: Vec<Question> = sets
            .iter()
            .flat_map(|set| set.questions().iter().cloned())
            .collect();
        let label_counts = answer_label_set(&all_questions)
            .into_iter()
            .map(|code| LabelCount {
                label: display_label(&code).to_string(),
                count: self.dataset.count_for(&code),
                code,
            })
            .collect();

        ModuleOverview {
            title: module.title().to_string(),
            preview_image,
            sets: sets
                .iter()
                .enumerate()
                .map(|(index, set)| SetOverview {
                    index,
                    question_count: set.len(),
                })
                .collect(),
            label_counts,
            code,
        }
    }
}
