mod dataset;
mod ids;
pub mod labels;
mod question;

pub use dataset::{Dataset, DatasetError, DatasetMeta, QuizSet, answer_label_set};
pub use ids::{DiagnosisCode, ModuleCode, QuestionId};
pub use labels::{KnownDiagnosis, KnownModule, display_label, module_title};
pub use question::Question;
