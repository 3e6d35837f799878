mod picker_vm;
mod quiz_vm;
mod summary_vm;

pub use picker_vm::{ModuleCardVm, PickerVm, SetButtonVm, SetChoice, map_picker};
pub use quiz_vm::{AnswerButtonVm, AnswerState, FeedbackVm, QuizVm, map_quiz};
pub use summary_vm::{SummaryVm, map_summary};
