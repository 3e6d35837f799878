mod picker;
mod quiz;
mod shell;
mod state;
mod summary;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod shell_smoke;
#[cfg(test)]
mod view_smoke;

pub use picker::{NoticeDialog, PickerScreen};
pub use quiz::QuizScreen;
pub use shell::{
    DatasetHandle, QuizRoot, QuizShell, ShellActions, ShellScreens, use_picker_vm, use_shell_actions,
};
pub use state::{ViewError, ViewState, view_state_from_resource};
pub use summary::SummaryScreen;
