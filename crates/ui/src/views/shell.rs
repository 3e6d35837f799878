use std::sync::Arc;

use derm_core::model::{Dataset, DiagnosisCode};
use dioxus::prelude::*;
use services::{CatalogService, SessionController, SessionState};
use tracing::warn;

use crate::context::AppContext;
use crate::views::{
    NoticeDialog, PickerScreen, QuizScreen, SummaryScreen, ViewError, ViewState,
    view_state_from_resource,
};
use crate::vm::{PickerVm, QuizVm, SetChoice, SummaryVm, map_picker, map_quiz, map_summary};

/// Loaded dataset shared with the quiz shell.
///
/// Compared by pointer: the dataset is loaded once and never mutated.
#[derive(Clone)]
pub struct DatasetHandle(pub Arc<Dataset>);

impl PartialEq for DatasetHandle {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

/// Loads the dataset once, then hands it to the quiz shell.
#[component]
pub fn QuizRoot() -> Element {
    let ctx = use_context::<AppContext>();
    let loader = ctx.dataset_service();
    let title = ctx.app_title().to_string();

    let resource = use_resource(move || {
        let loader = Arc::clone(&loader);
        async move { loader.load().await.map_err(|_| ViewError::LoadFailed) }
    });
    let state = view_state_from_resource(&resource);

    rsx! {
        header { class: "app-header",
            h1 { class: "app-title", "{title}" }
        }
        main { class: "app-main",
            match state {
                ViewState::Idle | ViewState::Loading => rsx! {
                    p { class: "loading", "Loading quiz sets..." }
                },
                ViewState::Ready(dataset) => rsx! {
                    QuizShell { dataset: DatasetHandle(dataset) }
                },
                ViewState::Error(err) => rsx! {
                    div { class: "fatal", id: "load-error",
                        h2 { "Could not load the quiz" }
                        p { "{err.message()}" }
                    }
                },
            }
        }
    }
}

enum Screen {
    Picker,
    Quiz(QuizVm),
    Summary(SummaryVm),
}

/// Session state and the event handlers that drive it.
#[derive(Clone, Copy, PartialEq)]
pub struct ShellActions {
    pub controller: Signal<SessionController>,
    pub notice: Signal<Option<ViewError>>,
    pub select: Callback<SetChoice>,
    pub answer: Callback<DiagnosisCode>,
    pub next: Callback<()>,
    pub exit: Callback<()>,
    pub retry: Callback<()>,
    pub dismiss: Callback<()>,
}

pub fn use_shell_actions(dataset: &DatasetHandle) -> ShellActions {
    let shared = Arc::clone(&dataset.0);
    let controller = use_signal(move || SessionController::new(shared));
    let notice = use_signal(|| None::<ViewError>);

    let select = use_callback(move |choice: SetChoice| {
        let mut controller = controller;
        let mut notice = notice;
        let result = controller.write().start(&choice.module, choice.set_index);
        if let Err(err) = result {
            notice.set(Some(ViewError::from_session(&err)));
        }
    });

    let answer = use_callback(move |code: DiagnosisCode| {
        let mut controller = controller;
        if let Err(err) = controller.write().submit_answer(&code) {
            warn!(error = %err, "answer ignored");
        }
    });

    let next = use_callback(move |()| {
        let mut controller = controller;
        if let Err(err) = controller.write().advance() {
            warn!(error = %err, "cannot advance");
        }
    });

    let exit = use_callback(move |()| {
        let mut controller = controller;
        controller.write().exit();
    });

    let retry = use_callback(move |()| {
        let mut controller = controller;
        let mut notice = notice;
        if let Err(err) = controller.write().restart() {
            warn!(error = %err, "cannot restart");
            notice.set(Some(ViewError::from_session(&err)));
        }
    });

    let dismiss = use_callback(move |()| {
        let mut notice = notice;
        notice.set(None);
    });

    ShellActions {
        controller,
        notice,
        select,
        answer,
        next,
        exit,
        retry,
        dismiss,
    }
}

/// Picker listing, computed once from the loaded dataset.
pub fn use_picker_vm(dataset: &DatasetHandle) -> PickerVm {
    use_hook(|| {
        let modules = CatalogService::new(Arc::clone(&dataset.0)).modules();
        map_picker(&dataset.0.meta, &modules)
    })
}

#[component]
pub fn QuizShell(dataset: DatasetHandle) -> Element {
    let actions = use_shell_actions(&dataset);
    let picker = use_picker_vm(&dataset);
    rsx! {
        ShellScreens { picker: picker, actions: actions }
    }
}

/// Shows exactly one of picker, quiz or summary, driven by the session state.
#[component]
pub fn ShellScreens(picker: PickerVm, actions: ShellActions) -> Element {
    let screen = match actions.controller.read().state() {
        SessionState::NoSession => Screen::Picker,
        SessionState::Active(session) => Screen::Quiz(map_quiz(session)),
        SessionState::Finished(result) => Screen::Summary(map_summary(result)),
    };
    let notice_message = actions.notice.read().map(|err| err.message().to_string());

    rsx! {
        match screen {
            Screen::Picker => rsx! {
                PickerScreen { picker: picker.clone(), on_select: actions.select }
            },
            Screen::Quiz(quiz) => rsx! {
                QuizScreen {
                    quiz: quiz,
                    on_answer: actions.answer,
                    on_next: actions.next,
                    on_exit: actions.exit,
                }
            },
            Screen::Summary(summary) => rsx! {
                SummaryScreen { summary: summary, on_retry: actions.retry, on_exit: actions.exit }
            },
        }
        if let Some(message) = notice_message {
            NoticeDialog { message: message, on_dismiss: actions.dismiss }
        }
    }
}
