use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use derm_core::model::Dataset;
use services::DatasetService;
use storage::DatasetSource;

use crate::context::{UiApp, build_app_context};
use crate::views::{
    DatasetHandle, PickerScreen, QuizRoot, QuizScreen, ShellActions, ShellScreens, SummaryScreen,
    use_picker_vm, use_shell_actions,
};
use crate::vm::{PickerVm, QuizVm, SummaryVm};

struct TestApp {
    dataset_service: Arc<DatasetService>,
}

impl UiApp for TestApp {
    fn app_title(&self) -> String {
        "Derm Quiz".to_string()
    }

    fn dataset_service(&self) -> Arc<DatasetService> {
        Arc::clone(&self.dataset_service)
    }
}

#[derive(Props, Clone)]
struct RootHarnessProps {
    app: Arc<TestApp>,
}

impl PartialEq for RootHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn RootHarness(props: RootHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    rsx! { QuizRoot {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

/// Mount the dataset-loading root over the given source.
pub fn setup_root_harness(source: Arc<dyn DatasetSource>) -> ViewHarness {
    let app = Arc::new(TestApp {
        dataset_service: Arc::new(DatasetService::new(source)),
    });
    let dom = VirtualDom::new_with_props(RootHarness, RootHarnessProps { app });
    ViewHarness { dom }
}

#[derive(Clone, PartialEq)]
pub enum ScreenKind {
    Picker(PickerVm),
    Quiz(QuizVm),
    Summary(SummaryVm),
}

#[derive(Props, Clone, PartialEq)]
struct ScreenHarnessProps {
    screen: ScreenKind,
}

#[component]
fn ScreenHarness(props: ScreenHarnessProps) -> Element {
    match props.screen {
        ScreenKind::Picker(picker) => rsx! {
            PickerScreen { picker: picker, on_select: |_| {} }
        },
        ScreenKind::Quiz(quiz) => rsx! {
            QuizScreen { quiz: quiz, on_answer: |_| {}, on_next: |_| {}, on_exit: |_| {} }
        },
        ScreenKind::Summary(summary) => rsx! {
            SummaryScreen { summary: summary, on_retry: |_| {}, on_exit: |_| {} }
        },
    }
}

/// Render a single screen from its view model.
pub fn render_screen(screen: ScreenKind) -> String {
    let mut dom = VirtualDom::new_with_props(ScreenHarness, ScreenHarnessProps { screen });
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

#[derive(Clone, Default)]
struct ShellHandles {
    actions: Rc<RefCell<Option<ShellActions>>>,
}

#[derive(Props, Clone)]
struct ShellHarnessProps {
    dataset: DatasetHandle,
    handles: ShellHandles,
}

impl PartialEq for ShellHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ShellHarnessRoot(props: ShellHarnessProps) -> Element {
    let actions = use_shell_actions(&props.dataset);
    let picker = use_picker_vm(&props.dataset);
    let handles = props.handles.clone();
    use_hook(move || {
        *handles.actions.borrow_mut() = Some(actions);
    });
    rsx! {
        ShellScreens { picker: picker, actions: actions }
    }
}

/// Mounted quiz shell whose event handlers can be fired from a test.
pub struct ShellHarness {
    pub dom: VirtualDom,
    handles: ShellHandles,
}

impl ShellHarness {
    pub fn actions(&self) -> ShellActions {
        self.handles
            .actions
            .borrow()
            .as_ref()
            .copied()
            .expect("shell actions registered")
    }

    /// Run an event handler inside the dom runtime, then flush the re-render.
    pub fn fire(&mut self, event: impl FnOnce(ShellActions)) {
        let actions = self.actions();
        self.dom.in_runtime(|| event(actions));
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn setup_shell_harness(dataset: Dataset) -> ShellHarness {
    let handles = ShellHandles::default();
    let mut dom = VirtualDom::new_with_props(
        ShellHarnessRoot,
        ShellHarnessProps {
            dataset: DatasetHandle(Arc::new(dataset)),
            handles: handles.clone(),
        },
    );
    dom.rebuild_in_place();
    drive_dom(&mut dom);
    ShellHarness { dom, handles }
}

/// Screen regions present in rendered html, in picker/quiz/summary order.
pub fn visible_screens(html: &str) -> Vec<&'static str> {
    ["picker", "quiz", "summary"]
        .into_iter()
        .filter(|id| html.contains(&format!("id=\"{id}\"")))
        .collect()
}
