use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use derm_core::ScoreTier;
use derm_core::model::{Dataset, DatasetMeta, DiagnosisCode, ModuleCode, Question, QuizSet};
use services::{CatalogService, SessionController};
use storage::{DatasetSource, InMemorySource, StorageError};

use super::test_harness::{ScreenKind, render_screen, setup_root_harness};
use crate::vm::{map_picker, map_quiz, map_summary};

fn q(id: &str, diagnosis: &str) -> Question {
    Question::new(id, format!("https://img.test/{id}.jpg"), diagnosis)
}

fn dataset() -> Dataset {
    let mut modules = BTreeMap::new();
    modules.insert(
        ModuleCode::new("mel_vs_nevus"),
        vec![QuizSet::new(vec![
            q("1", "melanoma"),
            q("2", "nevus"),
            q("3", "melanoma"),
        ])],
    );
    let mut meta = DatasetMeta::default();
    meta.counts.insert(DiagnosisCode::new("melanoma"), 15);
    meta.counts.insert(DiagnosisCode::new("nevus"), 15);
    meta.brand = Some("Lesion Lab".into());
    meta.audience = Some("Medical students".into());
    Dataset::new(modules, meta)
}

fn mel() -> ModuleCode {
    ModuleCode::new("mel_vs_nevus")
}

struct FailingSource;

#[async_trait]
impl DatasetSource for FailingSource {
    async fn load(&self) -> Result<Dataset, StorageError> {
        Err(StorageError::NotFound("quiz_sets.json".into()))
    }

    fn describe(&self) -> String {
        "failing".to_string()
    }
}

#[tokio::test(flavor = "current_thread")]
async fn root_loads_dataset_and_shows_picker() {
    let mut harness = setup_root_harness(Arc::new(InMemorySource::new(dataset())));
    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Derm Quiz"), "missing app title in {html}");
    assert!(html.contains("Choose a module"), "missing picker in {html}");
    assert!(html.contains("Lesion Lab"), "missing brand in {html}");
    assert!(html.contains("Melanoma vs nevus"), "missing module in {html}");
    assert!(html.contains("Set 1"), "missing set button in {html}");
    assert!(html.contains("Unavailable"), "missing unavailable module in {html}");
    assert!(!html.contains("quiz__image"), "quiz rendered alongside picker: {html}");
    assert!(!html.contains("summary__score"), "summary rendered alongside picker: {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn root_shows_fatal_error_when_load_fails() {
    let mut harness = setup_root_harness(Arc::new(FailingSource));
    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Could not load the quiz"), "missing error in {html}");
    assert!(!html.contains("Choose a module"), "picker rendered on failure: {html}");
}

#[test]
fn picker_screen_lists_label_counts() {
    let dataset = Arc::new(dataset());
    let modules = CatalogService::new(Arc::clone(&dataset)).modules();
    let html = render_screen(ScreenKind::Picker(map_picker(&dataset.meta, &modules)));

    assert!(html.contains("Melanoma: 15"), "missing count in {html}");
    assert!(html.contains("Nevus: 15"), "missing count in {html}");
    assert!(html.contains("Medical students"), "missing audience in {html}");
    assert!(html.contains("3 questions"), "missing set detail in {html}");
}

#[test]
fn quiz_screen_marks_correct_and_selected_answers() {
    let mut controller = SessionController::new(Arc::new(dataset()));
    controller.start(&mel(), 0).unwrap();
    controller.submit_answer(&DiagnosisCode::new("nevus")).unwrap();
    let quiz = map_quiz(controller.active().unwrap());
    let html = render_screen(ScreenKind::Quiz(quiz));

    assert!(html.contains("Question 1"), "missing progress in {html}");
    assert!(html.contains("Score: 0"), "missing score in {html}");
    assert!(html.contains("answer-btn--correct"), "missing correct marker in {html}");
    assert!(html.contains("answer-btn--incorrect"), "missing incorrect marker in {html}");
    assert!(
        html.contains("Not quite. The correct answer is Melanoma."),
        "missing feedback in {html}"
    );
    assert!(!html.contains("next-btn--disabled"), "next disabled after answer: {html}");
}

#[test]
fn quiz_screen_blocks_advance_before_answer() {
    let mut controller = SessionController::new(Arc::new(dataset()));
    controller.start(&mel(), 0).unwrap();
    let html = render_screen(ScreenKind::Quiz(map_quiz(controller.active().unwrap())));

    assert!(html.contains("next-btn--disabled"), "next enabled before answer: {html}");
    assert!(!html.contains("feedback"), "feedback shown before answer: {html}");
}

#[test]
fn summary_screen_shows_percent_and_tier_message() {
    let mut controller = SessionController::new(Arc::new(dataset()));
    controller.start(&mel(), 0).unwrap();
    for code in ["melanoma", "nevus", "nevus"] {
        controller.submit_answer(&DiagnosisCode::new(code)).unwrap();
        controller.advance().unwrap();
    }
    let html = render_screen(ScreenKind::Summary(map_summary(
        controller.finished().unwrap(),
    )));

    assert!(html.contains("67%"), "missing percent in {html}");
    assert!(html.contains(ScoreTier::Middle.message()), "missing message in {html}");
    assert!(html.contains("Retry this set"), "missing retry in {html}");
}
