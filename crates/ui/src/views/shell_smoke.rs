use std::collections::BTreeMap;

use derm_core::model::{Dataset, DatasetMeta, DiagnosisCode, ModuleCode, Question, QuizSet};

use super::test_harness::{ShellHarness, setup_shell_harness, visible_screens};
use crate::vm::SetChoice;

fn q(id: &str, diagnosis: &str) -> Question {
    Question::new(id, format!("https://img.test/{id}.jpg"), diagnosis)
}

fn dataset() -> Dataset {
    let mut modules = BTreeMap::new();
    modules.insert(
        ModuleCode::new("mel_vs_nevus"),
        vec![
            QuizSet::new(vec![q("1", "melanoma"), q("2", "nevus"), q("3", "melanoma")]),
            QuizSet::default(),
        ],
    );
    Dataset::new(modules, DatasetMeta::default())
}

fn choose(set_index: usize) -> SetChoice {
    SetChoice {
        module: ModuleCode::new("mel_vs_nevus"),
        set_index,
    }
}

fn answer(harness: &mut ShellHarness, code: &str) {
    let code = DiagnosisCode::new(code);
    harness.fire(|actions| actions.answer.call(code));
    harness.fire(|actions| actions.next.call(()));
}

#[test]
fn empty_set_shows_notice_over_picker() {
    let mut harness = setup_shell_harness(dataset());
    let html = harness.render();
    assert_eq!(visible_screens(&html), vec!["picker"], "{html}");
    assert!(!html.contains("id=\"notice\""), "notice shown at start: {html}");

    harness.fire(|actions| actions.select.call(choose(1)));
    let html = harness.render();
    assert!(html.contains("id=\"notice\""), "missing notice in {html}");
    assert!(html.contains("This set is not available."), "missing message in {html}");
    assert_eq!(visible_screens(&html), vec!["picker"], "{html}");

    harness.fire(|actions| actions.dismiss.call(()));
    let html = harness.render();
    assert!(!html.contains("id=\"notice\""), "notice not dismissed: {html}");
    assert_eq!(visible_screens(&html), vec!["picker"], "{html}");
}

#[test]
fn next_is_ignored_until_answered() {
    let mut harness = setup_shell_harness(dataset());
    harness.fire(|actions| actions.select.call(choose(0)));

    harness.fire(|actions| actions.next.call(()));
    let html = harness.render();
    assert_eq!(visible_screens(&html), vec!["quiz"], "{html}");
    assert!(html.contains("Question 1"), "advanced without answer: {html}");
    assert!(html.contains("next-btn--disabled"), "next enabled: {html}");
}

#[test]
fn playing_a_set_reaches_summary_then_retry_and_exit() {
    let mut harness = setup_shell_harness(dataset());

    harness.fire(|actions| actions.select.call(choose(0)));
    let html = harness.render();
    assert_eq!(visible_screens(&html), vec!["quiz"], "{html}");
    assert!(html.contains("Score: 0"), "missing score in {html}");

    answer(&mut harness, "melanoma");
    let html = harness.render();
    assert_eq!(visible_screens(&html), vec!["quiz"], "{html}");
    assert!(html.contains("Question 2"), "missing progress in {html}");
    assert!(html.contains("Score: 1"), "missing score in {html}");

    answer(&mut harness, "nevus");
    answer(&mut harness, "nevus");
    let html = harness.render();
    assert_eq!(visible_screens(&html), vec!["summary"], "{html}");
    assert!(html.contains("67%"), "missing percent in {html}");

    harness.fire(|actions| actions.retry.call(()));
    let html = harness.render();
    assert_eq!(visible_screens(&html), vec!["quiz"], "{html}");
    assert!(html.contains("Question 1"), "retry did not restart: {html}");
    assert!(html.contains("Score: 0"), "retry kept score: {html}");

    harness.fire(|actions| actions.exit.call(()));
    let html = harness.render();
    assert_eq!(visible_screens(&html), vec!["picker"], "{html}");
}
