use derm_core::model::{DiagnosisCode, display_label};
use services::{AnswerFeedback, QuizSession};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnswerState {
    Idle,
    Correct,
    Incorrect,
}

impl AnswerState {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Idle => "answer-btn",
            Self::Correct => "answer-btn answer-btn--correct",
            Self::Incorrect => "answer-btn answer-btn--incorrect",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnswerButtonVm {
    pub code: DiagnosisCode,
    pub label: String,
    pub state: AnswerState,
    pub disabled: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedbackVm {
    pub text: String,
    pub is_correct: bool,
}

impl FeedbackVm {
    #[must_use]
    pub fn class(&self) -> &'static str {
        if self.is_correct {
            "feedback feedback--correct"
        } else {
            "feedback feedback--incorrect"
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizVm {
    pub title: String,
    pub progress_label: String,
    pub score_label: String,
    pub image_url: String,
    pub image_alt: String,
    pub answers: Vec<AnswerButtonVm>,
    pub feedback: Option<FeedbackVm>,
    pub can_advance: bool,
    pub next_label: &'static str,
}

fn answer_state(code: &DiagnosisCode, feedback: Option<&AnswerFeedback>) -> AnswerState {
    match feedback {
        None => AnswerState::Idle,
        Some(fb) if *code == fb.correct => AnswerState::Correct,
        Some(fb) if *code == fb.selected => AnswerState::Incorrect,
        Some(_) => AnswerState::Idle,
    }
}

fn feedback_vm(feedback: &AnswerFeedback) -> FeedbackVm {
    let label = display_label(&feedback.correct);
    if feedback.is_correct() {
        FeedbackVm {
            text: format!("Correct! This is {label}."),
            is_correct: true,
        }
    } else {
        FeedbackVm {
            text: format!("Not quite. The correct answer is {label}."),
            is_correct: false,
        }
    }
}

/// Project the current question of a session into display data.
///
/// The correct choice is matched by diagnosis code, so it is highlighted even
/// when two codes would share a display label.
#[must_use]
pub fn map_quiz(session: &QuizSession) -> QuizVm {
    let progress = session.progress();
    let feedback = session.feedback();
    let (image_url, image_alt) = session.current_question().map_or_else(
        || (String::new(), String::new()),
        |question| {
            (
                question.image_url.clone(),
                format!("Dermoscopic image {}", question.id),
            )
        },
    );

    let answers = session
        .answer_labels()
        .iter()
        .map(|code| AnswerButtonVm {
            code: code.clone(),
            label: display_label(code).to_string(),
            state: answer_state(code, feedback),
            disabled: feedback.is_some(),
        })
        .collect();

    let is_last = progress.position >= progress.total;
    QuizVm {
        title: session.title().to_string(),
        progress_label: format!("Question {}/{}", progress.position, progress.total),
        score_label: format!("Score: {}", progress.score),
        image_url,
        image_alt,
        answers,
        feedback: feedback.map(feedback_vm),
        can_advance: progress.answered,
        next_label: if is_last { "Show results" } else { "Next question" },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use derm_core::model::{Dataset, DatasetMeta, ModuleCode, Question, QuizSet};
    use std::collections::BTreeMap;

    fn session() -> QuizSession {
        let questions = vec![
            Question::new("1", "https://img.test/1.jpg", "melanoma"),
            Question::new("2", "https://img.test/2.jpg", "x"),
        ];
        let mut modules = BTreeMap::new();
        modules.insert(ModuleCode::new("mel_vs_nevus"), vec![QuizSet::new(questions)]);
        let dataset = Dataset::new(modules, DatasetMeta::default());
        QuizSession::start(&dataset, &ModuleCode::new("mel_vs_nevus"), 0).unwrap()
    }

    #[test]
    fn unanswered_question_has_idle_enabled_buttons() {
        let vm = map_quiz(&session());
        assert_eq!(vm.title, "Melanoma vs nevus · Set 1");
        assert_eq!(vm.progress_label, "Question 1/2");
        assert_eq!(vm.score_label, "Score: 0");
        assert_eq!(vm.image_url, "https://img.test/1.jpg");
        let labels: Vec<_> = vm.answers.iter().map(|a| a.label.as_str()).collect();
        assert_eq!(labels, vec!["Melanoma", "x"]);
        assert!(vm.answers.iter().all(|a| a.state == AnswerState::Idle && !a.disabled));
        assert!(vm.feedback.is_none());
        assert!(!vm.can_advance);
    }

    #[test]
    fn wrong_answer_marks_selected_and_correct() {
        let mut session = session();
        session.submit_answer(&DiagnosisCode::new("x"));
        let vm = map_quiz(&session);

        assert_eq!(vm.answers[0].state, AnswerState::Correct);
        assert_eq!(vm.answers[1].state, AnswerState::Incorrect);
        assert!(vm.answers.iter().all(|a| a.disabled));
        let feedback = vm.feedback.unwrap();
        assert!(!feedback.is_correct);
        assert_eq!(feedback.text, "Not quite. The correct answer is Melanoma.");
        assert!(vm.can_advance);
        assert_eq!(vm.next_label, "Next question");
    }

    #[test]
    fn right_answer_on_last_question_offers_results() {
        let questions = vec![Question::new("1", "https://img.test/1.jpg", "melanoma")];
        let mut modules = BTreeMap::new();
        modules.insert(ModuleCode::new("mel_vs_nevus"), vec![QuizSet::new(questions)]);
        let dataset = Dataset::new(modules, DatasetMeta::default());
        let mut session = QuizSession::start(&dataset, &ModuleCode::new("mel_vs_nevus"), 0).unwrap();
        session.submit_answer(&DiagnosisCode::new("melanoma"));

        let vm = map_quiz(&session);
        assert_eq!(vm.answers[0].state, AnswerState::Correct);
        assert_eq!(vm.feedback.unwrap().text, "Correct! This is Melanoma.");
        assert_eq!(vm.next_label, "Show results");
    }
}
