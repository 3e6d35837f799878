use std::fmt;

use derm_core::model::{Dataset, DiagnosisCode, ModuleCode, Question, module_title};
use tracing::debug;

use crate::error::SessionError;
use super::progress::SessionProgress;
use super::summary::SessionResult;

//
// ─── FEEDBACK ──────────────────────────────────────────────────────────────────
//

/// What the user picked for the current question, and what was correct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerFeedback {
    pub selected: DiagnosisCode,
    pub correct: DiagnosisCode,
}

impl AnswerFeedback {
    #[must_use]
    pub fn is_correct(&self) -> bool {
        self.selected == self.correct
    }
}

/// Result of a submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// First answer for this question; scored.
    Recorded(AnswerFeedback),
    /// The question was already answered; nothing changed.
    AlreadyAnswered,
}

pub(crate) enum Advance {
    Next,
    Finished(SessionResult),
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// In-memory run through one fixed set.
///
/// Steps through the questions in their stored order. Each question accepts a
/// single scored answer; later submissions are ignored until `advance`.
#[derive(Clone, PartialEq, Eq)]
pub struct QuizSession {
    module: ModuleCode,
    set_index: usize,
    title: String,
    answer_labels: Vec<DiagnosisCode>,
    questions: Vec<Question>,
    current: usize,
    score: u32,
    feedback: Option<AnswerFeedback>,
}

impl QuizSession {
    /// Start a session over the given module/set.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::UnavailableSet` if the set is missing or empty.
    pub fn start(
        dataset: &Dataset,
        module: &ModuleCode,
        set_index: usize,
    ) -> Result<Self, SessionError> {
        let set = dataset.playable_set(module, set_index)?;
        Ok(Self {
            module: module.clone(),
            set_index,
            title: session_title(module, set_index),
            answer_labels: set.answer_labels(),
            questions: set.questions().to_vec(),
            current: 0,
            score: 0,
            feedback: None,
        })
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Choices offered for every question of this session.
    #[must_use]
    pub fn answer_labels(&self) -> &[DiagnosisCode] {
        &self.answer_labels
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Zero-based index of the question on screen.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current)
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        u32::try_from(self.questions.len()).unwrap_or(u32::MAX)
    }

    #[must_use]
    pub fn is_answered(&self) -> bool {
        self.feedback.is_some()
    }

    #[must_use]
    pub fn feedback(&self) -> Option<&AnswerFeedback> {
        self.feedback.as_ref()
    }

    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        SessionProgress {
            position: self.current + 1,
            total: self.questions.len(),
            score: self.score,
            answered: self.is_answered(),
        }
    }

    /// Record the answer for the current question.
    ///
    /// Only the first submission per question counts; it awards exactly one
    /// point when it matches the diagnosis.
    pub fn submit_answer(&mut self, label: &DiagnosisCode) -> SubmitOutcome {
        if self.feedback.is_some() {
            return SubmitOutcome::AlreadyAnswered;
        }
        let Some(question) = self.questions.get(self.current) else {
            return SubmitOutcome::AlreadyAnswered;
        };

        let feedback = AnswerFeedback {
            selected: label.clone(),
            correct: question.diagnosis.clone(),
        };
        if feedback.is_correct() {
            self.score += 1;
        }
        debug!(
            question = %question.id,
            selected = %label,
            correct = feedback.is_correct(),
            score = self.score,
            "answer recorded"
        );
        self.feedback = Some(feedback.clone());
        SubmitOutcome::Recorded(feedback)
    }

    pub(crate) fn advance(&mut self) -> Result<Advance, SessionError> {
        if self.feedback.is_none() {
            return Err(SessionError::NotAnswered);
        }
        if self.current + 1 >= self.questions.len() {
            return Ok(Advance::Finished(SessionResult::new(
                self.module.clone(),
                self.set_index,
                self.title.clone(),
                self.score,
                self.total(),
            )));
        }
        self.current += 1;
        self.feedback = None;
        Ok(Advance::Next)
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("module", &self.module)
            .field("set_index", &self.set_index)
            .field("questions_len", &self.questions.len())
            .field("current", &self.current)
            .field("score", &self.score)
            .field("answered", &self.feedback.is_some())
            .finish_non_exhaustive()
    }
}

fn session_title(module: &ModuleCode, set_index: usize) -> String {
    format!("{} · Set {}", module_title(module), set_index + 1)
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
