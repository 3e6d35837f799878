use std::sync::Arc;

use derm_core::model::{Dataset, DiagnosisCode, ModuleCode};
use tracing::{info, warn};

use crate::error::SessionError;
use super::service::{Advance, QuizSession, SubmitOutcome};
use super::summary::SessionResult;

/// The three mutually exclusive states of the quiz.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    NoSession,
    Active(QuizSession),
    Finished(SessionResult),
}

/// Screen-level projection of `SessionState`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Picker,
    Quiz,
    Summary,
}

/// Result of moving past an answered question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdvanceOutcome {
    /// Moved to the question at this zero-based index.
    Next { index: usize },
    Finished(SessionResult),
}

/// Owns the dataset handle and the single active session.
///
/// All transitions are synchronous; the session is replaced wholesale on
/// every `start`.
#[derive(Debug, Clone)]
pub struct SessionController {
    dataset: Arc<Dataset>,
    state: SessionState,
}

impl SessionController {
    #[must_use]
    pub fn new(dataset: Arc<Dataset>) -> Self {
        Self {
            dataset,
            state: SessionState::NoSession,
        }
    }

    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        match self.state {
            SessionState::NoSession => SessionPhase::Picker,
            SessionState::Active(_) => SessionPhase::Quiz,
            SessionState::Finished(_) => SessionPhase::Summary,
        }
    }

    #[must_use]
    pub fn active(&self) -> Option<&QuizSession> {
        match &self.state {
            SessionState::Active(session) => Some(session),
            _ => None,
        }
    }

    #[must_use]
    pub fn finished(&self) -> Option<&SessionResult> {
        match &self.state {
            SessionState::Finished(result) => Some(result),
            _ => None,
        }
    }

    /// Start a fresh session over a module/set.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::UnavailableSet` when the set is missing or has no
    /// questions. The current state is left untouched in that case.
    pub fn start(&mut self, module: &ModuleCode, set_index: usize) -> Result<(), SessionError> {
        let session = match QuizSession::start(&self.dataset, module, set_index) {
            Ok(session) => session,
            Err(err) => {
                warn!(%module, set_index, error = %err, "set unavailable");
                return Err(err);
            }
        };
        info!(
            %module,
            set_index,
            questions = session.questions().len(),
            labels = session.answer_labels().len(),
            "quiz session started"
        );
        self.state = SessionState::Active(session);
        Ok(())
    }

    /// Submit an answer for the current question.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NoActiveSession` outside of an active session.
    pub fn submit_answer(&mut self, label: &DiagnosisCode) -> Result<SubmitOutcome, SessionError> {
        match &mut self.state {
            SessionState::Active(session) => Ok(session.submit_answer(label)),
            _ => Err(SessionError::NoActiveSession),
        }
    }

    /// Move to the next question, or finish after the last one.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotAnswered` before the current question has an
    /// answer, or `SessionError::NoActiveSession` outside of an active session.
    pub fn advance(&mut self) -> Result<AdvanceOutcome, SessionError> {
        let SessionState::Active(session) = &mut self.state else {
            return Err(SessionError::NoActiveSession);
        };
        match session.advance()? {
            Advance::Next => Ok(AdvanceOutcome::Next {
                index: session.current_index(),
            }),
            Advance::Finished(result) => {
                info!(
                    module = %result.module,
                    set_index = result.set_index,
                    score = result.score,
                    total = result.total,
                    percent = result.percent,
                    "quiz session finished"
                );
                self.state = SessionState::Finished(result.clone());
                Ok(AdvanceOutcome::Finished(result))
            }
        }
    }

    /// Discard any session and return to the picker.
    pub fn exit(&mut self) {
        if !matches!(self.state, SessionState::NoSession) {
            info!("quiz session closed");
        }
        self.state = SessionState::NoSession;
    }

    /// Replay the set that just finished, from the first question.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotFinished` unless the session has finished.
    pub fn restart(&mut self) -> Result<(), SessionError> {
        let SessionState::Finished(result) = &self.state else {
            return Err(SessionError::NotFinished);
        };
        let module = result.module.clone();
        let set_index = result.set_index;
        self.start(&module, set_index)
    }
}
