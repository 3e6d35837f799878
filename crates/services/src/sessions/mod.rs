mod controller;
mod progress;
mod service;
mod summary;

// Public API of the session subsystem.
pub use crate::error::SessionError;
pub use controller::{AdvanceOutcome, SessionController, SessionPhase, SessionState};
pub use progress::SessionProgress;
pub use service::{AnswerFeedback, QuizSession, SubmitOutcome};
pub use summary::SessionResult;
