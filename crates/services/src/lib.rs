#![forbid(unsafe_code)]

pub mod catalog;
pub mod dataset_service;
pub mod error;
pub mod sessions;

pub use catalog::{CatalogService, LabelCount, ModuleOverview, SetOverview};
pub use dataset_service::DatasetService;
pub use error::{DatasetLoadError, SessionError};
pub use sessions::{
    AdvanceOutcome, AnswerFeedback, QuizSession, SessionController, SessionPhase,
    SessionProgress, SessionResult, SessionState, SubmitOutcome,
};
