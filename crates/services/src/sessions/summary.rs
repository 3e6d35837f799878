use derm_core::model::ModuleCode;
use derm_core::{ScoreTier, percentage};

/// Outcome of a finished session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionResult {
    pub module: ModuleCode,
    pub set_index: usize,
    pub title: String,
    pub score: u32,
    pub total: u32,
    pub percent: u32,
    pub tier: ScoreTier,
}

impl SessionResult {
    #[must_use]
    pub fn new(
        module: ModuleCode,
        set_index: usize,
        title: impl Into<String>,
        score: u32,
        total: u32,
    ) -> Self {
        let percent = percentage(score, total);
        Self {
            module,
            set_index,
            title: title.into(),
            score,
            total,
            percent,
            tier: ScoreTier::from_percent(percent),
        }
    }
}
