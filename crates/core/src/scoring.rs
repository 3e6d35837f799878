//! Final score math for a finished session.

/// Percentage of correct answers, rounded half-up to a whole number.
///
/// Computed in integers so that exact halves (e.g. 1/8 = 12.5%) always round
/// up. Returns 0 for an empty session.
#[must_use]
pub fn percentage(score: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    let score = u64::from(score.min(total));
    let total = u64::from(total);
    let rounded = (200 * score + total) / (2 * total);
    // score <= total, so rounded <= 100.
    u32::try_from(rounded).unwrap_or(100)
}

/// Motivational band for a final percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreTier {
    Top,
    Middle,
    Encouragement,
}

impl ScoreTier {
    pub const TOP_THRESHOLD: u32 = 85;
    pub const MIDDLE_THRESHOLD: u32 = 65;

    #[must_use]
    pub fn from_percent(percent: u32) -> Self {
        if percent >= Self::TOP_THRESHOLD {
            ScoreTier::Top
        } else if percent >= Self::MIDDLE_THRESHOLD {
            ScoreTier::Middle
        } else {
            ScoreTier::Encouragement
        }
    }

    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            ScoreTier::Top => "Excellent work! Your pattern recognition is strong.",
            ScoreTier::Middle => {
                "Good job. A few more rounds will sharpen the differences."
            }
            ScoreTier::Encouragement => {
                "Keep practising. Review the features and try this set again."
            }
        }
    }
}
