use derm_core::ScoreTier;
use services::SessionResult;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SummaryVm {
    pub title: String,
    pub score_label: String,
    pub percent_label: String,
    pub message: &'static str,
    pub tier_class: &'static str,
}

fn tier_class(tier: ScoreTier) -> &'static str {
    match tier {
        ScoreTier::Top => "summary summary--top",
        ScoreTier::Middle => "summary summary--middle",
        ScoreTier::Encouragement => "summary summary--low",
    }
}

#[must_use]
pub fn map_summary(result: &SessionResult) -> SummaryVm {
    SummaryVm {
        title: result.title.clone(),
        score_label: format!("{}/{}", result.score, result.total),
        percent_label: format!("{}%", result.percent),
        message: result.tier.message(),
        tier_class: tier_class(result.tier),
    }
}
