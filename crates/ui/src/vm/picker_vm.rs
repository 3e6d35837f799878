use derm_core::model::{DatasetMeta, ModuleCode};
use services::{LabelCount, ModuleOverview};

/// A module/set pair the user asked to play.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SetChoice {
    pub module: ModuleCode,
    pub set_index: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SetButtonVm {
    pub label: String,
    pub detail: String,
    pub choice: SetChoice,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModuleCardVm {
    pub code: String,
    pub title: String,
    pub preview_image: Option<String>,
    pub sets_label: String,
    pub label_counts: Vec<String>,
    pub sets: Vec<SetButtonVm>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PickerVm {
    pub brand: Option<String>,
    pub audience: Option<String>,
    pub note: Option<String>,
    pub modules: Vec<ModuleCardVm>,
}

fn sets_label(count: usize) -> String {
    match count {
        0 => "No sets available".to_string(),
        1 => "1 set".to_string(),
        n => format!("{n} sets"),
    }
}

fn count_label(item: &LabelCount) -> String {
    item.count.map_or_else(
        || item.label.clone(),
        |count| format!("{}: {count}", item.label),
    )
}

#[must_use]
pub fn map_module_card(overview: &ModuleOverview) -> ModuleCardVm {
    let sets = overview
        .sets
        .iter()
        .map(|set| SetButtonVm {
            label: format!("Set {}", set.index + 1),
            detail: format!("{} questions", set.question_count),
            choice: SetChoice {
                module: overview.code.clone(),
                set_index: set.index,
            },
        })
        .collect();

    ModuleCardVm {
        code: overview.code.as_str().to_string(),
        title: overview.title.clone(),
        preview_image: overview.preview_image.clone(),
        sets_label: sets_label(overview.set_count()),
        label_counts: overview.label_counts.iter().map(count_label).collect(),
        sets,
    }
}

#[must_use]
pub fn map_picker(meta: &DatasetMeta, modules: &[ModuleOverview]) -> PickerVm {
    PickerVm {
        brand: meta.brand.clone(),
        audience: meta.audience.clone(),
        note: meta.note.clone(),
        modules: modules.iter().map(map_module_card).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use derm_core::model::DiagnosisCode;
    use services::SetOverview;

    fn overview(sets: usize) -> ModuleOverview {
        ModuleOverview {
            code: ModuleCode::new("mel_vs_nevus"),
            title: "Melanoma vs nevus".into(),
            preview_image: None,
            sets: (0..sets)
                .map(|index| SetOverview {
                    index,
                    question_count: 10,
                })
                .collect(),
            label_counts: vec![
                LabelCount {
                    code: DiagnosisCode::new("melanoma"),
                    label: "Melanoma".into(),
                    count: Some(15),
                },
                LabelCount {
                    code: DiagnosisCode::new("x"),
                    label: "x".into(),
                    count: None,
                },
            ],
        }
    }

    #[test]
    fn labels_sets_and_counts() {
        let card = map_module_card(&overview(3));
        assert_eq!(card.sets_label, "3 sets");
        assert_eq!(card.sets[2].label, "Set 3");
        assert_eq!(card.sets[2].choice.set_index, 2);
        assert_eq!(card.label_counts, vec!["Melanoma: 15".to_string(), "x".to_string()]);
    }

    #[test]
    fn empty_module_reports_no_sets() {
        let card = map_module_card(&overview(0));
        assert_eq!(card.sets_label, "No sets available");
        assert!(card.sets.is_empty());
        assert_eq!(map_module_card(&overview(1)).sets_label, "1 set");
    }
}
