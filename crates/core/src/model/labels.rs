//! Static label registry.
//!
//! Maps diagnosis codes and module codes to their display strings. The
//! registry is fixed at compile time; anything not listed here falls back
//! to the raw code.

use crate::model::ids::{DiagnosisCode, ModuleCode};

//
// ─── DIAGNOSES ─────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KnownDiagnosis {
    Melanoma,
    Nevus,
    Bcc,
    SebaceousHyperplasia,
    ActinicKeratosis,
    Bowen,
}

impl KnownDiagnosis {
    pub const ALL: [KnownDiagnosis; 6] = [
        KnownDiagnosis::Melanoma,
        KnownDiagnosis::Nevus,
        KnownDiagnosis::Bcc,
        KnownDiagnosis::SebaceousHyperplasia,
        KnownDiagnosis::ActinicKeratosis,
        KnownDiagnosis::Bowen,
    ];

    #[must_use]
    pub fn code_str(self) -> &'static str {
        match self {
            KnownDiagnosis::Melanoma => "melanoma",
            KnownDiagnosis::Nevus => "nevus",
            KnownDiagnosis::Bcc => "bcc",
            KnownDiagnosis::SebaceousHyperplasia => "sebaceous_hyperplasia",
            KnownDiagnosis::ActinicKeratosis => "actinic_keratosis",
            KnownDiagnosis::Bowen => "bowen",
        }
    }

    #[must_use]
    pub fn code(self) -> DiagnosisCode {
        DiagnosisCode::new(self.code_str())
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            KnownDiagnosis::Melanoma => "Melanoma",
            KnownDiagnosis::Nevus => "Nevus",
            KnownDiagnosis::Bcc => "Basal cell carcinoma",
            KnownDiagnosis::SebaceousHyperplasia => "Sebaceous hyperplasia",
            KnownDiagnosis::ActinicKeratosis => "Actinic keratosis",
            KnownDiagnosis::Bowen => "Bowen's disease (SCC in situ)",
        }
    }

    #[must_use]
    pub fn from_code(code: &DiagnosisCode) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|known| known.code_str() == code.as_str())
    }

    /// Classify a free-text pathology outcome into a known diagnosis.
    ///
    /// Checks run in a fixed order: a text mentioning both "melanoma" and
    /// "nevus" (e.g. "melanoma arising in nevus") classifies as melanoma.
    #[must_use]
    pub fn classify_text(text: &str) -> Option<Self> {
        let text = text.to_lowercase();
        if text.contains("actinic keratosis") {
            return Some(KnownDiagnosis::ActinicKeratosis);
        }
        if text.contains("basal cell carcinoma") {
            return Some(KnownDiagnosis::Bcc);
        }
        if text.contains("melanoma") {
            return Some(KnownDiagnosis::Melanoma);
        }
        if text.contains("nevus") || text.contains("naevus") {
            return Some(KnownDiagnosis::Nevus);
        }
        if text.contains("bowen") || text.contains("squamous cell carcinoma in situ") {
            return Some(KnownDiagnosis::Bowen);
        }
        None
    }
}

/// Display string for a diagnosis code, or the raw code when unmapped.
#[must_use]
pub fn display_label(code: &DiagnosisCode) -> &str {
    KnownDiagnosis::from_code(code).map_or(code.as_str(), |known| known.label())
}

//
// ─── MODULES ───────────────────────────────────────────────────────────────────
//

/// Modules the picker knows how to present, in picker order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KnownModule {
    MelanomaVsNevus,
    BccVsSebaceousHyperplasia,
    AkVsBowen,
}

impl KnownModule {
    pub const ALL: [KnownModule; 3] = [
        KnownModule::MelanomaVsNevus,
        KnownModule::BccVsSebaceousHyperplasia,
        KnownModule::AkVsBowen,
    ];

    #[must_use]
    pub fn code_str(self) -> &'static str {
        match self {
            KnownModule::MelanomaVsNevus => "mel_vs_nevus",
            KnownModule::BccVsSebaceousHyperplasia => "bcc_vs_sh",
            KnownModule::AkVsBowen => "ak_vs_bowen",
        }
    }

    #[must_use]
    pub fn code(self) -> ModuleCode {
        ModuleCode::new(self.code_str())
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            KnownModule::MelanomaVsNevus => "Melanoma vs nevus",
            KnownModule::BccVsSebaceousHyperplasia => {
                "Basal cell carcinoma vs sebaceous hyperplasia"
            }
            KnownModule::AkVsBowen => "Actinic keratosis vs Bowen's disease",
        }
    }

    /// The pair of diagnoses this module contrasts.
    #[must_use]
    pub fn diagnoses(self) -> (KnownDiagnosis, KnownDiagnosis) {
        match self {
            KnownModule::MelanomaVsNevus => (KnownDiagnosis::Melanoma, KnownDiagnosis::Nevus),
            KnownModule::BccVsSebaceousHyperplasia => {
                (KnownDiagnosis::Bcc, KnownDiagnosis::SebaceousHyperplasia)
            }
            KnownModule::AkVsBowen => (KnownDiagnosis::ActinicKeratosis, KnownDiagnosis::Bowen),
        }
    }

    #[must_use]
    pub fn from_code(code: &ModuleCode) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|known| known.code_str() == code.as_str())
    }
}

/// Display title for a module code, or the raw code when unmapped.
#[must_use]
pub fn module_title(code: &ModuleCode) -> &str {
    KnownModule::from_code(code).map_or(code.as_str(), |known| known.title())
}
