//! Offline construction of the fixed quiz sets.
//!
//! Labelled cases are grouped per diagnosis, capped and de-duplicated, then
//! paired into interleaved sets per module. The output is deterministic for
//! a given input, so the quiz never samples at runtime.

use std::collections::BTreeMap;

use derm_core::model::{
    Dataset, DatasetMeta, DiagnosisCode, KnownDiagnosis, KnownModule, Question, QuizSet,
};
use serde::Deserialize;
use tracing::{debug, warn};

//
// ─── CONFIG ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfig {
    pub sets: usize,
    pub preferred_per_class: usize,
    pub fallback_per_class: usize,
    pub target_per_label: usize,
    pub brand: Option<String>,
    pub audience: Option<String>,
    pub note: Option<String>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            sets: 3,
            preferred_per_class: 5,
            fallback_per_class: 3,
            target_per_label: 15,
            brand: None,
            audience: None,
            note: Some("Fixed quiz sets (not random)".to_string()),
        }
    }
}

//
// ─── INPUT ─────────────────────────────────────────────────────────────────────
//

/// A labelled case as found in an export. `diagnosis` is either a known code
/// or free pathology text that gets classified.
#[derive(Debug, Clone, Deserialize)]
pub struct RawCase {
    pub id: String,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
    pub diagnosis: String,
    #[serde(default)]
    pub source: Option<String>,
}

/// Map a histopathology outcome to a known diagnosis code.
///
/// Accepts either a code as-is (`"bcc"`) or free text
/// (`"Basal cell carcinoma, nodular"`).
#[must_use]
pub fn classify_diagnosis_text(text: &str) -> Option<DiagnosisCode> {
    let code = DiagnosisCode::new(text.trim());
    KnownDiagnosis::from_code(&code)
        .or_else(|| KnownDiagnosis::classify_text(text))
        .map(KnownDiagnosis::code)
}

impl RawCase {
    /// Resolve to a question with a known diagnosis code.
    #[must_use]
    pub fn into_question(self) -> Option<Question> {
        let code = classify_diagnosis_text(&self.diagnosis)?;
        let mut question = Question::new(self.id, self.image_url, code);
        question.source = self.source;
        Some(question)
    }
}

//
// ─── BUCKETS ───────────────────────────────────────────────────────────────────
//

/// Cases grouped per diagnosis, each bucket capped at `target_per_label`.
#[derive(Debug, Clone)]
pub struct CaseBuckets {
    target_per_label: usize,
    buckets: BTreeMap<DiagnosisCode, Vec<Question>>,
}

impl CaseBuckets {
    #[must_use]
    pub fn new(target_per_label: usize) -> Self {
        Self {
            target_per_label,
            buckets: BTreeMap::new(),
        }
    }

    /// Add a case to its diagnosis bucket.
    ///
    /// Returns `false` when the case was dropped: missing id or image, bucket
    /// already full, or a case with the same id already present.
    pub fn add_case(&mut self, case: Question) -> bool {
        if case.id.as_str().is_empty() || case.image_url.is_empty() {
            return false;
        }
        let bucket = self.buckets.entry(case.diagnosis.clone()).or_default();
        if bucket.len() >= self.target_per_label {
            return false;
        }
        if bucket.iter().any(|existing| existing.id == case.id) {
            return false;
        }
        bucket.push(case);
        true
    }

    #[must_use]
    pub fn bucket(&self, code: &DiagnosisCode) -> &[Question] {
        self.buckets.get(code).map(Vec::as_slice).unwrap_or_default()
    }

    #[must_use]
    pub fn counts(&self) -> BTreeMap<DiagnosisCode, u32> {
        self.buckets
            .iter()
            .map(|(code, cases)| (code.clone(), u32::try_from(cases.len()).unwrap_or(u32::MAX)))
            .collect()
    }

    /// Whether every known diagnosis has reached the target.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        KnownDiagnosis::ALL
            .iter()
            .all(|known| self.bucket(&known.code()).len() >= self.target_per_label)
    }
}

/// Classify raw cases and collect them into capped buckets.
#[must_use]
pub fn collect_cases(cases: Vec<RawCase>, target_per_label: usize) -> CaseBuckets {
    let mut buckets = CaseBuckets::new(target_per_label);
    for case in cases {
        let id = case.id.clone();
        match case.into_question() {
            Some(question) => {
                if !buckets.add_case(question) {
                    debug!(%id, "case dropped (duplicate, incomplete or bucket full)");
                }
            }
            None => warn!(%id, "skipping case with unrecognised diagnosis"),
        }
    }
    buckets
}

//
// ─── SET ASSEMBLY ──────────────────────────────────────────────────────────────
//

/// Pair two diagnosis buckets into `nsets` interleaved sets.
///
/// Each bucket is ordered by id. The preferred size per class is tried
/// first; if that cannot fill every set the fallback size is tried. When
/// neither fills all sets, the (shorter) fallback result is returned.
#[must_use]
pub fn build_sets(
    a: &[Question],
    b: &[Question],
    nsets: usize,
    preferred_per_class: usize,
    fallback_per_class: usize,
) -> Vec<QuizSet> {
    let mut a_sorted = a.to_vec();
    a_sorted.sort_by(|left, right| left.id.cmp(&right.id));
    let mut b_sorted = b.to_vec();
    b_sorted.sort_by(|left, right| left.id.cmp(&right.id));

    let mut out = Vec::new();
    for per_class in [preferred_per_class, fallback_per_class] {
        out.clear();
        if per_class == 0 {
            continue;
        }
        let a_chunks = a_sorted.chunks(per_class).take(nsets);
        let b_chunks = b_sorted.chunks(per_class).take(nsets);
        for (aa, bb) in a_chunks.zip(b_chunks) {
            if aa.len() != per_class || bb.len() != per_class {
                continue;
            }
            let merged = aa
                .iter()
                .zip(bb)
                .flat_map(|(x, y)| [x.clone(), y.clone()])
                .collect();
            out.push(QuizSet::new(merged));
        }
        if out.len() == nsets {
            return out;
        }
        debug!(per_class, built = out.len(), nsets, "set size could not fill all sets");
    }
    out
}

/// Build the complete dataset document for all known modules.
#[must_use]
pub fn build_dataset(buckets: &CaseBuckets, config: &BuildConfig) -> Dataset {
    let mut modules = BTreeMap::new();
    let mut set_sizes = BTreeMap::new();

    for module in KnownModule::ALL {
        let (left, right) = module.diagnoses();
        let sets = build_sets(
            buckets.bucket(&left.code()),
            buckets.bucket(&right.code()),
            config.sets,
            config.preferred_per_class,
            config.fallback_per_class,
        );
        if sets.len() < config.sets {
            warn!(
                module = module.code_str(),
                built = sets.len(),
                wanted = config.sets,
                "not enough cases to fill every set"
            );
        }
        set_sizes.insert(module.code(), sets.iter().map(QuizSet::len).collect());
        modules.insert(module.code(), sets);
    }

    let meta = DatasetMeta {
        counts: buckets.counts(),
        brand: config.brand.clone(),
        audience: config.audience.clone(),
        target_per_label: u32::try_from(config.target_per_label).ok(),
        scanned_lesions: None,
        set_sizes,
        note: config.note.clone(),
    };

    Dataset::new(modules, meta)
}
