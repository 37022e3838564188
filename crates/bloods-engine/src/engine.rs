//! Resolution engine.
//!
//! Turns a clinical snapshot into the ordered list of required tests:
//! every selected disease with a rule for a test contributes at most one
//! (frequency, label) pair, contributions are grouped by exact frequency
//! text, and tests are ordered by the knowledge base's priority list.

use bloods_model::{
    CHRONIC_KIDNEY_DISEASE, CKD_STAGE_SENTINEL, ClinicalSnapshot, FrequencyRule, KnowledgeBase,
    ResolvedTest,
};
use tracing::{debug, debug_span, trace};

use crate::ckd::{CkdOverride, resolve_ckd_frequency};
use crate::standard::standard_knowledge_base;

/// Engine bound to one immutable knowledge base.
///
/// Evaluation reads only the snapshot and the tables, so a shared engine
/// can serve concurrent callers.
#[derive(Debug, Clone)]
pub struct RequirementEngine {
    knowledge: KnowledgeBase,
}

impl RequirementEngine {
    pub fn new(knowledge: KnowledgeBase) -> Self {
        Self { knowledge }
    }

    /// Engine over the compiled-in tables.
    pub fn standard() -> Self {
        Self::new(standard_knowledge_base())
    }

    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    /// Required tests for `snapshot`, freshly computed.
    pub fn evaluate(&self, snapshot: &ClinicalSnapshot) -> Vec<ResolvedTest> {
        compute_required_tests(&self.knowledge, snapshot)
    }
}

impl Default for RequirementEngine {
    fn default() -> Self {
        Self::standard()
    }
}

/// One disease's contribution to one test.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Contribution<'a> {
    frequency: &'a str,
    label: String,
}

/// Resolve the required tests for `snapshot` against `knowledge`.
///
/// Never fails: diseases or tests without a matching rule simply
/// contribute nothing, and an empty selection yields an empty list.
pub fn compute_required_tests(
    knowledge: &KnowledgeBase,
    snapshot: &ClinicalSnapshot,
) -> Vec<ResolvedTest> {
    let span = debug_span!(
        "compute_required_tests",
        selected = snapshot.selected_diseases.len(),
        ckd_stage = %snapshot.ckd_stage
    );
    let _guard = span.enter();

    let diseases = selection_order(knowledge, snapshot);
    let mut resolved = Vec::new();

    for test in knowledge.tests() {
        let mut entry = ResolvedTest::new(&test.name);
        for disease in &diseases {
            let Some(rule) = test.rule_for(disease) else {
                continue;
            };
            match contribution(&test.name, disease, rule, snapshot) {
                Some(found) => {
                    trace!(test = %test.name, disease, frequency = found.frequency, "contribution");
                    entry.add(found.frequency, found.label);
                }
                None => trace!(test = %test.name, disease, "no contribution"),
            }
        }
        if !entry.frequencies.is_empty() {
            resolved.push(entry);
        }
    }

    // Stable: unlisted tests keep table order after the listed ones.
    resolved.sort_by_key(|test| knowledge.priority_of(&test.test_name).unwrap_or(usize::MAX));

    debug!(tests = resolved.len(), "resolved required tests");
    resolved
}

/// Selected diseases in catalog order, then any selected names the catalog
/// does not list.
fn selection_order<'a>(
    knowledge: &'a KnowledgeBase,
    snapshot: &'a ClinicalSnapshot,
) -> Vec<&'a str> {
    let mut ordered: Vec<&str> = knowledge
        .diseases()
        .iter()
        .map(|disease| disease.name.as_str())
        .filter(|name| snapshot.is_selected(name))
        .collect();
    for name in &snapshot.selected_diseases {
        if knowledge.disease(name).is_none() {
            ordered.push(name.as_str());
        }
    }
    ordered
}

fn contribution<'a>(
    test: &str,
    disease: &str,
    rule: &'a FrequencyRule,
    snapshot: &ClinicalSnapshot,
) -> Option<Contribution<'a>> {
    let mut label = disease.to_string();
    let mut frequency: Option<&'a str> = match rule {
        FrequencyRule::Literal { frequency } => Some(frequency.as_str()),
        FrequencyRule::Conditioned {
            toggle,
            when_set,
            otherwise,
        } => {
            if snapshot.toggle(*toggle) {
                let taken = when_set.as_deref();
                if taken.is_some() {
                    label = format!("{disease} ({})", toggle.annotation());
                }
                taken
            } else {
                otherwise.as_deref()
            }
        }
        FrequencyRule::CkdStageRouted => None,
    };

    if disease == CHRONIC_KIDNEY_DISEASE {
        match resolve_ckd_frequency(snapshot.ckd_stage, test) {
            CkdOverride::NotApplicable => {}
            CkdOverride::NotRequired => frequency = None,
            CkdOverride::Frequency(stage_frequency) => {
                frequency = Some(stage_frequency);
                label = format!(
                    "{CHRONIC_KIDNEY_DISEASE} (Stage {})",
                    snapshot.ckd_stage.label()
                );
            }
        }
    }

    frequency
        .filter(|text| !text.is_empty() && *text != CKD_STAGE_SENTINEL)
        .map(|frequency| Contribution { frequency, label })
}

#[cfg(test)]
mod tests {
    use super::*;
    use bloods_model::{CkdStage, Disease, DiseaseColor, TestRules, Toggle};

    fn base_with(tests: Vec<TestRules>, priority: &[&str]) -> KnowledgeBase {
        KnowledgeBase::new(
            vec![
                Disease::new("Alpha", DiseaseColor::Red),
                Disease::new("Beta", DiseaseColor::Blue),
                Disease::new(CHRONIC_KIDNEY_DISEASE, DiseaseColor::Purple),
            ],
            tests,
            priority.iter().map(|p| (*p).to_string()).collect(),
        )
    }

    #[test]
    fn conditioned_true_branch_is_annotated() {
        let rule = FrequencyRule::only_when(Toggle::OnLithium, "3 monthly");
        let snapshot = ClinicalSnapshot::new().with_toggle(Toggle::OnLithium, true);
        let found = contribution("LITHIUM", "Mental Health", &rule, &snapshot).unwrap();
        assert_eq!(found.frequency, "3 monthly");
        assert_eq!(found.label, "Mental Health (on Lithium)");
    }

    #[test]
    fn conditioned_false_branch_is_plain() {
        let rule =
            FrequencyRule::conditioned(Toggle::OnLithium, Some("3 monthly"), Some("Annually"));
        let found =
            contribution("U&Es", "Mental Health", &rule, &ClinicalSnapshot::new()).unwrap();
        assert_eq!(found.frequency, "Annually");
        assert_eq!(found.label, "Mental Health");
    }

    #[test]
    fn conditioned_null_branch_contributes_nothing() {
        let rule = FrequencyRule::only_when(Toggle::OnAnticoagulant, "Annually");
        let fresh = ClinicalSnapshot::new();
        assert!(contribution("FBC", "Atrial Fibrillation", &rule, &fresh).is_none());

        let rule = FrequencyRule::conditioned(Toggle::OnAnticoagulant, None, Some("Annually"));
        let snapshot = ClinicalSnapshot::new().with_toggle(Toggle::OnAnticoagulant, true);
        assert!(contribution("FBC", "Atrial Fibrillation", &rule, &snapshot).is_none());
    }

    #[test]
    fn ckd_literal_falls_back_when_not_applicable() {
        let rule = FrequencyRule::literal("Annually");
        let snapshot = ClinicalSnapshot::new().with_ckd_stage(CkdStage::Stage5);
        let found = contribution("FBC", CHRONIC_KIDNEY_DISEASE, &rule, &snapshot).unwrap();
        assert_eq!(found.frequency, "Annually");
        assert_eq!(found.label, CHRONIC_KIDNEY_DISEASE);
    }

    #[test]
    fn ckd_route_without_override_contributes_nothing() {
        let snapshot = ClinicalSnapshot::new();
        assert!(
            contribution(
                "LIPIDS",
                CHRONIC_KIDNEY_DISEASE,
                &FrequencyRule::CkdStageRouted,
                &snapshot
            )
            .is_none()
        );
    }

    #[test]
    fn sentinel_literal_is_discarded() {
        let rule = FrequencyRule::literal(CKD_STAGE_SENTINEL);
        assert!(contribution("LIPIDS", "Alpha", &rule, &ClinicalSnapshot::new()).is_none());
    }

    #[test]
    fn unlisted_tests_sort_last_in_table_order() {
        let base = base_with(
            vec![
                TestRules::new("ZETA").with("Alpha", "Annually"),
                TestRules::new("ETA").with("Alpha", "Annually"),
                TestRules::new("FBC").with("Alpha", "Annually"),
                TestRules::new("U&Es").with("Alpha", "Annually"),
            ],
            &["U&Es", "FBC"],
        );
        let snapshot = ClinicalSnapshot::new().with_disease("Alpha");
        let names: Vec<_> = compute_required_tests(&base, &snapshot)
            .into_iter()
            .map(|t| t.test_name)
            .collect();
        assert_eq!(names, vec!["U&Es", "FBC", "ZETA", "ETA"]);
    }

    #[test]
    fn labels_follow_catalog_order() {
        let base = base_with(
            vec![
                TestRules::new("FBC")
                    .with("Beta", "Annually")
                    .with("Alpha", "Annually"),
            ],
            &["FBC"],
        );
        let snapshot = ClinicalSnapshot::new()
            .with_disease("Beta")
            .with_disease("Alpha");
        let resolved = compute_required_tests(&base, &snapshot);
        assert_eq!(resolved[0].frequencies[0].diseases, vec!["Alpha", "Beta"]);
    }

    #[test]
    fn uncatalogued_disease_with_rule_still_contributes() {
        let base = base_with(vec![TestRules::new("FBC").with("Gamma", "Annually")], &["FBC"]);
        let snapshot = ClinicalSnapshot::new().with_disease("Gamma");
        let resolved = compute_required_tests(&base, &snapshot);
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].frequencies[0].diseases, vec!["Gamma"]);
    }

    #[test]
    fn unknown_disease_is_ignored() {
        let base = base_with(vec![TestRules::new("FBC").with("Alpha", "Annually")], &["FBC"]);
        let snapshot = ClinicalSnapshot::new().with_disease("Gout");
        assert!(compute_required_tests(&base, &snapshot).is_empty());
    }

    #[test]
    fn engine_wraps_injected_base() {
        let base = base_with(vec![TestRules::new("FBC").with("Alpha", "Monthly")], &["FBC"]);
        let engine = RequirementEngine::new(base);
        let resolved = engine.evaluate(&ClinicalSnapshot::new().with_disease("Alpha"));
        assert_eq!(resolved[0].frequencies[0].frequency, "Monthly");
        assert_eq!(engine.knowledge().tests().len(), 1);
    }
}
