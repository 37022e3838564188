//! The knowledge base container.
//!
//! A `KnowledgeBase` bundles the disease catalog, the per-test rule tables
//! and the display priority of tests. It is immutable once built and is
//! handed to the engine by value, so tests can run the engine against a
//! hand-made table instead of the standard one.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::disease::{Disease, ModifierQuestion};
use crate::error::KnowledgeError;
use crate::lookup::NameLookup;
use crate::rule::{FrequencyRule, TestRules};
use crate::snapshot::ClinicalSnapshot;

/// Name of the disease whose rules may be routed to the CKD stage resolver.
pub const CHRONIC_KIDNEY_DISEASE: &str = "Chronic Kidney Disease";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeBase {
    diseases: Vec<Disease>,
    tests: Vec<TestRules>,
    priority: Vec<String>,
}

impl KnowledgeBase {
    pub fn new(diseases: Vec<Disease>, tests: Vec<TestRules>, priority: Vec<String>) -> Self {
        Self {
            diseases,
            tests,
            priority,
        }
    }

    /// Disease catalog in display order.
    pub fn diseases(&self) -> &[Disease] {
        &self.diseases
    }

    /// Rule tables in table order.
    pub fn tests(&self) -> &[TestRules] {
        &self.tests
    }

    /// Fixed display order of tests.
    pub fn priority(&self) -> &[String] {
        &self.priority
    }

    pub fn disease(&self, name: &str) -> Option<&Disease> {
        self.diseases.iter().find(|d| d.name == name)
    }

    pub fn test(&self, name: &str) -> Option<&TestRules> {
        self.tests.iter().find(|t| t.name == name)
    }

    /// Position of `test` in the priority order, `None` when unlisted.
    pub fn priority_of(&self, test: &str) -> Option<usize> {
        self.priority.iter().position(|name| name == test)
    }

    /// Case-insensitive index over disease names.
    pub fn disease_lookup(&self) -> NameLookup {
        NameLookup::new(self.diseases.iter().map(|d| d.name.as_str()))
    }

    /// Questions to display for the current selection, in catalog order.
    pub fn visible_questions<'a>(
        &'a self,
        snapshot: &ClinicalSnapshot,
    ) -> Vec<(&'a Disease, &'a ModifierQuestion)> {
        self.diseases
            .iter()
            .filter(|disease| snapshot.is_selected(&disease.name))
            .flat_map(|disease| disease.questions.iter().map(move |q| (disease, q)))
            .collect()
    }

    /// Diseases that have any rule for `test`, in catalog order.
    pub fn diseases_for_test(&self, test: &str) -> Vec<&Disease> {
        let Some(rules) = self.test(test) else {
            return Vec::new();
        };
        self.diseases
            .iter()
            .filter(|disease| rules.rule_for(&disease.name).is_some())
            .collect()
    }

    /// Check the structural invariants of the tables.
    ///
    /// # Errors
    ///
    /// Returns the first violation found.
    pub fn validate(&self) -> Result<(), KnowledgeError> {
        let mut names = HashSet::new();
        for disease in &self.diseases {
            if !names.insert(disease.name.as_str()) {
                return Err(KnowledgeError::DuplicateDisease(disease.name.clone()));
            }
            let mut keys = HashSet::new();
            for question in &disease.questions {
                if !keys.insert(question.key) {
                    return Err(KnowledgeError::DuplicateQuestion {
                        disease: disease.name.clone(),
                        key: question.key,
                    });
                }
            }
        }

        let mut tests = HashSet::new();
        for test in &self.tests {
            if !tests.insert(test.name.as_str()) {
                return Err(KnowledgeError::DuplicateTest(test.name.clone()));
            }
            let mut seen = HashSet::new();
            for entry in &test.rules {
                if !names.contains(entry.disease.as_str()) {
                    return Err(KnowledgeError::UnknownDisease {
                        test: test.name.clone(),
                        disease: entry.disease.clone(),
                    });
                }
                if !seen.insert(entry.disease.as_str()) {
                    return Err(KnowledgeError::DuplicateRule {
                        test: test.name.clone(),
                        disease: entry.disease.clone(),
                    });
                }
                if entry.rule == FrequencyRule::CkdStageRouted
                    && entry.disease != CHRONIC_KIDNEY_DISEASE
                {
                    return Err(KnowledgeError::MisplacedCkdRoute {
                        test: test.name.clone(),
                        disease: entry.disease.clone(),
                    });
                }
            }
        }

        let mut ranked = HashSet::new();
        for name in &self.priority {
            if !ranked.insert(name.as_str()) {
                return Err(KnowledgeError::DuplicatePriority(name.clone()));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::{DiseaseColor, Toggle};

    fn small_base() -> KnowledgeBase {
        KnowledgeBase::new(
            vec![
                Disease::new("Hypertension", DiseaseColor::Red),
                Disease::new("Mental Health", DiseaseColor::Blue).with_question(
                    ModifierQuestion::toggle(Toggle::OnLithium, "Is the patient on Lithium?"),
                ),
                Disease::new(CHRONIC_KIDNEY_DISEASE, DiseaseColor::Purple),
            ],
            vec![
                TestRules::new("U&Es")
                    .with("Hypertension", "Annually")
                    .with_rule(CHRONIC_KIDNEY_DISEASE, FrequencyRule::CkdStageRouted),
                TestRules::new("LITHIUM").with_rule(
                    "Mental Health",
                    FrequencyRule::only_when(Toggle::OnLithium, "3 monthly"),
                ),
            ],
            vec!["U&Es".to_string(), "LITHIUM".to_string()],
        )
    }

    #[test]
    fn valid_base_passes() {
        assert_eq!(small_base().validate(), Ok(()));
    }

    #[test]
    fn rejects_rule_for_unknown_disease() {
        let mut base = small_base();
        base.tests[0] = base.tests[0].clone().with("Gout", "Annually");
        assert_eq!(
            base.validate(),
            Err(KnowledgeError::UnknownDisease {
                test: "U&Es".to_string(),
                disease: "Gout".to_string(),
            })
        );
    }

    #[test]
    fn rejects_ckd_route_on_other_disease() {
        let mut base = small_base();
        base.tests[1] = TestRules::new("LITHIUM")
            .with_rule("Hypertension", FrequencyRule::CkdStageRouted);
        assert!(matches!(
            base.validate(),
            Err(KnowledgeError::MisplacedCkdRoute { .. })
        ));
    }

    #[test]
    fn rejects_duplicate_question_keys() {
        let mut base = small_base();
        base.diseases[1] = base.diseases[1].clone().with_question(ModifierQuestion::toggle(
            Toggle::OnLithium,
            "Lithium again?",
        ));
        assert!(matches!(
            base.validate(),
            Err(KnowledgeError::DuplicateQuestion { .. })
        ));
    }

    #[test]
    fn rejects_duplicate_priority() {
        let mut base = small_base();
        base.priority.push("U&Es".to_string());
        assert_eq!(
            base.validate(),
            Err(KnowledgeError::DuplicatePriority("U&Es".to_string()))
        );
    }

    #[test]
    fn visible_questions_follow_selection() {
        let base = small_base();
        let snapshot = ClinicalSnapshot::new().with_disease("Hypertension");
        assert!(base.visible_questions(&snapshot).is_empty());

        let snapshot = snapshot.with_disease("Mental Health");
        let visible = base.visible_questions(&snapshot);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].0.name, "Mental Health");
    }

    #[test]
    fn diseases_for_test_in_catalog_order() {
        let base = small_base();
        let names: Vec<_> = base
            .diseases_for_test("U&Es")
            .into_iter()
            .map(|d| d.name.as_str())
            .collect();
        assert_eq!(names, vec!["Hypertension", CHRONIC_KIDNEY_DISEASE]);
        assert!(base.diseases_for_test("BNP").is_empty());
    }

    #[test]
    fn priority_lookup() {
        let base = small_base();
        assert_eq!(base.priority_of("LITHIUM"), Some(1));
        assert_eq!(base.priority_of("BNP"), None);
    }
}
