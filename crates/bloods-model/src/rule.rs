//! Per-test frequency rules.

use serde::{Deserialize, Serialize};

use crate::enums::Toggle;

/// Placeholder text the source tables used to route CKD rows to the stage
/// resolver. It is never a user-facing frequency.
pub const CKD_STAGE_SENTINEL: &str = "Frequency based on CKD stage";

/// How one disease determines the frequency of one test.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FrequencyRule {
    /// Fixed frequency text.
    Literal { frequency: String },
    /// Frequency chosen by a medication toggle. `None` on a branch means the
    /// disease contributes nothing for this test.
    Conditioned {
        toggle: Toggle,
        when_set: Option<String>,
        otherwise: Option<String>,
    },
    /// Frequency comes from the CKD stage resolver.
    CkdStageRouted,
}

impl FrequencyRule {
    pub fn literal(frequency: &str) -> Self {
        Self::Literal {
            frequency: frequency.to_string(),
        }
    }

    pub fn conditioned(toggle: Toggle, when_set: Option<&str>, otherwise: Option<&str>) -> Self {
        Self::Conditioned {
            toggle,
            when_set: when_set.map(String::from),
            otherwise: otherwise.map(String::from),
        }
    }

    /// Conditioned rule that only applies while the toggle is set.
    pub fn only_when(toggle: Toggle, frequency: &str) -> Self {
        Self::conditioned(toggle, Some(frequency), None)
    }
}

/// A disease's rule within a test.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiseaseRule {
    pub disease: String,
    pub rule: FrequencyRule,
}

/// All per-disease rules for one blood test, in table order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestRules {
    pub name: String,
    pub rules: Vec<DiseaseRule>,
}

impl TestRules {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            rules: Vec::new(),
        }
    }

    pub fn with_rule(mut self, disease: &str, rule: FrequencyRule) -> Self {
        self.rules.push(DiseaseRule {
            disease: disease.to_string(),
            rule,
        });
        self
    }

    /// Shorthand for a literal rule.
    pub fn with(self, disease: &str, frequency: &str) -> Self {
        self.with_rule(disease, FrequencyRule::literal(frequency))
    }

    /// Rule for `disease`, if the test has one.
    pub fn rule_for(&self, disease: &str) -> Option<&FrequencyRule> {
        self.rules
            .iter()
            .find(|entry| entry.disease == disease)
            .map(|entry| &entry.rule)
    }
}
