//! Disease catalog entries and their modifier questions.

use serde::{Deserialize, Serialize};

use crate::enums::{CkdStage, DiseaseColor, ModifierKey, Toggle};

/// A chronic condition that can be selected on the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Disease {
    pub name: String,
    pub color: DiseaseColor,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub questions: Vec<ModifierQuestion>,
}

impl Disease {
    pub fn new(name: &str, color: DiseaseColor) -> Self {
        Self {
            name: name.to_string(),
            color,
            questions: Vec::new(),
        }
    }

    pub fn with_question(mut self, question: ModifierQuestion) -> Self {
        self.questions.push(question);
        self
    }

    /// Badge text: initials of each word, at most three characters.
    ///
    /// "Chronic Kidney Disease" -> "CKD", "Stroke/TIA" -> "S".
    pub fn abbreviation(&self) -> String {
        self.name
            .split(' ')
            .filter_map(|word| word.chars().next())
            .take(3)
            .collect()
    }

    /// The question for `key`, if this disease asks one.
    pub fn question(&self, key: ModifierKey) -> Option<&ModifierQuestion> {
        self.questions.iter().find(|q| q.key == key)
    }
}

/// A follow-up question shown while its disease is selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModifierQuestion {
    pub key: ModifierKey,
    pub label: String,
    pub kind: QuestionKind,
}

impl ModifierQuestion {
    /// Yes/no question bound to a medication toggle.
    pub fn toggle(toggle: Toggle, label: &str) -> Self {
        Self {
            key: ModifierKey::Toggle(toggle),
            label: label.to_string(),
            kind: QuestionKind::Toggle,
        }
    }

    /// Single-choice CKD stage question.
    pub fn ckd_stage(label: &str, options: Vec<SelectOption>) -> Self {
        Self {
            key: ModifierKey::CkdStage,
            label: label.to_string(),
            kind: QuestionKind::Select { options },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum QuestionKind {
    Toggle,
    Select { options: Vec<SelectOption> },
}

/// One option of a select question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: CkdStage,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: CkdStage, label: &str) -> Self {
        Self {
            value,
            label: label.to_string(),
        }
    }
}
