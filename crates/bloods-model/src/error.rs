use thiserror::Error;

use crate::enums::ModifierKey;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("unknown CKD stage: {0} (expected 3a, 3b, 4 or 5)")]
    UnknownCkdStage(String),
    #[error("unknown modifier key: {0}")]
    UnknownModifier(String),
}

/// Structural problems in a knowledge base.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum KnowledgeError {
    #[error("disease '{0}' is listed more than once")]
    DuplicateDisease(String),
    #[error("test '{0}' is listed more than once")]
    DuplicateTest(String),
    #[error("disease '{disease}' has more than one question for {key}")]
    DuplicateQuestion { disease: String, key: ModifierKey },
    #[error("test '{test}' has a rule for '{disease}', which is not in the disease catalog")]
    UnknownDisease { test: String, disease: String },
    #[error("test '{test}' has more than one rule for '{disease}'")]
    DuplicateRule { test: String, disease: String },
    #[error("test '{test}' routes '{disease}' to the CKD stage resolver")]
    MisplacedCkdRoute { test: String, disease: String },
    #[error("test '{0}' appears more than once in the priority order")]
    DuplicatePriority(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
