//! Data model for chronic disease blood test monitoring.
//!
//! # Module Organization
//!
//! - [`disease`]: disease catalog entries and their modifier questions
//! - [`enums`]: CKD stage, medication toggles, modifier keys, colours
//! - [`rule`]: per-test frequency rules
//! - [`knowledge`]: the immutable knowledge base and its validation
//! - [`snapshot`]: the clinical input snapshot
//! - [`result`]: resolved tests and frequency groups

pub mod disease;
pub mod enums;
pub mod error;
pub mod knowledge;
pub mod lookup;
pub mod result;
pub mod rule;
pub mod snapshot;

pub use disease::{Disease, ModifierQuestion, QuestionKind, SelectOption};
pub use enums::{CkdStage, DiseaseColor, ModifierKey, Toggle};
pub use error::{KnowledgeError, ModelError, Result};
pub use knowledge::{CHRONIC_KIDNEY_DISEASE, KnowledgeBase};
pub use lookup::NameLookup;
pub use result::{FrequencyGroup, ResolvedTest};
pub use rule::{CKD_STAGE_SENTINEL, DiseaseRule, FrequencyRule, TestRules};
pub use snapshot::ClinicalSnapshot;
