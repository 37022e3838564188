//! Rules engine for chronic disease blood test monitoring.
//!
//! Given the conditions a patient has and a few clinical modifiers
//! (anticoagulant, lithium, metformin, CKD stage), works out which blood
//! tests are needed and how often.
//!
//! # Example
//!
//! ```
//! use bloods_engine::{RequirementEngine, is_monitoring_frequency};
//! use bloods_model::ClinicalSnapshot;
//!
//! let engine = RequirementEngine::standard();
//! let snapshot = ClinicalSnapshot::new().with_disease("Hypertension");
//! let tests = engine.evaluate(&snapshot);
//!
//! assert_eq!(tests[0].test_name, "U&Es");
//! assert!(is_monitoring_frequency(&tests[0].frequencies[0].frequency));
//! ```

pub mod ckd;
pub mod engine;
pub mod frequency;
pub mod standard;

pub use ckd::{CkdOverride, resolve_ckd_frequency};
pub use engine::{RequirementEngine, compute_required_tests};
pub use frequency::{
    FrequencyTag, TestSections, frequency_tag, is_monitoring_frequency, split_sections,
};
pub use standard::{TEST_PRIORITY, standard_knowledge_base};
