//! CKD stage resolver.
//!
//! For a handful of tests the CKD frequency depends on kidney function
//! rather than on a fixed table value.

use bloods_model::CkdStage;

/// Outcome of asking the resolver about one test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CkdOverride {
    /// The test has no stage-specific schedule; use the generic table rule.
    NotApplicable,
    /// The stage-specific schedule says the test is not needed.
    NotRequired,
    Frequency(&'static str),
}

/// Stage-specific frequency of `test` for a CKD patient.
pub fn resolve_ckd_frequency(stage: CkdStage, test: &str) -> CkdOverride {
    match test {
        "U&Es" => CkdOverride::Frequency(match stage {
            CkdStage::Stage3a => "Annually",
            CkdStage::Stage3b => "6 monthly",
            CkdStage::Stage4 => "Every 4-6 months",
            CkdStage::Stage5 => "3 monthly",
        }),
        "CALCIUM" => match stage {
            CkdStage::Stage3a => CkdOverride::NotRequired,
            CkdStage::Stage3b => CkdOverride::Frequency("6 monthly"),
            CkdStage::Stage4 => CkdOverride::Frequency("3 monthly"),
            CkdStage::Stage5 => CkdOverride::Frequency("Monthly"),
        },
        _ => CkdOverride::NotApplicable,
    }
}
