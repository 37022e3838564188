//! The compiled-in standard knowledge base.

use bloods_model::{
    CHRONIC_KIDNEY_DISEASE, CkdStage, Disease, DiseaseColor, FrequencyRule, KnowledgeBase,
    ModifierQuestion, SelectOption, TestRules, Toggle,
};

pub const ATRIAL_FIBRILLATION: &str = "Atrial Fibrillation";
pub const CARDIOVASCULAR_DISEASE: &str = "Cardiovascular Disease";
pub const CORONARY_HEART_DISEASE: &str = "Coronary Heart Disease";
pub const DIABETES_MELLITUS: &str = "Diabetes Mellitus";
pub const HEART_FAILURE: &str = "Heart Failure";
pub const HYPERTENSION: &str = "Hypertension";
pub const HYPOTHYROIDISM: &str = "Hypothyroidism";
pub const LEARNING_DISABILITY: &str = "Learning Disability";
pub const MENTAL_HEALTH: &str = "Mental Health";
pub const NHS_HEALTH_CHECK: &str = "NHS Health Check";
pub const NON_DIABETIC_HYPERGLYCAEMIA: &str = "Non-Diabetic Hyperglycaemia";
pub const STROKE_TIA: &str = "Stroke/TIA";
pub const B12_ANEMIA: &str = "B12 Anemia";

/// Display order of tests in the result list.
pub const TEST_PRIORITY: &[&str] = &[
    "U&Es",
    "LFTs",
    "CALCIUM",
    "LIPIDS",
    "TFTs",
    "B12",
    "URINE (ACR)",
    "FBC",
    "HbA1c",
    "LITHIUM",
    "BNP",
];

const ANNUALLY: &str = "Annually";
const DIAGNOSIS_AND_EVERY_3_5_YEARS: &str = "At diagnosis & every 3-5 years";
const HEALTH_CHECK: &str = "5 yearly (40-74 years)";

/// Build the standard knowledge base.
pub fn standard_knowledge_base() -> KnowledgeBase {
    let priority = TEST_PRIORITY.iter().map(|t| (*t).to_string()).collect();
    KnowledgeBase::new(disease_catalog(), test_rules(), priority)
}

fn disease_catalog() -> Vec<Disease> {
    vec![
        Disease::new(ATRIAL_FIBRILLATION, DiseaseColor::Red).with_question(
            ModifierQuestion::toggle(Toggle::OnAnticoagulant, "Is the patient on a DOAC?"),
        ),
        Disease::new(CARDIOVASCULAR_DISEASE, DiseaseColor::Pink),
        Disease::new(CHRONIC_KIDNEY_DISEASE, DiseaseColor::Purple).with_question(
            ModifierQuestion::ckd_stage(
                "CKD Stage:",
                vec![
                    SelectOption::new(CkdStage::Stage3a, "CKD 3a (GFR: 45-59)"),
                    SelectOption::new(CkdStage::Stage3b, "CKD 3b (GFR: 30-44)"),
                    SelectOption::new(CkdStage::Stage4, "CKD 4 (GFR: 15-29)"),
                    SelectOption::new(CkdStage::Stage5, "CKD 5 (GFR: <15)"),
                ],
            ),
        ),
        Disease::new(CORONARY_HEART_DISEASE, DiseaseColor::Red),
        Disease::new(DIABETES_MELLITUS, DiseaseColor::Orange).with_question(
            ModifierQuestion::toggle(Toggle::OnMetformin, "Is the patient on Metformin?"),
        ),
        Disease::new(HEART_FAILURE, DiseaseColor::Pink),
        Disease::new(HYPERTENSION, DiseaseColor::Red),
        Disease::new(HYPOTHYROIDISM, DiseaseColor::Teal),
        Disease::new(LEARNING_DISABILITY, DiseaseColor::Blue),
        Disease::new(MENTAL_HEALTH, DiseaseColor::Blue).with_question(ModifierQuestion::toggle(
            Toggle::OnLithium,
            "Is the patient on Lithium?",
        )),
        Disease::new(NHS_HEALTH_CHECK, DiseaseColor::Green),
        Disease::new(NON_DIABETIC_HYPERGLYCAEMIA, DiseaseColor::Orange),
        Disease::new(STROKE_TIA, DiseaseColor::Purple),
        Disease::new(B12_ANEMIA, DiseaseColor::Yellow),
    ]
}

fn test_rules() -> Vec<TestRules> {
    let on_doac = || FrequencyRule::only_when(Toggle::OnAnticoagulant, ANNUALLY);

    vec![
        TestRules::new("FBC")
            .with_rule(ATRIAL_FIBRILLATION, on_doac())
            .with(CORONARY_HEART_DISEASE, ANNUALLY)
            .with(HEART_FAILURE, ANNUALLY)
            .with(DIABETES_MELLITUS, ANNUALLY)
            .with(CHRONIC_KIDNEY_DISEASE, ANNUALLY)
            .with(B12_ANEMIA, "10 days after starting treatment"),
        TestRules::new("U&Es")
            .with_rule(ATRIAL_FIBRILLATION, on_doac())
            .with(CORONARY_HEART_DISEASE, ANNUALLY)
            .with(HEART_FAILURE, ANNUALLY)
            .with(HYPERTENSION, ANNUALLY)
            .with(STROKE_TIA, ANNUALLY)
            .with(DIABETES_MELLITUS, ANNUALLY)
            .with_rule(
                MENTAL_HEALTH,
                FrequencyRule::conditioned(Toggle::OnLithium, Some("3 monthly"), Some(ANNUALLY)),
            )
            .with_rule(CHRONIC_KIDNEY_DISEASE, FrequencyRule::CkdStageRouted)
            .with(NHS_HEALTH_CHECK, HEALTH_CHECK)
            .with(CARDIOVASCULAR_DISEASE, ANNUALLY),
        TestRules::new("LFTs")
            .with_rule(ATRIAL_FIBRILLATION, on_doac())
            .with(CORONARY_HEART_DISEASE, ANNUALLY)
            .with(HEART_FAILURE, ANNUALLY)
            .with(STROKE_TIA, ANNUALLY)
            .with(DIABETES_MELLITUS, ANNUALLY)
            .with(MENTAL_HEALTH, ANNUALLY)
            .with(NHS_HEALTH_CHECK, HEALTH_CHECK),
        TestRules::new("HbA1c")
            .with(ATRIAL_FIBRILLATION, DIAGNOSIS_AND_EVERY_3_5_YEARS)
            .with(CORONARY_HEART_DISEASE, DIAGNOSIS_AND_EVERY_3_5_YEARS)
            .with(HEART_FAILURE, DIAGNOSIS_AND_EVERY_3_5_YEARS)
            .with(HYPERTENSION, DIAGNOSIS_AND_EVERY_3_5_YEARS)
            .with(STROKE_TIA, ANNUALLY)
            .with(DIABETES_MELLITUS, "6 monthly")
            .with(MENTAL_HEALTH, ANNUALLY)
            .with(CHRONIC_KIDNEY_DISEASE, DIAGNOSIS_AND_EVERY_3_5_YEARS)
            .with(NON_DIABETIC_HYPERGLYCAEMIA, ANNUALLY)
            .with(NHS_HEALTH_CHECK, HEALTH_CHECK)
            .with(CARDIOVASCULAR_DISEASE, ANNUALLY),
        TestRules::new("TFTs")
            .with(ATRIAL_FIBRILLATION, "At diagnosis")
            .with(DIABETES_MELLITUS, DIAGNOSIS_AND_EVERY_3_5_YEARS)
            .with_rule(
                MENTAL_HEALTH,
                FrequencyRule::conditioned(Toggle::OnLithium, Some("6 monthly"), Some(ANNUALLY)),
            )
            .with(
                HYPOTHYROIDISM,
                "Annually if stable. After 3 months if dose changed",
            ),
        TestRules::new("LIPIDS")
            .with(CORONARY_HEART_DISEASE, ANNUALLY)
            .with(HEART_FAILURE, "Annually (if on statin)")
            .with(HYPERTENSION, "Following diagnosis to check CVD risk")
            .with(STROKE_TIA, ANNUALLY)
            .with(DIABETES_MELLITUS, ANNUALLY)
            .with(MENTAL_HEALTH, ANNUALLY)
            .with(CHRONIC_KIDNEY_DISEASE, ANNUALLY)
            .with(NHS_HEALTH_CHECK, HEALTH_CHECK)
            .with(CARDIOVASCULAR_DISEASE, ANNUALLY),
        TestRules::new("LITHIUM").with_rule(
            MENTAL_HEALTH,
            FrequencyRule::only_when(Toggle::OnLithium, "3 monthly"),
        ),
        TestRules::new("CALCIUM")
            .with_rule(
                MENTAL_HEALTH,
                FrequencyRule::only_when(Toggle::OnLithium, "6 monthly"),
            )
            .with_rule(CHRONIC_KIDNEY_DISEASE, FrequencyRule::CkdStageRouted),
        TestRules::new("BNP").with(HEART_FAILURE, "Once to make diagnosis. NO MONITORING"),
        TestRules::new("B12")
            .with_rule(
                DIABETES_MELLITUS,
                FrequencyRule::only_when(Toggle::OnMetformin, ANNUALLY),
            )
            .with(
                B12_ANEMIA,
                "To make diagnosis & 1-2 months after treatment. NO MONITORING",
            ),
        TestRules::new("URINE (ACR)")
            .with(DIABETES_MELLITUS, ANNUALLY)
            .with(CHRONIC_KIDNEY_DISEASE, ANNUALLY),
    ]
}
