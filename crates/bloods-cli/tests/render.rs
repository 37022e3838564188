//! Snapshot tests for the plain text rendering of evaluation results.

use bloods_cli::profile::{PatientProfile, SelectionOverrides, build_snapshot};
use bloods_cli::render::{NO_TESTS_MESSAGE, render_json, render_plain};
use bloods_engine::RequirementEngine;
use bloods_model::ClinicalSnapshot;

fn evaluate_plain(snapshot: &ClinicalSnapshot) -> String {
    render_plain(&RequirementEngine::standard().evaluate(snapshot))
}

#[test]
fn heart_failure_with_hypertension() {
    let snapshot = ClinicalSnapshot::new()
        .with_disease("Hypertension")
        .with_disease("Heart Failure");
    insta::assert_snapshot!(evaluate_plain(&snapshot), @r"
    U&Es
      Monitoring
        Annually [annual]: Heart Failure, Hypertension
    LFTs
      Monitoring
        Annually [annual]: Heart Failure
    LIPIDS
      Monitoring
        Annually (if on statin) [annual]: Heart Failure
      Diagnostic/Other
        Following diagnosis to check CVD risk [other]: Hypertension
    FBC
      Monitoring
        Annually [annual]: Heart Failure
    HbA1c
      Monitoring
        At diagnosis & every 3-5 years [multi-year]: Heart Failure, Hypertension
    BNP
      Diagnostic/Other
        Once to make diagnosis. NO MONITORING [other]: Heart Failure
    ");
}

#[test]
fn health_check_is_five_yearly() {
    let snapshot = ClinicalSnapshot::new().with_disease("NHS Health Check");
    insta::assert_snapshot!(evaluate_plain(&snapshot), @r"
    U&Es
      Monitoring
        5 yearly (40-74 years) [5 yearly]: NHS Health Check
    LFTs
      Monitoring
        5 yearly (40-74 years) [5 yearly]: NHS Health Check
    LIPIDS
      Monitoring
        5 yearly (40-74 years) [5 yearly]: NHS Health Check
    HbA1c
      Monitoring
        5 yearly (40-74 years) [5 yearly]: NHS Health Check
    ");
}

#[test]
fn profile_drives_ckd_stage_labels() {
    let engine = RequirementEngine::standard();
    let profile = PatientProfile::from_toml(
        r#"
diseases = ["chronic kidney disease"]

[modifiers]
ckd_stage = "5"
"#,
    )
    .expect("parse profile");
    let snapshot = build_snapshot(
        engine.knowledge(),
        Some(&profile),
        &SelectionOverrides::default(),
    );
    insta::assert_snapshot!(render_plain(&engine.evaluate(&snapshot)), @r"
    U&Es
      Monitoring
        3 monthly [3 monthly]: Chronic Kidney Disease (Stage 5)
    CALCIUM
      Monitoring
        Monthly [monthly]: Chronic Kidney Disease (Stage 5)
    LIPIDS
      Monitoring
        Annually [annual]: Chronic Kidney Disease
    URINE (ACR)
      Monitoring
        Annually [annual]: Chronic Kidney Disease
    FBC
      Monitoring
        Annually [annual]: Chronic Kidney Disease
    HbA1c
      Monitoring
        At diagnosis & every 3-5 years [multi-year]: Chronic Kidney Disease
    ");
}

#[test]
fn nothing_selected_prints_message() {
    assert_eq!(evaluate_plain(&ClinicalSnapshot::new()), NO_TESTS_MESSAGE);
}

#[test]
fn json_uses_camel_case_keys() {
    let tests = RequirementEngine::standard()
        .evaluate(&ClinicalSnapshot::new().with_disease("Hypothyroidism"));
    let json: serde_json::Value =
        serde_json::from_str(&render_json(&tests).expect("render json")).expect("parse json");
    assert_eq!(
        json,
        serde_json::json!([{
            "testName": "TFTs",
            "frequencies": [{
                "frequency": "Annually if stable. After 3 months if dose changed",
                "diseases": ["Hypothyroidism"]
            }]
        }])
    );
}
