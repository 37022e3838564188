use anyhow::{Context, Result};
use tracing::{debug, info, info_span, warn};

use bloods_cli::profile::{PatientProfile, SelectionOverrides, build_snapshot};
use bloods_cli::render::{diseases_table, render_json, render_plain, render_table, tests_table};
use bloods_engine::RequirementEngine;
use bloods_model::{ClinicalSnapshot, KnowledgeBase, ModifierKey, Toggle};

use crate::cli::{EvaluateArgs, OutputFormatArg};

pub fn run_diseases() -> Result<()> {
    let engine = RequirementEngine::standard();
    println!("{}", diseases_table(engine.knowledge()));
    Ok(())
}

pub fn run_tests() -> Result<()> {
    let engine = RequirementEngine::standard();
    println!("{}", tests_table(engine.knowledge()));
    Ok(())
}

pub fn run_evaluate(args: &EvaluateArgs) -> Result<()> {
    let span = info_span!("evaluate");
    let _guard = span.enter();

    let engine = RequirementEngine::standard();
    let knowledge = engine.knowledge();
    knowledge.validate().context("validate knowledge base")?;

    let profile = args
        .profile
        .as_deref()
        .map(PatientProfile::load)
        .transpose()?;
    let overrides = SelectionOverrides {
        diseases: args.diseases.clone(),
        on_doac: args.doac,
        on_lithium: args.lithium,
        on_metformin: args.metformin,
        ckd_stage: args.ckd_stage,
    };
    let snapshot = build_snapshot(knowledge, profile.as_ref(), &overrides);
    info!(
        diseases = snapshot.selected_diseases.len(),
        ckd_stage = %snapshot.ckd_stage,
        "evaluating"
    );
    warn_unused_modifiers(knowledge, &snapshot, args.ckd_stage.is_some());

    let tests = engine.evaluate(&snapshot);
    debug!(tests = tests.len(), "evaluation complete");

    let output = match args.format {
        OutputFormatArg::Table => render_table(&tests),
        OutputFormatArg::Plain => render_plain(&tests),
        OutputFormatArg::Json => render_json(&tests)?,
    };
    println!("{output}");
    Ok(())
}

/// Modifiers only apply while a disease asking about them is selected.
fn warn_unused_modifiers(
    knowledge: &KnowledgeBase,
    snapshot: &ClinicalSnapshot,
    stage_given: bool,
) {
    let visible: Vec<ModifierKey> = knowledge
        .visible_questions(snapshot)
        .into_iter()
        .map(|(_, question)| question.key)
        .collect();
    for toggle in Toggle::all() {
        let key = ModifierKey::Toggle(*toggle);
        if snapshot.toggle(*toggle) && !visible.contains(&key) {
            warn!(modifier = %key, "modifier set but no selected disease asks for it");
        }
    }
    if stage_given && !visible.contains(&ModifierKey::CkdStage) {
        warn!(
            modifier = %ModifierKey::CkdStage,
            "modifier set but no selected disease asks for it"
        );
    }
}
