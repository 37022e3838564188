//! Patient profile files and snapshot assembly.
//!
//! A profile is an optional TOML file describing the form state; command
//! line flags are merged on top of it.
//!
//! ```toml
//! diseases = ["Hypertension", "Chronic Kidney Disease"]
//!
//! [modifiers]
//! on_metformin = true
//! ckd_stage = "4"
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use bloods_model::{CkdStage, ClinicalSnapshot, KnowledgeBase, Toggle};
use serde::Deserialize;
use tracing::{debug, warn};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PatientProfile {
    pub diseases: Vec<String>,
    pub modifiers: ProfileModifiers,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProfileModifiers {
    pub on_doac: bool,
    pub on_lithium: bool,
    pub on_metformin: bool,
    pub ckd_stage: CkdStage,
}

impl PatientProfile {
    /// Parse a profile from TOML text.
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("parse patient profile")
    }

    /// Read and parse a profile file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("read profile {}", path.display()))?;
        let profile = Self::from_toml(&text)
            .with_context(|| format!("invalid profile {}", path.display()))?;
        debug!(path = %path.display(), diseases = profile.diseases.len(), "loaded profile");
        Ok(profile)
    }
}

/// Form values given directly on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionOverrides {
    pub diseases: Vec<String>,
    pub on_doac: bool,
    pub on_lithium: bool,
    pub on_metformin: bool,
    pub ckd_stage: Option<CkdStage>,
}

/// Merge a profile and command line values into a snapshot.
///
/// Diseases are unioned and matched against the catalog ignoring case;
/// unknown names are logged and dropped. Toggles set on either side stay
/// set, and an explicit stage replaces the profile's.
pub fn build_snapshot(
    knowledge: &KnowledgeBase,
    profile: Option<&PatientProfile>,
    overrides: &SelectionOverrides,
) -> ClinicalSnapshot {
    let lookup = knowledge.disease_lookup();
    let mut snapshot = ClinicalSnapshot::new();

    let profile_diseases = profile.into_iter().flat_map(|p| p.diseases.iter());
    for name in profile_diseases.chain(overrides.diseases.iter()) {
        match lookup.get(name) {
            Some(canonical) => snapshot.select(canonical),
            None => warn!(disease = %name, "unknown disease ignored"),
        }
    }

    let modifiers = profile.map(|p| p.modifiers.clone()).unwrap_or_default();
    snapshot.set_toggle(Toggle::OnAnticoagulant, modifiers.on_doac || overrides.on_doac);
    snapshot.set_toggle(Toggle::OnLithium, modifiers.on_lithium || overrides.on_lithium);
    snapshot.set_toggle(
        Toggle::OnMetformin,
        modifiers.on_metformin || overrides.on_metformin,
    );
    snapshot.ckd_stage = overrides.ckd_stage.unwrap_or(modifiers.ckd_stage);
    snapshot
}
