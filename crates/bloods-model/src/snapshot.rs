//! The engine's sole input: selected diseases plus modifier values.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::enums::{CkdStage, Toggle};

/// Snapshot of the selection form at one point in time.
///
/// Selection order carries no meaning; the engine walks the disease
/// catalog and asks the snapshot whether each entry is selected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClinicalSnapshot {
    pub selected_diseases: BTreeSet<String>,
    pub on_doac: bool,
    pub on_lithium: bool,
    pub on_metformin: bool,
    pub ckd_stage: CkdStage,
}

impl ClinicalSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a disease to the selection. Selecting twice is a no-op.
    pub fn select(&mut self, disease: impl Into<String>) {
        self.selected_diseases.insert(disease.into());
    }

    /// Remove a disease from the selection.
    pub fn deselect(&mut self, disease: &str) -> bool {
        self.selected_diseases.remove(disease)
    }

    #[must_use]
    pub fn with_disease(mut self, disease: impl Into<String>) -> Self {
        self.select(disease);
        self
    }

    #[must_use]
    pub fn with_toggle(mut self, toggle: Toggle, value: bool) -> Self {
        self.set_toggle(toggle, value);
        self
    }

    #[must_use]
    pub fn with_ckd_stage(mut self, stage: CkdStage) -> Self {
        self.ckd_stage = stage;
        self
    }

    pub fn is_selected(&self, disease: &str) -> bool {
        self.selected_diseases.contains(disease)
    }

    pub fn has_selections(&self) -> bool {
        !self.selected_diseases.is_empty()
    }

    /// Current value of a medication toggle.
    pub fn toggle(&self, toggle: Toggle) -> bool {
        match toggle {
            Toggle::OnAnticoagulant => self.on_doac,
            Toggle::OnLithium => self.on_lithium,
            Toggle::OnMetformin => self.on_metformin,
        }
    }

    pub fn set_toggle(&mut self, toggle: Toggle, value: bool) {
        match toggle {
            Toggle::OnAnticoagulant => self.on_doac = value,
            Toggle::OnLithium => self.on_lithium = value,
            Toggle::OnMetformin => self.on_metformin = value,
        }
    }

    /// Return to the initial form state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
