//! Type-safe enumerations for the clinical modifiers.
//!
//! The presentation layer speaks in strings ("3a", "isOnDOAC"); these enums
//! give the engine exhaustive matching over the fixed modifier vocabulary.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Chronic kidney disease stage, ordered by severity.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum CkdStage {
    /// GFR 45-59.
    #[default]
    #[serde(rename = "3a")]
    Stage3a,
    /// GFR 30-44.
    #[serde(rename = "3b")]
    Stage3b,
    /// GFR 15-29.
    #[serde(rename = "4")]
    Stage4,
    /// GFR below 15.
    #[serde(rename = "5")]
    Stage5,
}

impl CkdStage {
    /// All stages in ascending severity.
    pub const fn all() -> &'static [Self] {
        &[Self::Stage3a, Self::Stage3b, Self::Stage4, Self::Stage5]
    }

    /// Canonical value as submitted by the selection form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Stage3a => "3a",
            Self::Stage3b => "3b",
            Self::Stage4 => "4",
            Self::Stage5 => "5",
        }
    }

    /// Upper-cased form used in disease labels ("Stage 3B").
    pub fn label(&self) -> &'static str {
        match self {
            Self::Stage3a => "3A",
            Self::Stage3b => "3B",
            Self::Stage4 => "4",
            Self::Stage5 => "5",
        }
    }
}

impl fmt::Display for CkdStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CkdStage {
    type Err = ModelError;

    /// Accepts "3a", "3A", "stage 4", "CKD 5".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        let stage = normalized
            .strip_prefix("ckd")
            .or_else(|| normalized.strip_prefix("stage"))
            .unwrap_or(&normalized)
            .trim();

        match stage {
            "3a" => Ok(Self::Stage3a),
            "3b" => Ok(Self::Stage3b),
            "4" => Ok(Self::Stage4),
            "5" => Ok(Self::Stage5),
            _ => Err(ModelError::UnknownCkdStage(s.to_string())),
        }
    }
}

/// Boolean medication modifiers that gate conditioned rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Toggle {
    /// Patient takes a direct oral anticoagulant.
    OnAnticoagulant,
    OnLithium,
    OnMetformin,
}

impl Toggle {
    pub const fn all() -> &'static [Self] {
        &[Self::OnAnticoagulant, Self::OnLithium, Self::OnMetformin]
    }

    /// Stable key shared between questions and rules.
    pub fn key(&self) -> &'static str {
        match self {
            Self::OnAnticoagulant => "isOnDOAC",
            Self::OnLithium => "isOnLithium",
            Self::OnMetformin => "isOnMetformin",
        }
    }

    /// Parenthesised annotation appended to a disease label when the
    /// modifier's true branch produced the frequency.
    pub fn annotation(&self) -> &'static str {
        match self {
            Self::OnAnticoagulant => "on DOAC",
            Self::OnLithium => "on Lithium",
            Self::OnMetformin => "on Metformin",
        }
    }
}

impl fmt::Display for Toggle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Key of a modifier question; one question per key per disease.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ModifierKey {
    Toggle(Toggle),
    CkdStage,
}

impl ModifierKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Toggle(toggle) => toggle.key(),
            Self::CkdStage => "ckdStage",
        }
    }
}

impl fmt::Display for ModifierKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ModifierKey {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "isondoac" | "on_doac" | "doac" => Ok(Self::Toggle(Toggle::OnAnticoagulant)),
            "isonlithium" | "on_lithium" | "lithium" => Ok(Self::Toggle(Toggle::OnLithium)),
            "isonmetformin" | "on_metformin" | "metformin" => Ok(Self::Toggle(Toggle::OnMetformin)),
            "ckdstage" | "ckd_stage" => Ok(Self::CkdStage),
            _ => Err(ModelError::UnknownModifier(s.to_string())),
        }
    }
}

/// Display colour of a disease in the selection list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiseaseColor {
    Red,
    Pink,
    Purple,
    Orange,
    Teal,
    Blue,
    Green,
    Yellow,
}

impl DiseaseColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Pink => "pink",
            Self::Purple => "purple",
            Self::Orange => "orange",
            Self::Teal => "teal",
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Yellow => "yellow",
        }
    }
}

impl fmt::Display for DiseaseColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ckd_stage_from_str() {
        assert_eq!("3a".parse::<CkdStage>().unwrap(), CkdStage::Stage3a);
        assert_eq!("3B".parse::<CkdStage>().unwrap(), CkdStage::Stage3b);
        assert_eq!(" stage 4 ".parse::<CkdStage>().unwrap(), CkdStage::Stage4);
        assert_eq!("CKD 5".parse::<CkdStage>().unwrap(), CkdStage::Stage5);
        assert!("2".parse::<CkdStage>().is_err());
    }

    #[test]
    fn test_ckd_stage_label_is_upper_case() {
        assert_eq!(CkdStage::Stage3a.label(), "3A");
        assert_eq!(CkdStage::Stage3b.label(), "3B");
        assert_eq!(CkdStage::Stage4.label(), "4");
    }

    #[test]
    fn test_ckd_stage_default_and_order() {
        assert_eq!(CkdStage::default(), CkdStage::Stage3a);
        assert!(CkdStage::Stage3b < CkdStage::Stage5);
    }

    #[test]
    fn test_ckd_stage_serde_uses_form_values() {
        let json = serde_json::to_string(&CkdStage::Stage3b).unwrap();
        assert_eq!(json, "\"3b\"");
        let stage: CkdStage = serde_json::from_str("\"4\"").unwrap();
        assert_eq!(stage, CkdStage::Stage4);
    }

    #[test]
    fn test_modifier_key_from_str() {
        assert_eq!(
            "isOnDOAC".parse::<ModifierKey>().unwrap(),
            ModifierKey::Toggle(Toggle::OnAnticoagulant)
        );
        assert_eq!(
            "ckd_stage".parse::<ModifierKey>().unwrap(),
            ModifierKey::CkdStage
        );
        assert!("isOnWarfarin".parse::<ModifierKey>().is_err());
    }

    #[test]
    fn test_toggle_annotations() {
        assert_eq!(Toggle::OnAnticoagulant.annotation(), "on DOAC");
        assert_eq!(Toggle::OnLithium.annotation(), "on Lithium");
        assert_eq!(Toggle::OnMetformin.annotation(), "on Metformin");
    }
}
