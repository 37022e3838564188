//! Frequency classification.
//!
//! Splits frequency text into ongoing monitoring schedules and one-off
//! diagnostic checks, and picks the display tag for each. Both functions
//! are public because the presentation layer calls them directly.

use std::fmt;

use bloods_model::{FrequencyGroup, ResolvedTest};

/// Phrases marking a frequency as diagnostic or one-off.
const DIAGNOSTIC_PHRASES: &[&str] = &[
    "diagnosis",
    "to check cvd risk",
    "make diagnosis",
    "no monitoring",
    "after starting treatment",
];

/// True when `text` describes an ongoing monitoring schedule.
///
/// Hybrid phrases such as "At diagnosis & every 3-5 years" count as
/// monitoring: the schedule is anchored at diagnosis but recurs.
pub fn is_monitoring_frequency(text: &str) -> bool {
    let lower = text.trim().to_lowercase();
    if lower.contains("diagnosis") && lower.contains("every") {
        return true;
    }
    !DIAGNOSTIC_PHRASES
        .iter()
        .any(|phrase| lower.contains(phrase))
}

/// Display category of a frequency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrequencyTag {
    FiveYearly,
    Annual,
    SixMonthly,
    ThreeMonthly,
    Monthly,
    Yearly,
    Other,
}

impl FrequencyTag {
    /// Colour used when rendering the tag.
    pub fn color(&self) -> &'static str {
        match self {
            Self::FiveYearly => "red",
            Self::Annual => "green",
            Self::SixMonthly => "purple",
            Self::ThreeMonthly => "indigo",
            Self::Monthly => "pink",
            Self::Yearly => "teal",
            Self::Other => "gray",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::FiveYearly => "5 yearly",
            Self::Annual => "annual",
            Self::SixMonthly => "6 monthly",
            Self::ThreeMonthly => "3 monthly",
            Self::Monthly => "monthly",
            Self::Yearly => "multi-year",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for FrequencyTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Tag for `text`. First matching rule wins, so "6 monthly" is checked
/// before the bare "monthly".
pub fn frequency_tag(text: &str) -> FrequencyTag {
    let lower = text.to_lowercase();
    if lower.contains("5 yearly") {
        return FrequencyTag::FiveYearly;
    }
    if !is_monitoring_frequency(text) {
        return FrequencyTag::Other;
    }
    if lower.contains("annually") {
        FrequencyTag::Annual
    } else if lower.contains("6 monthly") || lower.contains("every 4-6 months") {
        FrequencyTag::SixMonthly
    } else if lower.contains("3 monthly") {
        FrequencyTag::ThreeMonthly
    } else if lower.contains("monthly") {
        FrequencyTag::Monthly
    } else if lower.contains("yearly") || lower.contains("years") {
        FrequencyTag::Yearly
    } else {
        FrequencyTag::Other
    }
}

/// Frequency groups of one test split into the two result sections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestSections<'a> {
    pub monitoring: Vec<&'a FrequencyGroup>,
    pub diagnostic: Vec<&'a FrequencyGroup>,
}

/// Partition a test's groups into Monitoring and Diagnostic/Other,
/// keeping their order.
pub fn split_sections(test: &ResolvedTest) -> TestSections<'_> {
    let (monitoring, diagnostic) = test
        .frequencies
        .iter()
        .partition(|group| is_monitoring_frequency(&group.frequency));
    TestSections {
        monitoring,
        diagnostic,
    }
}
