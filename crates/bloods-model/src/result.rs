//! Engine output types.

use serde::{Deserialize, Serialize};

/// Diseases that produced one exact frequency string for a test.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyGroup {
    pub frequency: String,
    /// Labels in first-seen order, possibly annotated ("Mental Health (on Lithium)").
    pub diseases: Vec<String>,
}

/// A required test with its frequency groups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedTest {
    pub test_name: String,
    pub frequencies: Vec<FrequencyGroup>,
}

impl ResolvedTest {
    pub fn new(test_name: &str) -> Self {
        Self {
            test_name: test_name.to_string(),
            frequencies: Vec::new(),
        }
    }

    /// Record `label` under `frequency`, creating the group on first sight.
    pub fn add(&mut self, frequency: &str, label: String) {
        match self
            .frequencies
            .iter_mut()
            .find(|group| group.frequency == frequency)
        {
            Some(group) => {
                if !group.diseases.contains(&label) {
                    group.diseases.push(label);
                }
            }
            None => self.frequencies.push(FrequencyGroup {
                frequency: frequency.to_string(),
                diseases: vec![label],
            }),
        }
    }

    pub fn group(&self, frequency: &str) -> Option<&FrequencyGroup> {
        self.frequencies
            .iter()
            .find(|group| group.frequency == frequency)
    }

    /// Every disease label across all groups.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.frequencies
            .iter()
            .flat_map(|group| group.diseases.iter().map(String::as_str))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_merges_identical_frequencies() {
        let mut fbc = ResolvedTest::new("FBC");
        fbc.add("Annually", "Coronary Heart Disease".to_string());
        fbc.add("Annually", "Heart Failure".to_string());
        fbc.add("10 days after starting treatment", "B12 Anemia".to_string());

        assert_eq!(fbc.frequencies.len(), 2);
        assert_eq!(
            fbc.group("Annually").unwrap().diseases,
            vec!["Coronary Heart Disease", "Heart Failure"]
        );
        assert_eq!(fbc.labels().count(), 3);
    }

    #[test]
    fn serializes_in_presentation_shape() {
        let mut test = ResolvedTest::new("U&Es");
        test.add("Annually", "Hypertension".to_string());
        let json = serde_json::to_value(&test).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "testName": "U&Es",
                "frequencies": [{ "frequency": "Annually", "diseases": ["Hypertension"] }]
            })
        );
    }
}
