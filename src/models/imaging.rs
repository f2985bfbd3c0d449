use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::enums::LabStatus;

/// A key measurement is either a single number or a free-text range
/// such as `"0.34-0.67"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Measurement {
    Number(f64),
    Text(String),
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Measurement::Number(v) => write!(f, "{v}"),
            Measurement::Text(s) => f.write_str(s),
        }
    }
}

/// Reference from an imaging finding to a lab parameter.
/// Not referentially checked at load time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelatedLabRef {
    pub parameter: String,
    pub status: LabStatus,
    pub insight: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImagingFinding {
    pub organ: String,
    pub impression: String,
    pub report_description: String,
    pub key_measurements: BTreeMap<String, Measurement>,
    #[serde(default)]
    pub correlated_lab_findings: Vec<CorrelatedLabRef>,
}

/// Contents of `ultrasound_findings.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UltrasoundReport {
    pub patient_name: String,
    pub exam_id: String,
    pub exam_date: NaiveDate,
    pub pathological_findings: Vec<ImagingFinding>,
    pub normal_findings: Vec<String>,
}

impl UltrasoundReport {
    /// Exact organ-name match.
    pub fn finding(&self, organ: &str) -> Option<&ImagingFinding> {
        self.pathological_findings.iter().find(|f| f.organ == organ)
    }
}
