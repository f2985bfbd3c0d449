use serde::{Deserialize, Serialize};

use super::enums::{LabStatus, Language};

/// One row of a lab panel table.
///
/// Field order is the CSV column order:
/// `parameter,value,unit,reference_range,status,significance_pt,significance_en`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabResult {
    pub parameter: String,
    pub value: f64,
    pub unit: Option<String>,
    pub reference_range: String,
    pub status: LabStatus,
    pub significance_pt: Option<String>,
    pub significance_en: Option<String>,
}

impl LabResult {
    /// Row without unit or significance text (most hematology rows).
    pub fn plain(parameter: &str, value: f64, reference_range: &str, status: LabStatus) -> Self {
        Self {
            parameter: parameter.to_string(),
            value,
            unit: None,
            reference_range: reference_range.to_string(),
            status,
            significance_pt: None,
            significance_en: None,
        }
    }

    pub fn with_unit(mut self, unit: &str) -> Self {
        self.unit = Some(unit.to_string());
        self
    }

    pub fn with_significance(mut self, pt: &str, en: &str) -> Self {
        self.significance_pt = Some(pt.to_string());
        self.significance_en = Some(en.to_string());
        self
    }

    pub fn significance(&self, lang: Language) -> Option<&str> {
        match lang {
            Language::Pt => self.significance_pt.as_deref(),
            Language::En => self.significance_en.as_deref(),
        }
    }
}
