use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::enums::{Confidence, Priority};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hypothesis {
    pub name_pt: String,
    pub name_en: String,
    pub confidence: Confidence,
    pub evidence: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecondaryConcern {
    pub name_pt: String,
    pub name_en: String,
    pub evidence: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub recommendation: String,
    pub justification_pt: String,
    pub priority: Priority,
}

/// Contents of `clinical_insights.json`. Free text, not cross-validated
/// against lab results or imaging findings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClinicalAssessment {
    pub patient_id: String,
    pub assessment_date: NaiveDate,
    pub primary_hypothesis: Hypothesis,
    pub secondary_concerns: Vec<SecondaryConcern>,
    pub advanced_recommendations: Vec<Recommendation>,
}
