//! Organ explorer — selection → detail panel.
//!
//! Three mutually exclusive tabs. Selecting one looks up the imaging
//! finding by exact organ name and turns each lab correlation into a
//! status-coloured callout. Unknown tabs and unmatched organs fall back
//! to a placeholder view instead of an error.

use serde::Serialize;

use crate::dataset::ExamDataset;
use crate::models::{ImagingFinding, LabStatus};

pub const PLACEHOLDER_MESSAGE: &str = "Selecione um achado para ver os detalhes.";
pub const NO_CORRELATION_MESSAGE: &str = "Nenhuma correlação direta notada.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum OrganTab {
    Bladder,
    Kidneys,
    Hernia,
}

impl OrganTab {
    pub const ALL: [OrganTab; 3] = [OrganTab::Bladder, OrganTab::Kidneys, OrganTab::Hernia];

    pub fn tab_id(&self) -> &'static str {
        match self {
            Self::Bladder => "tab-bladder",
            Self::Kidneys => "tab-kidneys",
            Self::Hernia => "tab-hernia",
        }
    }

    pub fn from_tab_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.tab_id() == id)
    }

    /// Organ name as written in the ultrasound report.
    pub fn organ(&self) -> &'static str {
        match self {
            Self::Bladder => "Urinary Bladder",
            Self::Kidneys => "Kidneys",
            Self::Hernia => "Abdominal Wall",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Bladder => "Bexiga",
            Self::Kidneys => "Rins",
            Self::Hernia => "Hérnia",
        }
    }

    /// Hand-assigned clinical concern on a 0–10 scale. Display only.
    pub fn severity(&self) -> f64 {
        match self {
            Self::Bladder => 7.0,
            Self::Kidneys => 5.0,
            Self::Hernia => 2.0,
        }
    }
}

/// Visual variant of a correlation callout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CalloutVariant {
    Primary,
    Danger,
    Warning,
}

impl From<LabStatus> for CalloutVariant {
    fn from(status: LabStatus) -> Self {
        match status {
            LabStatus::Normal => Self::Primary,
            LabStatus::High => Self::Danger,
            LabStatus::Low => Self::Warning,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrelationCallout {
    pub header: String,
    pub insight: String,
    pub parameter: String,
    pub status: LabStatus,
    pub variant: CalloutVariant,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MeasurementView {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum OrganDetailView {
    Finding {
        organ: String,
        impression: String,
        description: String,
        measurements: Vec<MeasurementView>,
        callouts: Vec<CorrelationCallout>,
        /// Shown in place of callouts when the finding has none.
        empty_note: Option<&'static str>,
    },
    Placeholder {
        message: &'static str,
    },
}

impl OrganDetailView {
    pub fn placeholder() -> Self {
        OrganDetailView::Placeholder {
            message: PLACEHOLDER_MESSAGE,
        }
    }
}

/// Resolve a raw tab id (as sent by the page) to a detail view.
pub fn organ_details(dataset: &ExamDataset, tab_id: &str) -> OrganDetailView {
    let Some(tab) = OrganTab::from_tab_id(tab_id) else {
        tracing::debug!(tab_id, "Unknown organ tab");
        return OrganDetailView::placeholder();
    };

    match dataset.ultrasound.finding(tab.organ()) {
        Some(finding) => finding_view(finding),
        None => {
            tracing::debug!(organ = tab.organ(), "No finding for organ");
            OrganDetailView::placeholder()
        }
    }
}

fn finding_view(finding: &ImagingFinding) -> OrganDetailView {
    let callouts: Vec<CorrelationCallout> = finding
        .correlated_lab_findings
        .iter()
        .map(|c| CorrelationCallout {
            header: format!("Correlação com {} (Status: {})", c.parameter, c.status),
            insight: format!("Insight: {}", c.insight),
            parameter: c.parameter.clone(),
            status: c.status,
            variant: c.status.into(),
        })
        .collect();

    let measurements = finding
        .key_measurements
        .iter()
        .map(|(label, value)| MeasurementView {
            label: label.clone(),
            value: value.to_string(),
        })
        .collect();

    let empty_note = callouts.is_empty().then_some(NO_CORRELATION_MESSAGE);

    OrganDetailView::Finding {
        organ: finding.organ.clone(),
        impression: finding.impression.clone(),
        description: finding.report_description.clone(),
        measurements,
        callouts,
        empty_note,
    }
}
