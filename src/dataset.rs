//! Read-only exam dataset loaded once at dashboard startup.
//!
//! All four artifacts must be present. There is no partial or degraded
//! mode: any missing or malformed file aborts the load.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use crate::config;
use crate::models::{ClinicalAssessment, CorrelatedLabRef, LabPanel, LabResult, UltrasoundReport};

#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("Data file not found: {0}")]
    MissingFile(PathBuf),
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Malformed CSV in {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("Malformed JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl DatasetError {
    pub fn is_missing_file(&self) -> bool {
        matches!(self, DatasetError::MissingFile(_))
    }
}

/// A correlation whose parameter has no row in either lab table.
#[derive(Debug, Clone, PartialEq)]
pub struct DanglingCorrelation {
    pub organ: String,
    pub reference: CorrelatedLabRef,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExamDataset {
    pub biochemistry: Vec<LabResult>,
    pub hematology: Vec<LabResult>,
    pub ultrasound: UltrasoundReport,
    pub insights: ClinicalAssessment,
}

impl ExamDataset {
    /// Load all artifacts from `dir`.
    ///
    /// Presence of every file is checked before any parsing, so a missing
    /// artifact is always reported as `MissingFile` regardless of order.
    pub fn load(dir: &Path) -> Result<Self, DatasetError> {
        for path in config::artifact_paths(dir) {
            if !path.is_file() {
                return Err(DatasetError::MissingFile(path));
            }
        }

        let dataset = Self {
            biochemistry: read_lab_table(&dir.join(config::BIOCHEMISTRY_FILE))?,
            hematology: read_lab_table(&dir.join(config::HEMATOLOGY_FILE))?,
            ultrasound: read_json_document(&dir.join(config::ULTRASOUND_FILE))?,
            insights: read_json_document(&dir.join(config::INSIGHTS_FILE))?,
        };

        tracing::info!(
            dir = %dir.display(),
            biochemistry = dataset.biochemistry.len(),
            hematology = dataset.hematology.len(),
            findings = dataset.ultrasound.pathological_findings.len(),
            "Exam dataset loaded"
        );

        let dangling = dataset.dangling_correlations();
        if !dangling.is_empty() {
            tracing::warn!(count = dangling.len(), "Imaging correlations reference unknown lab parameters");
        }

        Ok(dataset)
    }

    /// Build straight from the in-memory fixture, bypassing disk.
    pub fn from_fixture() -> Self {
        Self {
            biochemistry: crate::fixture::biochemistry(),
            hematology: crate::fixture::hematology(),
            ultrasound: crate::fixture::ultrasound(),
            insights: crate::fixture::clinical_insights(),
        }
    }

    pub fn panel(&self, panel: LabPanel) -> &[LabResult] {
        match panel {
            LabPanel::Biochemistry => &self.biochemistry,
            LabPanel::Hematology => &self.hematology,
        }
    }

    /// First lab row with this exact parameter name, across both panels.
    pub fn lab_result(&self, parameter: &str) -> Option<&LabResult> {
        self.biochemistry
            .iter()
            .chain(self.hematology.iter())
            .find(|r| r.parameter == parameter)
    }

    pub fn dangling_correlations(&self) -> Vec<DanglingCorrelation> {
        self.ultrasound
            .pathological_findings
            .iter()
            .flat_map(|finding| {
                finding
                    .correlated_lab_findings
                    .iter()
                    .filter(|c| self.lab_result(&c.parameter).is_none())
                    .map(|c| DanglingCorrelation {
                        organ: finding.organ.clone(),
                        reference: c.clone(),
                    })
            })
            .collect()
    }
}

fn read_lab_table(path: &Path) -> Result<Vec<LabResult>, DatasetError> {
    let file = open(path)?;
    let mut reader = csv::Reader::from_reader(file);
    reader
        .deserialize()
        .collect::<Result<Vec<LabResult>, _>>()
        .map_err(|source| DatasetError::Csv {
            path: path.to_path_buf(),
            source,
        })
}

fn read_json_document<T: DeserializeOwned>(path: &Path) -> Result<T, DatasetError> {
    let file = open(path)?;
    serde_json::from_reader(io::BufReader::new(file)).map_err(|source| DatasetError::Json {
        path: path.to_path_buf(),
        source,
    })
}

fn open(path: &Path) -> Result<fs::File, DatasetError> {
    fs::File::open(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => DatasetError::MissingFile(path.to_path_buf()),
        _ => DatasetError::Io {
            path: path.to_path_buf(),
            source,
        },
    })
}
