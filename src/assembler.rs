//! Data Assembler — writes the exam fixture to disk.
//!
//! Produces four artifacts in the output directory:
//! - `biochemistry.csv` / `hematology.csv` — one row per lab parameter
//! - `ultrasound_findings.json` — imaging findings with lab correlations
//! - `clinical_insights.json` — hypothesis, concerns, recommendations
//!
//! Output is deterministic: same literals, same bytes. Existing files are
//! overwritten without merge or backup.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config;
use crate::fixture;
use crate::models::LabResult;

#[derive(Debug, thiserror::Error)]
pub enum AssemblyError {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("CSV encoding error for {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("JSON encoding error for {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Paths written by one assembler run, in `config::ARTIFACT_FILES` order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssemblyReport {
    pub output_dir: PathBuf,
    pub written: Vec<PathBuf>,
}

/// Write every artifact into `dir`, creating it if absent.
pub fn assemble(dir: &Path) -> Result<AssemblyReport, AssemblyError> {
    fs::create_dir_all(dir).map_err(|source| AssemblyError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut written = Vec::with_capacity(config::ARTIFACT_FILES.len());

    let path = dir.join(config::BIOCHEMISTRY_FILE);
    write_lab_table(&path, &fixture::biochemistry())?;
    written.push(path);

    let path = dir.join(config::HEMATOLOGY_FILE);
    write_lab_table(&path, &fixture::hematology())?;
    written.push(path);

    let path = dir.join(config::ULTRASOUND_FILE);
    write_json_document(&path, &fixture::ultrasound())?;
    written.push(path);

    let path = dir.join(config::INSIGHTS_FILE);
    write_json_document(&path, &fixture::clinical_insights())?;
    written.push(path);

    tracing::info!(dir = %dir.display(), files = written.len(), "Exam artifacts assembled");

    Ok(AssemblyReport {
        output_dir: dir.to_path_buf(),
        written,
    })
}

/// Encode lab rows as CSV. Absent unit/significance become empty fields.
pub fn encode_lab_table(rows: &[LabResult]) -> Result<Vec<u8>, csv::Error> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for row in rows {
        writer.serialize(row)?;
    }
    writer
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))
}

/// Pretty JSON with 4-space indentation and raw UTF-8 text.
pub fn encode_json_document<T: Serialize>(value: &T) -> Result<Vec<u8>, serde_json::Error> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    Ok(buf)
}

fn write_lab_table(path: &Path, rows: &[LabResult]) -> Result<(), AssemblyError> {
    let bytes = encode_lab_table(rows).map_err(|source| AssemblyError::Csv {
        path: path.to_path_buf(),
        source,
    })?;
    write_file(path, &bytes)?;
    tracing::debug!(path = %path.display(), rows = rows.len(), "Lab table written");
    Ok(())
}

fn write_json_document<T: Serialize>(path: &Path, value: &T) -> Result<(), AssemblyError> {
    let bytes = encode_json_document(value).map_err(|source| AssemblyError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    write_file(path, &bytes)?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "JSON document written");
    Ok(())
}

fn write_file(path: &Path, bytes: &[u8]) -> Result<(), AssemblyError> {
    fs::write(path, bytes).map_err(|source| AssemblyError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assemble_creates_missing_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("nested").join("data");
        let report = assemble(&dir).unwrap();

        assert_eq!(report.output_dir, dir);
        assert_eq!(report.written, config::artifact_paths(&dir));
        assert!(report.written.iter().all(|p| p.exists()));
    }

    #[test]
    fn assemble_twice_is_byte_identical() {
        let tmp = tempfile::tempdir().unwrap();
        let first = assemble(tmp.path()).unwrap();
        let before: Vec<Vec<u8>> = first
            .written
            .iter()
            .map(|p| fs::read(p).unwrap())
            .collect();

        let second = assemble(tmp.path()).unwrap();
        let after: Vec<Vec<u8>> = second
            .written
            .iter()
            .map(|p| fs::read(p).unwrap())
            .collect();

        assert_eq!(before, after);
    }

    #[test]
    fn assemble_overwrites_existing_files() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join(config::BIOCHEMISTRY_FILE);
        fs::write(&path, "stale").unwrap();

        assemble(tmp.path()).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("parameter,value,unit,"));
    }

    #[test]
    fn lab_table_header_and_empty_columns() {
        let bytes = encode_lab_table(&fixture::hematology()).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let mut lines = text.lines();

        assert_eq!(
            lines.next(),
            Some("parameter,value,unit,reference_range,status,significance_pt,significance_en")
        );
        assert_eq!(lines.next(), Some("Red Blood Cells,9.18,,5.0-10.0,Normal,,"));
        assert!(text.contains("Platelets,629000.0,,230000-680000,Normal,,"));
    }

    #[test]
    fn lab_table_quotes_text_with_commas() {
        let bytes = encode_lab_table(&fixture::biochemistry()).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.contains("Urea,84.9,mg/dl,10-56,High,\"Produto do metabolismo"));
    }

    #[test]
    fn json_keeps_utf8_and_four_space_indent() {
        let bytes = encode_json_document(&fixture::clinical_insights()).unwrap();
        let text = String::from_utf8(bytes).unwrap();

        assert!(text.starts_with("{\n    \"patient_id\": \"Verme_66-0725\""));
        assert!(text.contains("Síndrome de Pandora"));
        assert!(!text.contains("\\u00"));
        assert!(text.contains("\"assessment_date\": \"2025-07-09\""));
    }

    #[test]
    fn ultrasound_json_mixes_numeric_and_text_measurements() {
        let bytes = encode_json_document(&fixture::ultrasound()).unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        let findings = json["pathological_findings"].as_array().unwrap();

        assert_eq!(findings[0]["key_measurements"]["wall_thickness_cm"], "0.34-0.67");
        assert_eq!(findings[1]["key_measurements"]["left_kidney_cm"], 3.87);
        assert_eq!(findings[2]["correlated_lab_findings"], serde_json::json!([]));
    }
}
