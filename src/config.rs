use std::path::{Path, PathBuf};

/// Application-level constants
pub const APP_NAME: &str = "Vetpanel";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Directory the assembler writes to and the dashboard reads from,
/// relative to the working directory.
pub const DEFAULT_DATA_DIR: &str = "data";

/// Local-only bind address for the dashboard.
pub const DEFAULT_ADDR: &str = "127.0.0.1:8050";

pub const BIOCHEMISTRY_FILE: &str = "biochemistry.csv";
pub const HEMATOLOGY_FILE: &str = "hematology.csv";
pub const ULTRASOUND_FILE: &str = "ultrasound_findings.json";
pub const INSIGHTS_FILE: &str = "clinical_insights.json";

/// All artifacts exchanged between the assembler and the dashboard.
pub const ARTIFACT_FILES: [&str; 4] = [
    BIOCHEMISTRY_FILE,
    HEMATOLOGY_FILE,
    ULTRASOUND_FILE,
    INSIGHTS_FILE,
];

/// Filter used when `RUST_LOG` is unset.
pub fn default_log_filter() -> &'static str {
    "vetpanel=info,vetpanel_lib=info,tower_http=warn"
}

/// Full paths of every artifact under `dir`, in `ARTIFACT_FILES` order.
pub fn artifact_paths(dir: &Path) -> Vec<PathBuf> {
    ARTIFACT_FILES.iter().map(|name| dir.join(name)).collect()
}
