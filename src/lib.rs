pub mod assembler; // Data Assembler: fixture → CSV/JSON artifacts
pub mod charts;
pub mod config;
pub mod dashboard; // Dashboard Renderer: HTTP surface
pub mod dataset;
pub mod fixture;
pub mod models;
pub mod views; // Organ explorer

use std::net::SocketAddr;
use std::path::Path;

use tracing_subscriber::EnvFilter;

use crate::assembler::{AssemblyError, AssemblyReport};
use crate::dataset::{DatasetError, ExamDataset};

#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error(transparent)]
    Assembly(#[from] AssemblyError),
    #[error(transparent)]
    Dataset(#[from] DatasetError),
    #[error("Server error: {0}")]
    Server(String),
}

/// Install the global tracing subscriber. `RUST_LOG` overrides the default filter.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();
}

/// Write the exam artifacts into `data_dir`.
pub fn run_assembler(data_dir: &Path) -> Result<AssemblyReport, RunError> {
    tracing::info!("{} assembler v{}", config::APP_NAME, config::APP_VERSION);
    Ok(assembler::assemble(data_dir)?)
}

/// Load the dataset, then serve the dashboard until Ctrl-C.
///
/// The dataset is loaded before binding: a missing artifact fails here,
/// never mid-render.
pub async fn run_dashboard(data_dir: &Path, addr: SocketAddr) -> Result<(), RunError> {
    tracing::info!("{} dashboard v{}", config::APP_NAME, config::APP_VERSION);

    let dataset = ExamDataset::load(data_dir)?;
    let mut server = dashboard::start_dashboard_server(dataset, addr)
        .await
        .map_err(RunError::Server)?;

    tracing::info!(url = %server.session.url, "Dashboard ready");

    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Cannot listen for Ctrl-C: {e}");
    }

    server.shutdown();
    server.stopped().await;
    Ok(())
}
