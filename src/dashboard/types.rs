//! Shared state for the dashboard router.

use std::sync::Arc;

use crate::dataset::ExamDataset;

/// Shared context for all dashboard routes.
/// The dataset is loaded once and never mutated afterwards.
#[derive(Clone)]
pub struct DashboardContext {
    pub dataset: Arc<ExamDataset>,
}

impl DashboardContext {
    pub fn new(dataset: ExamDataset) -> Self {
        Self {
            dataset: Arc::new(dataset),
        }
    }
}
