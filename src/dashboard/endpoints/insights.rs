//! Clinical assessment endpoint.

use axum::extract::State;
use axum::Json;

use crate::dashboard::types::DashboardContext;
use crate::models::ClinicalAssessment;

/// `GET /api/insights` — hypothesis, concerns and recommendations.
pub async fn assessment(State(ctx): State<DashboardContext>) -> Json<ClinicalAssessment> {
    Json(ctx.dataset.insights.clone())
}
