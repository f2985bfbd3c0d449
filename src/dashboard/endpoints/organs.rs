//! Organ explorer endpoints.
//!
//! `GET /api/organs/:tab` — detail panel for the selected tab.
//! `GET /api/gauge/:tab`  — severity gauge for the selected tab.

use axum::extract::{Path, State};
use axum::Json;

use crate::charts::{severity_gauge, Figure};
use crate::dashboard::error::ApiError;
use crate::dashboard::types::DashboardContext;
use crate::views::{organ_details, OrganDetailView, OrganTab};

/// Unknown tabs render the placeholder view rather than failing.
pub async fn detail(
    State(ctx): State<DashboardContext>,
    Path(tab): Path<String>,
) -> Json<OrganDetailView> {
    Json(organ_details(&ctx.dataset, &tab))
}

pub async fn gauge(Path(tab): Path<String>) -> Result<Json<Figure>, ApiError> {
    let tab = OrganTab::from_tab_id(&tab)
        .ok_or_else(|| ApiError::NotFound(format!("Unknown organ tab: {tab}")))?;
    Ok(Json(severity_gauge(tab)))
}
