//! Lab panel chart endpoint.
//!
//! `GET /api/charts/:panel/:kind?lang=pt|en`
//! where `panel` is `biochemistry|hematology` and `kind` is
//! `bar|sunburst|treemap`.

use std::str::FromStr;

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;

use crate::charts::{panel_bar_chart, sunburst_chart, treemap_chart, Figure};
use crate::dashboard::error::ApiError;
use crate::dashboard::types::DashboardContext;
use crate::models::{LabPanel, Language};

#[derive(Debug, Deserialize)]
pub struct ChartQuery {
    pub lang: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Bar,
    Sunburst,
    Treemap,
}

impl FromStr for ChartKind {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bar" => Ok(Self::Bar),
            "sunburst" => Ok(Self::Sunburst),
            "treemap" => Ok(Self::Treemap),
            other => Err(ApiError::NotFound(format!("Unknown chart kind: {other}"))),
        }
    }
}

pub async fn chart(
    State(ctx): State<DashboardContext>,
    Path((panel, kind)): Path<(String, String)>,
    Query(query): Query<ChartQuery>,
) -> Result<Json<Figure>, ApiError> {
    let panel = LabPanel::from_str(&panel)
        .map_err(|_| ApiError::NotFound(format!("Unknown panel: {panel}")))?;
    let kind = ChartKind::from_str(&kind)?;
    let lang = match query.lang.as_deref() {
        None => Language::default(),
        Some(code) => Language::from_code(code)
            .ok_or_else(|| ApiError::BadRequest(format!("Unknown language: {code}")))?,
    };
    let rows = ctx.dataset.panel(panel);

    let figure = match kind {
        ChartKind::Bar => panel_bar_chart(panel, rows, lang),
        ChartKind::Sunburst => sunburst_chart(panel.title_pt(), rows),
        ChartKind::Treemap => treemap_chart(panel.title_pt(), rows),
    };

    tracing::debug!(panel = panel.as_str(), ?kind, traces = figure.data.len(), "Chart built");
    Ok(Json(figure))
}
