//! Dashboard page.

use axum::extract::State;
use axum::response::Html;

use crate::dashboard::page::render_dashboard_page;
use crate::dashboard::types::DashboardContext;

/// `GET /` — the full dashboard document.
pub async fn index(State(ctx): State<DashboardContext>) -> Html<String> {
    Html(render_dashboard_page(&ctx.dataset))
}
