//! Dashboard router.
//!
//! Returns a composable `Router`: the HTML page at `/`, a health check,
//! and the JSON "callbacks" the page calls under `/api/`.

use axum::http::{header, HeaderValue};
use axum::routing::get;
use axum::Router;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::dashboard::endpoints;
use crate::dashboard::types::DashboardContext;
use crate::dataset::ExamDataset;

/// Build the dashboard router over a loaded dataset.
pub fn dashboard_router(dataset: ExamDataset) -> Router {
    build_router(DashboardContext::new(dataset))
}

pub(crate) fn build_router(ctx: DashboardContext) -> Router {
    // NOTE: Path params use `:param` syntax (matchit 0.7 / axum 0.7).
    let api = Router::new()
        .route("/organs/:tab", get(endpoints::organs::detail))
        .route("/gauge/:tab", get(endpoints::organs::gauge))
        .route("/charts/:panel/:kind", get(endpoints::charts::chart))
        .route("/insights", get(endpoints::insights::assessment));

    // Every JSON route is uncached; the page itself is not.
    let json = Router::new()
        .route("/health", get(endpoints::health::check))
        .nest("/api", api)
        .with_state(ctx.clone())
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ));

    Router::new()
        .route("/", get(endpoints::page::index))
        .with_state(ctx)
        .merge(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn app() -> Router {
        dashboard_router(ExamDataset::from_fixture())
    }

    async fn get_json(uri: &str) -> (StatusCode, serde_json::Value) {
        let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let resp = app().oneshot(req).await.unwrap();
        let status = resp.status();
        let body = resp.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn health_returns_ok() {
        let (status, json) = get_json("/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "ok");
        assert_eq!(json["version"], crate::config::APP_VERSION);
    }

    #[tokio::test]
    async fn index_serves_html() {
        let req = Request::builder().uri("/").body(Body::empty()).unwrap();
        let resp = app().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let ct = resp.headers().get(header::CONTENT_TYPE).unwrap();
        assert!(ct.to_str().unwrap().starts_with("text/html"));

        let body = resp.into_body().collect().await.unwrap().to_bytes();
        let html = String::from_utf8_lossy(&body);
        assert!(html.contains("Verme_66-0725"));
        assert!(html.contains("tab-kidneys"));
    }

    #[tokio::test]
    async fn organ_detail_for_kidneys() {
        let (status, json) = get_json("/api/organs/tab-kidneys").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["state"], "finding");
        assert_eq!(json["organ"], "Kidneys");
        assert_eq!(json["callouts"][0]["variant"], "danger");
    }

    #[tokio::test]
    async fn unknown_organ_tab_is_placeholder_not_error() {
        let (status, json) = get_json("/api/organs/tab-spleen").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["state"], "placeholder");
    }

    #[tokio::test]
    async fn gauge_for_unknown_tab_is_404() {
        let (status, json) = get_json("/api/gauge/tab-spleen").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["error"]["code"], "NOT_FOUND");

        let (status, json) = get_json("/api/gauge/tab-hernia").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"][0]["value"], 2.0);
    }

    #[tokio::test]
    async fn bar_chart_endpoint_uses_requested_language() {
        let (status, json) = get_json("/api/charts/biochemistry/bar?lang=en").await;
        assert_eq!(status, StatusCode::OK);
        let high = json["data"]
            .as_array()
            .unwrap()
            .iter()
            .find(|t| t["name"] == "High")
            .unwrap();
        assert!(high["customdata"][0][2]
            .as_str()
            .unwrap()
            .starts_with("Product of protein"));
    }

    #[tokio::test]
    async fn hierarchy_chart_endpoints() {
        let (status, json) = get_json("/api/charts/hematology/sunburst").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"][0]["type"], "sunburst");

        let (status, json) = get_json("/api/charts/hematology/treemap").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"][0]["type"], "treemap");
    }

    #[tokio::test]
    async fn unknown_panel_or_kind_is_404() {
        let (status, _) = get_json("/api/charts/urinalysis/bar").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let (status, _) = get_json("/api/charts/biochemistry/pie").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn api_responses_are_not_cached() {
        let req = Request::builder()
            .uri("/api/insights")
            .body(Body::empty())
            .unwrap();
        let resp = app().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers().get(header::CACHE_CONTROL).unwrap(), "no-store");

        let body = resp.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["advanced_recommendations"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn unknown_language_is_json_400() {
        let (status, json) = get_json("/api/charts/biochemistry/bar?lang=fr").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"]["code"], "BAD_REQUEST");
        assert!(json["error"]["message"].as_str().unwrap().contains("fr"));
    }

    #[tokio::test]
    async fn health_is_not_cached() {
        let req = Request::builder().uri("/health").body(Body::empty()).unwrap();
        let resp = app().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers().get(header::CACHE_CONTROL).unwrap(), "no-store");
    }

    #[tokio::test]
    async fn unknown_route_is_404() {
        let req = Request::builder()
            .uri("/nonexistent")
            .body(Body::empty())
            .unwrap();
        let resp = app().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
