//! Dashboard server lifecycle — starts/stops the axum HTTP server.
//!
//! bind → spawn background task → return handle with shutdown channel.

use std::net::SocketAddr;

use serde::Serialize;
use tokio::sync::oneshot;

use crate::dashboard::router::dashboard_router;
use crate::dataset::ExamDataset;

// ═══════════════════════════════════════════════════════════
// Public types
// ═══════════════════════════════════════════════════════════

/// Session metadata for a running dashboard server.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSession {
    pub server_addr: String,
    pub url: String,
    pub port: u16,
    pub started_at: String,
}

/// Handle to a running dashboard server.
pub struct DashboardServer {
    pub session: DashboardSession,
    shutdown_tx: Option<oneshot::Sender<()>>,
    task: Option<tokio::task::JoinHandle<()>>,
}

impl DashboardServer {
    /// Shut down the server gracefully.
    pub fn shutdown(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
            tracing::info!("Dashboard server shutdown signal sent");
        }
    }

    /// Wait for the serve task to finish (after `shutdown`).
    pub async fn stopped(&mut self) {
        if let Some(task) = self.task.take() {
            if let Err(e) = task.await {
                tracing::error!("Dashboard server task failed: {e}");
            }
        }
    }
}

// ═══════════════════════════════════════════════════════════
// Server lifecycle
// ═══════════════════════════════════════════════════════════

/// Start the dashboard on `addr` (port 0 = ephemeral).
///
/// The dataset must already be loaded; this never touches the data
/// directory.
pub async fn start_dashboard_server(
    dataset: ExamDataset,
    addr: SocketAddr,
) -> Result<DashboardServer, String> {
    // 1. Bind
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| format!("Failed to bind dashboard server on {addr}: {e}"))?;

    let addr = listener
        .local_addr()
        .map_err(|e| format!("Failed to get server address: {e}"))?;

    // 2. Build the router
    let app = dashboard_router(dataset);

    // 3. Session metadata
    let session = DashboardSession {
        server_addr: addr.to_string(),
        url: format!("http://{addr}/"),
        port: addr.port(),
        started_at: chrono::Utc::now().to_rfc3339(),
    };

    // 4. Shutdown signal
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    // 5. Spawn server in background task
    let task = tokio::spawn(async move {
        let shutdown_signal = async move {
            let _ = shutdown_rx.await;
            tracing::info!("Dashboard server received shutdown signal");
        };

        tracing::info!(%addr, "Dashboard server started");

        if let Err(e) = axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal)
            .await
        {
            tracing::error!("Dashboard server error: {e}");
        }

        tracing::info!("Dashboard server stopped");
    });

    Ok(DashboardServer {
        session,
        shutdown_tx: Some(shutdown_tx),
        task: Some(task),
    })
}

// ═══════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::{IpAddr, Ipv4Addr};

    fn loopback() -> SocketAddr {
        SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 0)
    }

    #[tokio::test]
    async fn start_serve_and_stop() {
        let mut server = start_dashboard_server(ExamDataset::from_fixture(), loopback())
            .await
            .expect("server should start");

        assert!(server.session.port > 0);
        assert!(server.session.url.starts_with("http://127.0.0.1:"));

        let url = format!("http://127.0.0.1:{}/health", server.session.port);
        let resp = reqwest::get(&url).await.unwrap();
        assert_eq!(resp.status(), reqwest::StatusCode::OK);

        let url = format!(
            "http://127.0.0.1:{}/api/organs/tab-bladder",
            server.session.port
        );
        let body = reqwest::get(&url).await.unwrap().text().await.unwrap();
        assert!(body.contains("Urinary Bladder"));

        server.shutdown();
        server.stopped().await;
    }

    #[tokio::test]
    async fn shutdown_is_idempotent() {
        let mut server = start_dashboard_server(ExamDataset::from_fixture(), loopback())
            .await
            .expect("server should start");

        server.shutdown();
        server.shutdown(); // Second call should be safe
        server.stopped().await;
        server.stopped().await;
    }

    #[tokio::test]
    async fn bind_conflict_is_reported() {
        let mut first = start_dashboard_server(ExamDataset::from_fixture(), loopback())
            .await
            .unwrap();
        let taken: SocketAddr = first.session.server_addr.parse().unwrap();

        let err = match start_dashboard_server(ExamDataset::from_fixture(), taken).await {
            Ok(_) => panic!("second bind on the same port should fail"),
            Err(e) => e,
        };
        assert!(err.contains("Failed to bind"));

        first.shutdown();
    }
}
