//! Dashboard Renderer — HTTP surface over the loaded exam dataset.
//!
//! Serves the dashboard page at `/` and the JSON endpoints it calls:
//! organ details, severity gauge, lab panel charts and the clinical
//! assessment. All state is read-only after startup.

pub mod endpoints;
pub mod error;
pub mod page;
pub mod router;
pub mod server;
pub mod types;

pub use router::dashboard_router;
pub use server::{start_dashboard_server, DashboardServer, DashboardSession};
pub use types::DashboardContext;
