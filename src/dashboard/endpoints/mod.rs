//! Dashboard endpoint handlers.
//!
//! Each handler recomputes its panel from the shared dataset.

pub mod charts;
pub mod health;
pub mod insights;
pub mod organs;
pub mod page;
