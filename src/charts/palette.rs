use crate::models::LabStatus;

pub const NORMAL_COLOR: &str = "#198754";
pub const HIGH_COLOR: &str = "#dc3545";
pub const LOW_COLOR: &str = "#ffc107";

pub const TRANSPARENT: &str = "rgba(0,0,0,0)";

/// Fixed status colour shared by every chart type.
pub fn status_color(status: LabStatus) -> &'static str {
    match status {
        LabStatus::Normal => NORMAL_COLOR,
        LabStatus::High => HIGH_COLOR,
        LabStatus::Low => LOW_COLOR,
    }
}
