//! Chart definitions for the dashboard.
//!
//! Figures are plain data serialized to plotly.js JSON (`{data, layout}`);
//! the page hands them to `Plotly.react` unchanged. Builders are pure
//! functions over lab rows so every request recomputes its chart from the
//! read-only dataset.

mod bar;
mod gauge;
mod hierarchy;
pub mod palette;

pub use bar::*;
pub use gauge::*;
pub use hierarchy::*;

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    Bar(BarTrace),
    Sunburst(HierarchyTrace),
    Treemap(HierarchyTrace),
    Indicator(IndicatorTrace),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Title {
    pub text: String,
}

impl Title {
    pub fn bold(text: &str) -> Self {
        Self {
            text: format!("<b>{text}</b>"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Axis {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tickangle: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<[f64; 2]>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub title: Title,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<Axis>,
    pub paper_bgcolor: &'static str,
    pub plot_bgcolor: &'static str,
    pub showlegend: bool,
}

impl Layout {
    /// Transparent background so the chart blends into its card.
    pub fn transparent(title: Title) -> Self {
        Self {
            title,
            xaxis: None,
            paper_bgcolor: palette::TRANSPARENT,
            plot_bgcolor: palette::TRANSPARENT,
            showlegend: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub color: String,
}
