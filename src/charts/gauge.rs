use serde::Serialize;

use super::palette::{HIGH_COLOR, LOW_COLOR, NORMAL_COLOR};
use super::{Axis, Figure, Layout, Marker, Title, Trace};
use crate::views::OrganTab;

pub const SEVERITY_MAX: f64 = 10.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GaugeStep {
    pub range: [f64; 2],
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Gauge {
    pub axis: Axis,
    pub bar: Marker,
    pub steps: Vec<GaugeStep>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndicatorTrace {
    pub mode: &'static str,
    pub value: f64,
    pub title: Title,
    pub gauge: Gauge,
}

/// Bar colour for a severity score: green below 4, amber below 7, red above.
pub fn severity_color(score: f64) -> &'static str {
    if score >= 7.0 {
        HIGH_COLOR
    } else if score >= 4.0 {
        LOW_COLOR
    } else {
        NORMAL_COLOR
    }
}

/// Gauge for the organ's hand-assigned severity.
pub fn severity_gauge(tab: OrganTab) -> Figure {
    let score = tab.severity();
    let trace = IndicatorTrace {
        mode: "gauge+number",
        value: score,
        title: Title {
            text: format!("Severidade: {}", tab.label()),
        },
        gauge: Gauge {
            axis: Axis {
                range: Some([0.0, SEVERITY_MAX]),
                ..Axis::default()
            },
            bar: Marker {
                color: severity_color(score).to_string(),
            },
            steps: vec![
                GaugeStep {
                    range: [0.0, 4.0],
                    color: "rgba(25,135,84,0.15)",
                },
                GaugeStep {
                    range: [4.0, 7.0],
                    color: "rgba(255,193,7,0.15)",
                },
                GaugeStep {
                    range: [7.0, SEVERITY_MAX],
                    color: "rgba(220,53,69,0.15)",
                },
            ],
        },
    };

    let mut layout = Layout::transparent(Title::bold("Índice de Severidade"));
    layout.showlegend = false;

    Figure {
        data: vec![Trace::Indicator(trace)],
        layout,
    }
}
