use serde::Serialize;

use super::bar::statuses_in_order;
use super::palette::status_color;
use super::{Figure, Layout, Title, Trace};
use crate::models::{LabResult, LabStatus};

const HIERARCHY_HOVER: &str = "<b>%{label}</b><br>Valor: %{value}<extra></extra>";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HierarchyMarker {
    pub colors: Vec<String>,
}

/// Flattened status → parameter tree shared by sunburst and treemap.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HierarchyTrace {
    pub ids: Vec<String>,
    pub labels: Vec<String>,
    pub parents: Vec<String>,
    pub values: Vec<f64>,
    pub branchvalues: &'static str,
    pub marker: HierarchyMarker,
    pub hovertemplate: &'static str,
}

impl HierarchyTrace {
    /// Build the tree. Leaves carry raw magnitudes; a status node is the
    /// sum of its leaves even when their units differ.
    pub fn from_rows(rows: &[LabResult]) -> Self {
        let mut trace = HierarchyTrace {
            ids: Vec::new(),
            labels: Vec::new(),
            parents: Vec::new(),
            values: Vec::new(),
            branchvalues: "total",
            marker: HierarchyMarker { colors: Vec::new() },
            hovertemplate: HIERARCHY_HOVER,
        };

        for status in statuses_in_order(rows) {
            let leaves: Vec<&LabResult> = rows.iter().filter(|r| r.status == status).collect();
            let color = status_color(status).to_string();

            let total: f64 = leaves.iter().map(|r| r.value).sum();
            trace.push(status.as_str(), status.as_str(), "", total, &color);
            for leaf in leaves {
                trace.push(
                    &format!("{}/{}", status.as_str(), leaf.parameter),
                    &leaf.parameter,
                    status.as_str(),
                    leaf.value,
                    &color,
                );
            }
        }

        trace
    }

    fn push(&mut self, id: &str, label: &str, parent: &str, value: f64, color: &str) {
        self.ids.push(id.to_string());
        self.labels.push(label.to_string());
        self.parents.push(parent.to_string());
        self.values.push(value);
        self.marker.colors.push(color.to_string());
    }

    /// Colour assigned to a status node, if present.
    pub fn status_node_color(&self, status: LabStatus) -> Option<&str> {
        self.ids
            .iter()
            .position(|id| id == status.as_str())
            .map(|i| self.marker.colors[i].as_str())
    }
}

fn hierarchy_layout(title: &str) -> Layout {
    let mut layout = Layout::transparent(Title::bold(title));
    layout.showlegend = false;
    layout
}

pub fn sunburst_chart(title: &str, rows: &[LabResult]) -> Figure {
    Figure {
        data: vec![Trace::Sunburst(HierarchyTrace::from_rows(rows))],
        layout: hierarchy_layout(title),
    }
}

pub fn treemap_chart(title: &str, rows: &[LabResult]) -> Figure {
    Figure {
        data: vec![Trace::Treemap(HierarchyTrace::from_rows(rows))],
        layout: hierarchy_layout(title),
    }
}
