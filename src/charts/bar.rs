use serde::Serialize;

use super::palette::status_color;
use super::{Axis, Figure, Layout, Marker, Title, Trace};
use crate::models::{LabPanel, LabResult, LabStatus, Language};

const BIOCHEMISTRY_HOVER: &str = "<b>%{x}</b><br>\
Resultado: %{y} %{customdata[0]}<br>\
Referência: %{customdata[1]}<br>\
Significado: %{customdata[2]}<extra></extra>";

const HEMATOLOGY_HOVER: &str =
    "<b>%{x}</b><br>Resultado: %{y}<br>Status: %{customdata[0]}<extra></extra>";

/// One bar series; one series per status, like a colour-grouped bar chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarTrace {
    pub name: String,
    pub legendgroup: String,
    pub x: Vec<String>,
    pub y: Vec<f64>,
    pub text: Vec<String>,
    pub textposition: &'static str,
    pub marker: Marker,
    pub customdata: Vec<Vec<String>>,
    pub hovertemplate: &'static str,
}

/// Distinct statuses in order of first appearance.
pub(crate) fn statuses_in_order(rows: &[LabResult]) -> Vec<LabStatus> {
    let mut seen = Vec::new();
    for row in rows {
        if !seen.contains(&row.status) {
            seen.push(row.status);
        }
    }
    seen
}

/// Categorical bar chart of a lab panel: x = parameter, y = value.
pub fn panel_bar_chart(panel: LabPanel, rows: &[LabResult], lang: Language) -> Figure {
    let data = statuses_in_order(rows)
        .into_iter()
        .map(|status| {
            let group: Vec<&LabResult> = rows.iter().filter(|r| r.status == status).collect();
            Trace::Bar(BarTrace {
                name: status.to_string(),
                legendgroup: status.to_string(),
                x: group.iter().map(|r| r.parameter.clone()).collect(),
                y: group.iter().map(|r| r.value).collect(),
                text: group.iter().map(|r| r.value.to_string()).collect(),
                textposition: "auto",
                marker: Marker {
                    color: status_color(status).to_string(),
                },
                customdata: group.iter().map(|r| hover_data(panel, r, lang)).collect(),
                hovertemplate: match panel {
                    LabPanel::Biochemistry => BIOCHEMISTRY_HOVER,
                    LabPanel::Hematology => HEMATOLOGY_HOVER,
                },
            })
        })
        .collect();

    let mut layout = Layout::transparent(Title::bold(panel.title_pt()));
    if panel == LabPanel::Hematology {
        layout.xaxis = Some(Axis {
            tickangle: Some(-45),
            ..Axis::default()
        });
    }

    Figure { data, layout }
}

fn hover_data(panel: LabPanel, row: &LabResult, lang: Language) -> Vec<String> {
    match panel {
        LabPanel::Biochemistry => vec![
            row.unit.clone().unwrap_or_default(),
            row.reference_range.clone(),
            row.significance(lang).unwrap_or_default().to_string(),
        ],
        LabPanel::Hematology => vec![row.status.to_string()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::palette::HIGH_COLOR;
    use crate::fixture;

    fn bars(figure: &Figure) -> Vec<&BarTrace> {
        figure
            .data
            .iter()
            .map(|t| match t {
                Trace::Bar(b) => b,
                other => panic!("unexpected trace {other:?}"),
            })
            .collect()
    }

    #[test]
    fn biochemistry_chart_holds_exactly_fixture_rows() {
        let fig = panel_bar_chart(LabPanel::Biochemistry, &fixture::biochemistry(), Language::Pt);

        let mut points: Vec<(String, f64, String)> = bars(&fig)
            .into_iter()
            .flat_map(|b| {
                b.x.iter()
                    .zip(&b.y)
                    .map(move |(x, y)| (x.clone(), *y, b.name.clone()))
            })
            .collect();
        points.sort_by(|a, b| a.0.cmp(&b.0));

        assert_eq!(
            points,
            vec![
                ("ALT (SGPT)".into(), 25.4, "Normal".into()),
                ("Alkaline Phosphatase".into(), 17.9, "Normal".into()),
                ("Creatinine".into(), 1.18, "Normal".into()),
                ("Urea".into(), 84.9, "High".into()),
            ]
        );
    }

    #[test]
    fn traces_follow_first_appearance_of_status() {
        let fig = panel_bar_chart(LabPanel::Hematology, &fixture::hematology(), Language::Pt);
        let names: Vec<_> = bars(&fig).into_iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["Normal", "High", "Low"]);
        assert_eq!(bars(&fig)[1].marker.color, HIGH_COLOR);
    }

    #[test]
    fn biochemistry_hover_carries_unit_reference_and_significance() {
        let fig = panel_bar_chart(LabPanel::Biochemistry, &fixture::biochemistry(), Language::En);
        let high = bars(&fig).into_iter().find(|b| b.name == "High").unwrap();
        assert_eq!(high.customdata[0][0], "mg/dl");
        assert_eq!(high.customdata[0][1], "10-56");
        assert!(high.customdata[0][2].starts_with("Product of protein metabolism"));
        assert!(high.hovertemplate.contains("Referência"));
    }

    #[test]
    fn hematology_hover_carries_status_and_tilted_ticks() {
        let fig = panel_bar_chart(LabPanel::Hematology, &fixture::hematology(), Language::Pt);
        let low = bars(&fig).into_iter().find(|b| b.name == "Low").unwrap();
        assert_eq!(low.customdata, vec![vec!["Low".to_string()]]);
        assert_eq!(low.text, vec!["840".to_string()]);
        assert_eq!(fig.layout.xaxis.as_ref().unwrap().tickangle, Some(-45));
        assert_eq!(fig.layout.title.text, "<b>Painel Hematológico</b>");
    }

    #[test]
    fn serializes_as_plotly_bar() {
        let fig = panel_bar_chart(LabPanel::Biochemistry, &fixture::biochemistry(), Language::Pt);
        let json = serde_json::to_value(&fig).unwrap();
        assert_eq!(json["data"][0]["type"], "bar");
        assert_eq!(json["layout"]["paper_bgcolor"], "rgba(0,0,0,0)");
        assert!(json["layout"].get("xaxis").is_none());
    }

    #[test]
    fn empty_panel_has_no_traces() {
        let fig = panel_bar_chart(LabPanel::Biochemistry, &[], Language::Pt);
        assert!(fig.data.is_empty());
    }
}
