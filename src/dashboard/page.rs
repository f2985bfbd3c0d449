//! Dashboard HTML — one self-contained page.
//!
//! The summary column (hypothesis, concerns, recommendations, normal
//! organs) is rendered server-side. The organ explorer and lab charts are
//! filled in by the page script from the `/api/` endpoints; charts are
//! drawn with plotly.js.

use crate::dataset::ExamDataset;
use crate::models::{ClinicalAssessment, Recommendation};
use crate::views::OrganTab;

const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

/// Minimal HTML escaping for text nodes and double-quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn kpi_card(title: &str, content: &str, color: &str, icon: &str) -> String {
    format!(
        r#"<div class="card kpi">
  <h4 style="color:{color}">{title}</h4>
  <div><span class="icon">{icon}</span><span class="kpi-text">{content}</span></div>
</div>"#,
        color = color,
        title = escape_html(title),
        icon = icon,
        content = escape_html(content),
    )
}

fn recommendation_item(rec: &Recommendation, index: usize) -> String {
    format!(
        r#"<details class="rec">
  <summary>Recomendação #{n}: {text}</summary>
  <p>{justification}</p>
  <span class="badge">Prioridade: {priority}</span>
</details>"#,
        n = index + 1,
        text = escape_html(&rec.recommendation),
        justification = escape_html(&rec.justification_pt),
        priority = rec.priority,
    )
}

fn evidence_list(items: &[String]) -> String {
    let lis: String = items
        .iter()
        .map(|e| format!("<li>{}</li>", escape_html(e)))
        .collect();
    format!(r#"<ul class="evidence">{lis}</ul>"#)
}

fn summary_column(insights: &ClinicalAssessment, normal_organs: &[String]) -> String {
    let hypothesis = &insights.primary_hypothesis;
    let concern = insights
        .secondary_concerns
        .first()
        .map(|c| c.name_pt.as_str())
        .unwrap_or("Nenhum risco secundário registrado");

    let recommendations: String = insights
        .advanced_recommendations
        .iter()
        .enumerate()
        .map(|(i, rec)| recommendation_item(rec, i))
        .collect();

    let normal: String = normal_organs
        .iter()
        .map(|o| format!(r#"<span class="chip">{}</span>"#, escape_html(o)))
        .collect();

    format!(
        r#"<h3>Sumário e Hipóteses</h3>
{hypothesis_card}
<p class="muted">Confiança: {confidence}</p>
{evidence}
{concern_card}
<h3>Recomendações Avançadas</h3>
<div class="accordion">{recommendations}</div>
<h3>Órgãos sem Alterações</h3>
<div>{normal}</div>"#,
        hypothesis_card = kpi_card("Hipótese Principal", &hypothesis.name_pt, "#c81e1e", "&#128161;"),
        confidence = hypothesis.confidence,
        evidence = evidence_list(&hypothesis.evidence),
        concern_card = kpi_card("Risco Secundário", concern, "#d97706", "&#9888;"),
        recommendations = recommendations,
        normal = normal,
    )
}

fn organ_tabs() -> String {
    OrganTab::ALL
        .iter()
        .enumerate()
        .map(|(i, tab)| {
            format!(
                r#"<button class="tab{active}" data-tab="{id}">{label}</button>"#,
                active = if i == 0 { " active" } else { "" },
                id = tab.tab_id(),
                label = tab.label(),
            )
        })
        .collect()
}

/// Render the full dashboard document for the loaded dataset.
pub fn render_dashboard_page(dataset: &ExamDataset) -> String {
    let insights = &dataset.insights;
    let report = &dataset.ultrasound;

    format!(
        r##"<!DOCTYPE html>
<html lang="pt">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Dashboard de Análise Clínica Integrada</title>
<script src="{plotly}"></script>
<style>
*,*::before,*::after{{box-sizing:border-box}}
body{{margin:0;font-family:-apple-system,BlinkMacSystemFont,'Segoe UI',Roboto,sans-serif;background:#f8f9fa;color:#1c1917}}
header{{padding:40px 24px;color:#fff;text-align:center;background:linear-gradient(135deg,#1e3a8a,#3b82f6);box-shadow:0 4px 24px rgba(0,0,0,.15)}}
header h1{{margin:0 0 8px}}
header h2{{margin:0;font-weight:300;font-size:1.2rem}}
main{{display:flex;flex-wrap:wrap;gap:24px;padding:24px}}
.col-side{{flex:1 1 320px}}
.col-main{{flex:2 1 560px}}
.card{{background:#fff;border-radius:12px;box-shadow:0 1px 6px rgba(0,0,0,.08);padding:20px;margin-bottom:16px}}
.kpi h4{{margin:0 0 8px}}
.icon{{margin-right:8px}}
.kpi-text{{font-weight:600}}
.muted{{color:#78716c;font-size:.85rem}}
.evidence{{font-size:.9rem;padding-left:20px}}
.rec{{border-bottom:1px solid #e7e5e4;padding:10px 0}}
.rec summary{{cursor:pointer;font-weight:600}}
.badge{{display:inline-block;background:#0dcaf0;color:#000;border-radius:6px;padding:2px 8px;font-size:.8rem}}
.chip{{display:inline-block;background:#e7f5ee;color:#198754;border-radius:12px;padding:4px 10px;margin:0 6px 6px 0;font-size:.85rem}}
.tabs{{display:flex;gap:4px;border-bottom:1px solid #dee2e6;margin-bottom:16px}}
.tab{{border:none;background:none;padding:10px 16px;cursor:pointer;font-size:1rem;color:#0d6efd}}
.tab.active{{border-bottom:3px solid #0d6efd;font-weight:600;color:#1c1917}}
blockquote{{border-left:4px solid #cbd5e1;margin:12px 0;padding-left:16px;color:#334155}}
.callout{{border-radius:8px;padding:12px;margin-bottom:8px;border-left:6px solid}}
.callout h6{{margin:0 0 6px;font-size:.9rem}}
.callout p{{margin:0}}
.callout.primary{{border-color:#0d6efd;background:#e7f1ff}}
.callout.danger{{border-color:#dc3545;background:#fbeaec}}
.callout.warning{{border-color:#ffc107;background:#fff8e1}}
.explorer{{display:flex;flex-wrap:wrap;gap:16px}}
#organ-details{{flex:2 1 360px}}
#severity-gauge{{flex:1 1 240px;min-height:220px}}
select{{padding:6px;border-radius:6px;margin-left:auto}}
#lab-chart{{min-height:420px}}
</style>
</head>
<body>
<header>
  <h1>Dashboard de Análise Clínica Integrada</h1>
  <h2>Paciente: {patient_id}</h2>
  <p class="exam">Exame {exam_id} &middot; {exam_date}</p>
</header>
<main>
  <section class="col-side">
{summary}
  </section>
  <section class="col-main">
    <h3>Explorador Interativo de Achados</h3>
    <div class="card">
      <div class="tabs" id="organ-tabs">{organ_tabs}</div>
      <div class="explorer">
        <div id="organ-details"></div>
        <div id="severity-gauge"></div>
      </div>
    </div>
    <h3>Painéis Laboratoriais Detalhados</h3>
    <div class="card">
      <div class="tabs" id="panel-tabs">
        <button class="tab active" data-panel="biochemistry">Bioquímica</button>
        <button class="tab" data-panel="hematology">Hemograma</button>
        <select id="chart-kind">
          <option value="bar">Barras</option>
          <option value="sunburst">Sunburst</option>
          <option value="treemap">Treemap</option>
        </select>
      </div>
      <div id="lab-chart"></div>
    </div>
  </section>
</main>
<script>
(function(){{
  var state={{tab:'{first_tab}',panel:'biochemistry',kind:'bar'}};
  function el(tag,cls,text){{var e=document.createElement(tag);if(cls)e.className=cls;if(text!==undefined)e.textContent=text;return e;}}
  function getJson(url){{return fetch(url).then(function(r){{return r.json();}});}}
  function renderDetail(view){{
    var root=document.getElementById('organ-details');
    root.replaceChildren();
    if(view.state!=='finding'){{root.appendChild(el('p',null,view.message));return;}}
    root.appendChild(el('h4',null,view.impression));
    root.appendChild(el('blockquote',null,view.description));
    if(view.measurements.length){{
      var ul=el('ul','muted');
      view.measurements.forEach(function(m){{ul.appendChild(el('li',null,m.label+': '+m.value));}});
      root.appendChild(ul);
    }}
    root.appendChild(el('hr'));
    root.appendChild(el('h5',null,'Correlações Clínicas com Exames Laboratoriais:'));
    if(view.callouts.length===0){{root.appendChild(el('p','muted',view.empty_note));return;}}
    view.callouts.forEach(function(c){{
      var box=el('div','callout '+c.variant);
      box.appendChild(el('h6',null,c.header));
      box.appendChild(el('p',null,c.insight));
      root.appendChild(box);
    }});
  }}
  function plot(id,fig){{Plotly.react(id,fig.data,fig.layout,{{responsive:true}});}}
  function loadOrgan(){{
    getJson('/api/organs/'+state.tab).then(renderDetail);
    getJson('/api/gauge/'+state.tab).then(function(f){{plot('severity-gauge',f);}});
  }}
  function loadChart(){{
    getJson('/api/charts/'+state.panel+'/'+state.kind).then(function(f){{plot('lab-chart',f);}});
  }}
  function activate(group,btn){{
    group.querySelectorAll('.tab').forEach(function(b){{b.classList.remove('active');}});
    btn.classList.add('active');
  }}
  var organTabs=document.getElementById('organ-tabs');
  organTabs.addEventListener('click',function(e){{
    var b=e.target.closest('[data-tab]');if(!b)return;
    activate(organTabs,b);state.tab=b.dataset.tab;loadOrgan();
  }});
  var panelTabs=document.getElementById('panel-tabs');
  panelTabs.addEventListener('click',function(e){{
    var b=e.target.closest('[data-panel]');if(!b)return;
    activate(panelTabs,b);state.panel=b.dataset.panel;loadChart();
  }});
  document.getElementById('chart-kind').addEventListener('change',function(e){{
    state.kind=e.target.value;loadChart();
  }});
  loadOrgan();loadChart();
}})();
</script>
</body>
</html>"##,
        plotly = PLOTLY_CDN,
        patient_id = escape_html(&insights.patient_id),
        exam_id = escape_html(&report.exam_id),
        exam_date = report.exam_date,
        summary = summary_column(insights, &report.normal_findings),
        organ_tabs = organ_tabs(),
        first_tab = OrganTab::Bladder.tab_id(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_handles_markup_characters() {
        assert_eq!(
            escape_html(r#"<b>"A" & 'B'</b>"#),
            "&lt;b&gt;&quot;A&quot; &amp; &#39;B&#39;&lt;/b&gt;"
        );
        assert_eq!(escape_html("Hérnia"), "Hérnia");
    }

    #[test]
    fn page_shows_summary_cards_and_recommendations() {
        let html = render_dashboard_page(&ExamDataset::from_fixture());
        assert!(html.contains("Paciente: Verme_66-0725"));
        assert!(html.contains("Síndrome de Pandora com Cistite Idiopática Felina (CIF)"));
        assert!(html.contains("Risco Elevado para Doença Renal Crônica (DRC)"));
        assert!(html.contains("Recomendação #3: Implementar Manejo Ambiental Multimodal (MEMO)."));
        assert!(html.contains("Prioridade: Medium"));
        assert!(html.contains("2025-07-08"));
    }

    #[test]
    fn page_lists_tabs_and_normal_organs() {
        let html = render_dashboard_page(&ExamDataset::from_fixture());
        for tab in OrganTab::ALL {
            assert!(html.contains(&format!(r#"data-tab="{}""#, tab.tab_id())));
        }
        assert!(html.contains(r#"<span class="chip">Adrenal Glands</span>"#));
    }

    #[test]
    fn missing_secondary_concern_renders_fallback() {
        let mut dataset = ExamDataset::from_fixture();
        dataset.insights.secondary_concerns.clear();
        let html = render_dashboard_page(&dataset);
        assert!(html.contains("Nenhum risco secundário registrado"));
    }

    #[test]
    fn free_text_is_escaped() {
        let mut dataset = ExamDataset::from_fixture();
        dataset.insights.patient_id = "<script>x</script>".into();
        let html = render_dashboard_page(&dataset);
        assert!(html.contains("Paciente: &lt;script&gt;x&lt;/script&gt;"));
    }
}
