//! Hand-authored exam record for patient "Verme" (exam 66/0725).
//!
//! These literals are the single source of every artifact the assembler
//! writes. Nothing here is computed: statuses are copied from the lab
//! report, not derived from the reference ranges.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::models::{
    ClinicalAssessment, Confidence, CorrelatedLabRef, Hypothesis, ImagingFinding, LabResult,
    LabStatus, Measurement, Priority, Recommendation, SecondaryConcern, UltrasoundReport,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("fixture dates are valid calendar dates")
}

fn measurements<const N: usize>(entries: [(&str, Measurement); N]) -> BTreeMap<String, Measurement> {
    entries
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect()
}

fn correlation(parameter: &str, status: LabStatus, insight: &str) -> CorrelatedLabRef {
    CorrelatedLabRef {
        parameter: parameter.to_string(),
        status,
        insight: insight.to_string(),
    }
}

fn strings<const N: usize>(items: [&str; N]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn biochemistry() -> Vec<LabResult> {
    vec![
        LabResult::plain("Creatinine", 1.18, "0.6-1.8", LabStatus::Normal)
            .with_unit("mg/dl")
            .with_significance(
                "Principal marcador da função de filtração renal. Valores normais sugerem que os rins ainda conseguem filtrar o sangue adequadamente.",
                "Primary marker of renal filtration function. Normal values suggest the kidneys can still filter blood properly.",
            ),
        LabResult::plain("Urea", 84.9, "10-56", LabStatus::High)
            .with_unit("mg/dl")
            .with_significance(
                "Produto do metabolismo de proteínas, eliminado pelos rins. A elevação (azotemia) pode indicar desidratação ou comprometimento renal.",
                "Product of protein metabolism, eliminated by the kidneys. Elevation (azotemia) may indicate dehydration or renal impairment.",
            ),
        LabResult::plain("ALT (SGPT)", 25.4, "6.0-83", LabStatus::Normal)
            .with_unit("U.I./L")
            .with_significance(
                "Enzima primariamente hepática. Valores normais são um forte indicativo de ausência de lesão aguda no fígado.",
                "Primarily a liver enzyme. Normal values are a strong indicator of no acute liver injury.",
            ),
        LabResult::plain("Alkaline Phosphatase", 17.9, "4-81", LabStatus::Normal)
            .with_unit("U.I./L")
            .with_significance(
                "Enzima presente em vários tecidos (fígado, ossos). Valores normais ajudam a descartar doenças colestáticas (fluxo biliar) e ósseas.",
                "Enzyme present in various tissues (liver, bones). Normal values help rule out cholestatic (bile flow) and bone diseases.",
            ),
    ]
}

pub fn hematology() -> Vec<LabResult> {
    vec![
        LabResult::plain("Red Blood Cells", 9.18, "5.0-10.0", LabStatus::Normal),
        LabResult::plain("Hematocrit", 43.0, "24-45", LabStatus::Normal),
        LabResult::plain("Hemoglobin", 13.9, "8-15", LabStatus::Normal),
        LabResult::plain("Plasma Protein", 9.2, "6.0-8.0", LabStatus::High).with_significance(
            "Proteínas totais no sangue. A elevação pode indicar desidratação ou inflamação crônica.",
            "Total proteins in the blood. Elevation may indicate dehydration or chronic inflammation.",
        ),
        LabResult::plain("Leukocytes", 7000.0, "5500-19500", LabStatus::Normal),
        LabResult::plain("Segmented Neutrophils", 5810.0, "1925-14625", LabStatus::Normal),
        LabResult::plain("Lymphocytes", 840.0, "1100-10725", LabStatus::Low).with_significance(
            "Células de defesa. A redução (linfopenia) é um achado comum em quadros de estresse ou inflamação aguda.",
            "Defense cells. Reduction (lymphopenia) is a common finding in stress or acute inflammation.",
        ),
        LabResult::plain("Platelets", 629000.0, "230000-680000", LabStatus::Normal),
    ]
}

pub fn ultrasound() -> UltrasoundReport {
    UltrasoundReport {
        patient_name: "Verme".into(),
        exam_id: "66/0725".into(),
        exam_date: date(2025, 7, 8),
        pathological_findings: vec![
            ImagingFinding {
                organ: "Urinary Bladder".into(),
                impression: "Inflammatory Process / Cystitis".into(),
                report_description: "Bladder with little content, with countless suspended echogenic points and punctiform material, featuring irregular and thickened walls.".into(),
                key_measurements: measurements([(
                    "wall_thickness_cm",
                    Measurement::Text("0.34-0.67".into()),
                )]),
                correlated_lab_findings: vec![
                    correlation(
                        "Lymphocytes",
                        LabStatus::Low,
                        "A linfopenia pode ser uma resposta sistêmica ao estresse e inflamação causados pela cistite.",
                    ),
                    correlation(
                        "Plasma Protein",
                        LabStatus::High,
                        "A hiperproteinemia pode ser secundária à desidratação ou à resposta inflamatória crônica da bexiga.",
                    ),
                ],
            },
            ImagingFinding {
                organ: "Kidneys".into(),
                impression: "Suspected Incipient Nephropathy / Early Stage Renal Disease".into(),
                report_description: "Discreetly elevated cortical echogenicity. Findings may be related to fat deposition but cannot rule out early-stage renal disease.".into(),
                key_measurements: measurements([
                    ("left_kidney_cm", Measurement::Number(3.87)),
                    ("right_kidney_cm", Measurement::Number(3.59)),
                ]),
                correlated_lab_findings: vec![
                    correlation(
                        "Urea",
                        LabStatus::High,
                        "A azotemia (ureia alta) é o principal indicador laboratorial que corrobora a suspeita ultrassonográfica de disfunção renal.",
                    ),
                    correlation(
                        "Creatinine",
                        LabStatus::Normal,
                        "A creatinina ainda normal, apesar da ureia alta, sugere um quadro inicial ou uma causa pré-renal (como desidratação).",
                    ),
                ],
            },
            ImagingFinding {
                organ: "Abdominal Wall".into(),
                impression: "Umbilical Hernia".into(),
                report_description: "At the umbilical scar region, a reducible volume increase is noted, containing amorphous and hypoechoic structure (omentum/mesentery), associated with a loss of continuity of the abdominal wall of approximately 0.64cm, without herniated organs.".into(),
                key_measurements: measurements([("hernial_ring_cm", Measurement::Number(0.64))]),
                correlated_lab_findings: vec![],
            },
        ],
        normal_findings: strings([
            "Liver",
            "Gallbladder",
            "Spleen",
            "Pancreas",
            "Adrenal Glands",
            "Stomach",
            "Intestines",
        ]),
    }
}

pub fn clinical_insights() -> ClinicalAssessment {
    ClinicalAssessment {
        patient_id: "Verme_66-0725".into(),
        assessment_date: date(2025, 7, 9),
        primary_hypothesis: Hypothesis {
            name_pt: "Síndrome de Pandora com Cistite Idiopática Felina (CIF)".into(),
            name_en: "Pandora Syndrome with Feline Idiopathic Cystitis (FIC)".into(),
            confidence: Confidence::High,
            evidence: strings([
                "Achado ultrassonográfico de cistite sem urolitíase (cálculos) visível.",
                "Linfopenia e hiperproteinemia consistentes com resposta a estresse fisiológico.",
                "Perfil epidemiológico (macho, 6 anos) é de alto risco para CIF.",
            ]),
        },
        secondary_concerns: vec![SecondaryConcern {
            name_pt: "Risco Elevado para Doença Renal Crônica (DRC)".into(),
            name_en: "Elevated Risk for Chronic Kidney Disease (CKD)".into(),
            evidence: strings([
                "Azotemia pré-renal (Ureia alta, Creatinina normal).",
                "Ecogenicidade cortical dos rins discretamente elevada no ultrassom.",
                "Inflamação sistêmica crônica (da cistite) é um fator de risco conhecido para progressão de DRC.",
            ]),
        }],
        advanced_recommendations: vec![
            Recommendation {
                recommendation: "Dosar o biomarcador SDMA (Dimetilarginina Simétrica).".into(),
                justification_pt: "SDMA é um marcador da função renal muito mais sensível e precoce que a creatinina. Um valor elevado de SDMA confirmaria o dano renal incipiente, mesmo com creatinina normal.".into(),
                priority: Priority::High,
            },
            Recommendation {
                recommendation: "Realizar urinálise completa com Relação Proteína/Creatinina (RPC).".into(),
                justification_pt: "A RPC quantifica a perda de proteína pelos rins. Proteinúria é um fator chave no estadiamento e prognóstico da Doença Renal Crônica.".into(),
                priority: Priority::High,
            },
            Recommendation {
                recommendation: "Implementar Manejo Ambiental Multimodal (MEMO).".into(),
                justification_pt: "Considerando a alta suspeita de Síndrome de Pandora, o manejo do estresse é tão importante quanto o tratamento médico. Isso inclui enriquecimento ambiental, múltiplas fontes de água e caixas de areia.".into(),
                priority: Priority::Medium,
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn biochemistry_has_four_rows_with_units() {
        let rows = biochemistry();
        assert_eq!(rows.len(), 4);
        assert!(rows.iter().all(|r| r.unit.is_some()));
        assert!(rows.iter().all(|r| r.significance_pt.is_some()));
    }

    #[test]
    fn hematology_flags_two_abnormal_rows() {
        let rows = hematology();
        assert_eq!(rows.len(), 8);
        let abnormal: Vec<_> = rows
            .iter()
            .filter(|r| r.status != LabStatus::Normal)
            .map(|r| (r.parameter.as_str(), r.status))
            .collect();
        assert_eq!(
            abnormal,
            vec![("Plasma Protein", LabStatus::High), ("Lymphocytes", LabStatus::Low)]
        );
    }

    #[test]
    fn dates_are_exam_and_assessment_days() {
        assert_eq!(ultrasound().exam_date.to_string(), "2025-07-08");
        assert_eq!(clinical_insights().assessment_date.to_string(), "2025-07-09");
    }

    #[test]
    #[should_panic(expected = "fixture dates are valid calendar dates")]
    fn impossible_fixture_date_panics() {
        date(2025, 2, 30);
    }

    #[test]
    fn hernia_has_no_correlations() {
        let report = ultrasound();
        let hernia = report.finding("Abdominal Wall").unwrap();
        assert!(hernia.correlated_lab_findings.is_empty());
        assert_eq!(report.normal_findings.len(), 7);
    }
}
