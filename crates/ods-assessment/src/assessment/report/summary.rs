use super::super::company::CompanyProfile;
use super::super::domain::MaturityTier;
use super::super::scoring::{AssessmentResult, DimensionScore};
use super::views::{DimensionReportEntry, PriorityArea};
use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssessmentReport {
    pub generated_on: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<CompanyProfile>,
    pub global_score: u8,
    pub global_maturity: MaturityTier,
    pub global_maturity_label: String,
    pub answered: usize,
    pub total_questions: usize,
    pub dimensions: Vec<DimensionReportEntry>,
    pub priority_areas: Vec<PriorityArea>,
}

impl AssessmentReport {
    pub fn build(
        result: &AssessmentResult,
        company: Option<CompanyProfile>,
        generated_on: NaiveDate,
    ) -> Self {
        let dimensions: Vec<DimensionReportEntry> =
            result.dimensions.iter().map(DimensionScore::to_view).collect();
        let priority_areas = super::select_priority_areas(&dimensions);

        Self {
            generated_on,
            company,
            global_score: result.global.global_score,
            global_maturity: result.global.global_maturity,
            global_maturity_label: result.global.global_maturity_label.clone(),
            answered: dimensions.iter().map(|entry| entry.answered).sum(),
            total_questions: dimensions.iter().map(|entry| entry.total_questions).sum(),
            dimensions,
            priority_areas,
        }
    }

    /// Plain-text rendering used by the command line.
    pub fn render_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for AssessmentReport {
    fn fmt(&self, out: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(out, "Informe de Resultados - Autodiagnóstico ODS")?;
        writeln!(out, "Fecha del informe: {}", self.generated_on.format("%Y-%m-%d"))?;

        if let Some(company) = &self.company {
            writeln!(out, "\nDatos de la organización")?;
            writeln!(out, "- Empresa: {}", company.display_name())?;
            for (label, value) in [
                ("Tamaño", &company.size),
                ("Sector", &company.sector),
                ("Ubicación", &company.location),
            ] {
                if !value.trim().is_empty() {
                    writeln!(out, "- {label}: {value}")?;
                }
            }
        }

        writeln!(
            out,
            "\nÍndice global: {}% ({})",
            self.global_score, self.global_maturity_label
        )?;
        writeln!(
            out,
            "Preguntas puntuadas: {}/{}",
            self.answered, self.total_questions
        )?;

        writeln!(out, "\nDetalle por áreas")?;
        for entry in &self.dimensions {
            let benchmark = match entry.benchmark {
                Some(value) => format!(" | media sector (simulada) {value}%"),
                None => String::new(),
            };
            writeln!(
                out,
                "- {}: {}% {}{}",
                entry.name, entry.score, entry.maturity_label, benchmark
            )?;
            writeln!(out, "  Recomendación: {}", entry.recommendation)?;
            if entry.has_critical_gaps() {
                writeln!(out, "  Oportunidades de mejora:")?;
                for opportunity in &entry.opportunities {
                    writeln!(out, "  * [{}] {}", opportunity.question_id, opportunity.text)?;
                }
            } else {
                writeln!(out, "  Sin brechas críticas")?;
            }
        }

        writeln!(out, "\nRecomendaciones prioritarias")?;
        for area in &self.priority_areas {
            writeln!(out, "- Mejora en {}: {}", area.name, area.message)?;
        }

        Ok(())
    }
}

impl DimensionScore {
    pub fn to_view(&self) -> DimensionReportEntry {
        DimensionReportEntry {
            dimension_id: self.dimension_id,
            name: self.name.clone(),
            icon: self.dimension_id.icon(),
            hex_color: self.dimension_id.hex_color(),
            score: self.score,
            maturity: self.maturity,
            maturity_label: self.maturity_label.clone(),
            recommendation: self.recommendation.clone(),
            answered: self.answered,
            total_questions: self.total_questions,
            opportunities: self.opportunities.clone(),
            benchmark: self.benchmark,
        }
    }
}
