use super::super::domain::{DimensionIcon, DimensionId, MaturityTier};
use super::super::scoring::ImprovementOpportunity;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DimensionReportEntry {
    pub dimension_id: DimensionId,
    pub name: String,
    pub icon: DimensionIcon,
    pub hex_color: &'static str,
    pub score: u8,
    pub maturity: MaturityTier,
    pub maturity_label: String,
    pub recommendation: String,
    pub answered: usize,
    pub total_questions: usize,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub opportunities: Vec<ImprovementOpportunity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub benchmark: Option<u8>,
}

impl DimensionReportEntry {
    pub fn has_critical_gaps(&self) -> bool {
        !self.opportunities.is_empty()
    }
}

/// One of the lowest-scoring dimensions, surfaced first in the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriorityArea {
    pub dimension_id: DimensionId,
    pub name: String,
    pub hex_color: &'static str,
    pub score: u8,
    pub message: String,
}
