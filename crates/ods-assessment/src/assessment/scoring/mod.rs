mod config;
mod rules;

pub use config::{DontKnowPolicy, ScoringConfig};

use super::answers::AnswerSet;
use super::benchmark::BenchmarkSource;
use super::catalog::AssessmentCatalog;
use super::domain::{Dimension, DimensionId, MaturityTier, Question};
use serde::Serialize;
use tracing::debug;

/// Stateless engine that applies the catalog to an answer snapshot.
#[derive(Debug, Clone, Copy)]
pub struct ScoringEngine<'a> {
    catalog: &'a AssessmentCatalog,
    config: ScoringConfig,
}

impl<'a> ScoringEngine<'a> {
    pub fn new(catalog: &'a AssessmentCatalog, config: ScoringConfig) -> Self {
        Self { catalog, config }
    }

    pub fn catalog(&self) -> &'a AssessmentCatalog {
        self.catalog
    }

    pub fn config(&self) -> ScoringConfig {
        self.config
    }

    /// Scores one dimension. Questions belonging to other dimensions are
    /// ignored.
    pub fn score_dimension(
        &self,
        dimension: &Dimension,
        questions: &[&Question],
        answers: &AnswerSet,
    ) -> Result<DimensionScore, ScoringError> {
        let questions: Vec<&Question> = questions
            .iter()
            .copied()
            .filter(|question| question.dimension == dimension.id)
            .collect();

        let tally = rules::tally_dimension(&questions, answers, self.config.dont_know);
        let score = rules::percentage(tally.sum, tally.max_possible);
        let band = self.catalog.tier_for(score);
        let recommendation = self
            .catalog
            .recommendation(dimension.id, band.tier)
            .ok_or(ScoringError::MissingRecommendation {
                dimension: dimension.id,
                tier: band.tier,
            })?;

        debug!(
            dimension = %dimension.id,
            sum = tally.sum,
            max_possible = tally.max_possible,
            score,
            tier = %band.tier,
            "scored dimension"
        );

        Ok(DimensionScore {
            dimension_id: dimension.id,
            name: dimension.title.clone(),
            raw_score: tally.sum,
            max_possible: tally.max_possible,
            answered: tally.answered,
            total_questions: questions.len(),
            score,
            maturity: band.tier,
            maturity_label: band.label.clone(),
            recommendation: recommendation.to_string(),
            opportunities: tally.opportunities,
            benchmark: None,
        })
    }

    /// Unweighted mean of the dimension percentages.
    pub fn score_global(&self, dimension_scores: &[DimensionScore]) -> GlobalScore {
        let score = rules::mean_percentage(dimension_scores.iter().map(|entry| entry.score));
        let band = self.catalog.tier_for(score);
        GlobalScore {
            global_score: score,
            global_maturity: band.tier,
            global_maturity_label: band.label.clone(),
        }
    }

    /// Scores every catalog dimension in catalog order, then the global index.
    pub fn assess(&self, answers: &AnswerSet) -> Result<AssessmentResult, ScoringError> {
        let dimensions = self
            .catalog
            .dimensions()
            .iter()
            .map(|dimension| {
                let questions = self.catalog.questions_for(dimension.id);
                self.score_dimension(dimension, &questions, answers)
            })
            .collect::<Result<Vec<_>, _>>()?;

        let global = self.score_global(&dimensions);
        Ok(AssessmentResult { dimensions, global })
    }

    pub fn assess_with_benchmark<B>(
        &self,
        answers: &AnswerSet,
        benchmark: &mut B,
    ) -> Result<AssessmentResult, ScoringError>
    where
        B: BenchmarkSource + ?Sized,
    {
        let mut result = self.assess(answers)?;
        for entry in &mut result.dimensions {
            entry.benchmark = Some(benchmark.sector_average(entry.dimension_id));
        }
        Ok(result)
    }
}

/// Answered question flagged for remediation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImprovementOpportunity {
    pub question_id: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DimensionScore {
    pub dimension_id: DimensionId,
    pub name: String,
    pub raw_score: u32,
    pub max_possible: u32,
    pub answered: usize,
    pub total_questions: usize,
    pub score: u8,
    pub maturity: MaturityTier,
    pub maturity_label: String,
    pub recommendation: String,
    pub opportunities: Vec<ImprovementOpportunity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub benchmark: Option<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GlobalScore {
    pub global_score: u8,
    pub global_maturity: MaturityTier,
    pub global_maturity_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssessmentResult {
    pub dimensions: Vec<DimensionScore>,
    pub global: GlobalScore,
}

impl AssessmentResult {
    pub fn dimension(&self, id: DimensionId) -> Option<&DimensionScore> {
        self.dimensions.iter().find(|entry| entry.dimension_id == id)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ScoringError {
    #[error("no recommendation for dimension '{dimension}' at tier '{tier}'")]
    MissingRecommendation {
        dimension: DimensionId,
        tier: MaturityTier,
    },
}
