mod standard;

use super::domain::{
    AnswerOption, AnswerValue, Dimension, DimensionId, MaturityTier, Question, TierBand,
};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

pub type RecommendationTable = BTreeMap<DimensionId, BTreeMap<MaturityTier, String>>;

/// Raw catalog contents as supplied by configuration, before validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogDefinition {
    pub dimensions: Vec<Dimension>,
    pub questions: Vec<Question>,
    pub options: Vec<AnswerOption>,
    pub tiers: Vec<TierBand>,
    pub recommendations: RecommendationTable,
}

/// Validated, read-only reference data for the questionnaire.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentCatalog {
    dimensions: Vec<Dimension>,
    questions: Vec<Question>,
    options: Vec<AnswerOption>,
    tiers: [TierBand; 4],
    recommendations: RecommendationTable,
}

impl AssessmentCatalog {
    /// Built-in catalog: five dimensions, 82 questions.
    pub fn standard() -> Self {
        let definition = standard::definition();
        let tiers = standard::tier_bands();
        Self {
            dimensions: definition.dimensions,
            questions: definition.questions,
            options: definition.options,
            tiers,
            recommendations: definition.recommendations,
        }
    }

    pub fn new(definition: CatalogDefinition) -> Result<Self, CatalogError> {
        let CatalogDefinition {
            dimensions,
            questions,
            options,
            tiers,
            recommendations,
        } = definition;

        let mut seen_dimensions = BTreeSet::new();
        for dimension in &dimensions {
            if !seen_dimensions.insert(dimension.id) {
                return Err(CatalogError::DuplicateDimension(dimension.id));
            }
        }

        let mut seen_questions = BTreeSet::new();
        for question in &questions {
            if !seen_dimensions.contains(&question.dimension) {
                return Err(CatalogError::UnknownDimension {
                    question_id: question.id.clone(),
                    dimension: question.dimension,
                });
            }
            if !seen_questions.insert(question.id.as_str()) {
                return Err(CatalogError::DuplicateQuestion(question.id.clone()));
            }
        }

        for dimension in &dimensions {
            if !questions.iter().any(|q| q.dimension == dimension.id) {
                return Err(CatalogError::EmptyDimension(dimension.id));
            }
        }

        validate_options(&options)?;
        let tiers = validate_tiers(tiers)?;

        for dimension in &dimensions {
            for band in &tiers {
                let present = recommendations
                    .get(&dimension.id)
                    .and_then(|by_tier| by_tier.get(&band.tier))
                    .is_some_and(|text| !text.trim().is_empty());
                if !present {
                    return Err(CatalogError::MissingRecommendation {
                        dimension: dimension.id,
                        tier: band.tier,
                    });
                }
            }
        }

        Ok(Self {
            dimensions,
            questions,
            options,
            tiers,
            recommendations,
        })
    }

    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let definition: CatalogDefinition =
            serde_json::from_reader(reader).map_err(CatalogError::Parse)?;
        Self::new(definition)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let file = File::open(path).map_err(CatalogError::Io)?;
        Self::from_json_reader(BufReader::new(file))
    }

    pub fn dimensions(&self) -> &[Dimension] {
        &self.dimensions
    }

    pub fn dimension(&self, id: DimensionId) -> Option<&Dimension> {
        self.dimensions.iter().find(|dimension| dimension.id == id)
    }

    pub fn dimension_at(&self, index: usize) -> Option<&Dimension> {
        self.dimensions.get(index)
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn question(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|question| question.id == id)
    }

    pub fn questions_for(&self, dimension: DimensionId) -> Vec<&Question> {
        self.questions
            .iter()
            .filter(|question| question.dimension == dimension)
            .collect()
    }

    pub fn options(&self) -> &[AnswerOption] {
        &self.options
    }

    pub fn tiers(&self) -> &[TierBand] {
        &self.tiers
    }

    /// Walks the bands lowest first and advances only while `score` exceeds
    /// the current band's upper bound, so a boundary score stays in the
    /// lower band.
    pub fn tier_for(&self, score: u8) -> &TierBand {
        let [first, rest @ ..] = &self.tiers;
        let mut selected = first;
        for band in rest {
            if score > selected.max {
                selected = band;
            } else {
                break;
            }
        }
        selected
    }

    pub fn recommendation(&self, dimension: DimensionId, tier: MaturityTier) -> Option<&str> {
        self.recommendations
            .get(&dimension)
            .and_then(|by_tier| by_tier.get(&tier))
            .map(String::as_str)
    }

    pub fn definition(&self) -> CatalogDefinition {
        CatalogDefinition {
            dimensions: self.dimensions.clone(),
            questions: self.questions.clone(),
            options: self.options.clone(),
            tiers: self.tiers.to_vec(),
            recommendations: self.recommendations.clone(),
        }
    }
}

fn validate_options(options: &[AnswerOption]) -> Result<(), CatalogError> {
    let mut scale = BTreeSet::new();
    let mut has_not_applicable = false;

    for option in options {
        match option.kind() {
            Some(AnswerValue::Scale(value)) => {
                scale.insert(value);
            }
            Some(AnswerValue::NotApplicable) => has_not_applicable = true,
            Some(AnswerValue::DontKnow) => {}
            None => {
                return Err(CatalogError::InvalidScale(format!(
                    "option '{}' has unrecognized value {}",
                    option.label, option.value
                )))
            }
        }
    }

    let expected: BTreeSet<u8> = (0..=AnswerValue::SCALE_MAX).collect();
    if scale != expected {
        return Err(CatalogError::InvalidScale(format!(
            "scale values must be exactly 0..={}",
            AnswerValue::SCALE_MAX
        )));
    }
    if !has_not_applicable {
        return Err(CatalogError::InvalidScale(
            "a not-applicable option (-1) is required".to_string(),
        ));
    }

    Ok(())
}

fn validate_tiers(tiers: Vec<TierBand>) -> Result<[TierBand; 4], CatalogError> {
    let count = tiers.len();
    let tiers: [TierBand; 4] = tiers.try_into().map_err(|_| {
        CatalogError::InvalidTierBands(format!("expected 4 maturity bands, found {count}"))
    })?;

    let mut expected_min: u16 = 0;
    for (band, tier) in tiers.iter().zip(MaturityTier::ordered()) {
        if band.tier != tier {
            return Err(CatalogError::InvalidTierBands(format!(
                "band '{}' is out of order, expected {}",
                band.label, tier
            )));
        }
        if u16::from(band.min) != expected_min || band.max < band.min {
            return Err(CatalogError::InvalidTierBands(format!(
                "band '{}' must start at {expected_min} and not end before it starts",
                band.label
            )));
        }
        expected_min = u16::from(band.max) + 1;
    }

    if expected_min != 101 {
        return Err(CatalogError::InvalidTierBands(
            "bands must end exactly at 100".to_string(),
        ));
    }

    Ok(tiers)
}

/// Configuration-integrity failures detected while building a catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("question '{question_id}' references unknown dimension '{dimension}'")]
    UnknownDimension {
        question_id: String,
        dimension: DimensionId,
    },
    #[error("question '{0}' is defined more than once")]
    DuplicateQuestion(String),
    #[error("dimension '{0}' is defined more than once")]
    DuplicateDimension(DimensionId),
    #[error("dimension '{0}' has no questions")]
    EmptyDimension(DimensionId),
    #[error("dimension '{dimension}' has no recommendation for tier '{tier}'")]
    MissingRecommendation {
        dimension: DimensionId,
        tier: MaturityTier,
    },
    #[error("invalid maturity bands: {0}")]
    InvalidTierBands(String),
    #[error("invalid answer scale: {0}")]
    InvalidScale(String),
    #[error("unable to parse catalog: {0}")]
    Parse(#[source] serde_json::Error),
    #[error("unable to read catalog: {0}")]
    Io(#[source] std::io::Error),
}
