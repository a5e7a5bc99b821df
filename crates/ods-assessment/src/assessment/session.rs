//! Step-by-step questionnaire flow.
//!
//! The session owns the mutable answer set and navigation position. Scoring
//! only ever sees an immutable snapshot of the answers, taken when results
//! are requested.

use super::answers::{AnswerLookup, AnswerSet};
use super::benchmark::BenchmarkSource;
use super::catalog::AssessmentCatalog;
use super::company::CompanyProfile;
use super::domain::{AnswerValue, Dimension, DimensionId};
use super::report::AssessmentReport;
use super::scoring::{AssessmentResult, ScoringEngine, ScoringError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AssessmentStep {
    #[default]
    Welcome,
    OdsIntro,
    CompanyInfo,
    Assessment,
    Results,
}

impl AssessmentStep {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Welcome => "welcome",
            Self::OdsIntro => "ods-intro",
            Self::CompanyInfo => "company-info",
            Self::Assessment => "assessment",
            Self::Results => "results",
        }
    }
}

impl fmt::Display for AssessmentStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SectionProgress {
    pub dimension_id: DimensionId,
    pub answered: usize,
    pub total: usize,
    pub percent: u8,
}

impl SectionProgress {
    pub const fn is_complete(&self) -> bool {
        self.answered == self.total
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssessmentSession {
    step: AssessmentStep,
    company: CompanyProfile,
    answers: AnswerSet,
    current_section_index: usize,
}

impl AssessmentSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> AssessmentStep {
        self.step
    }

    pub fn company(&self) -> &CompanyProfile {
        &self.company
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    pub fn current_section_index(&self) -> usize {
        self.current_section_index
    }

    pub fn start(&mut self) -> Result<(), SessionError> {
        self.expect_step(AssessmentStep::Welcome)?;
        self.step = AssessmentStep::OdsIntro;
        Ok(())
    }

    pub fn continue_to_company_info(&mut self) -> Result<(), SessionError> {
        self.expect_step(AssessmentStep::OdsIntro)?;
        self.step = AssessmentStep::CompanyInfo;
        Ok(())
    }

    pub fn submit_company(&mut self, profile: CompanyProfile) -> Result<(), SessionError> {
        self.expect_step(AssessmentStep::CompanyInfo)?;
        let missing = profile.missing_fields();
        if !missing.is_empty() {
            return Err(SessionError::IncompleteCompanyProfile(missing));
        }
        self.company = profile;
        self.step = AssessmentStep::Assessment;
        Ok(())
    }

    /// Records a raw answer, replacing any previous one for the question.
    pub fn answer(
        &mut self,
        catalog: &AssessmentCatalog,
        question_id: &str,
        value: f64,
    ) -> Result<(), SessionError> {
        self.expect_step(AssessmentStep::Assessment)?;
        if catalog.question(question_id).is_none() {
            return Err(SessionError::UnknownQuestion(question_id.to_string()));
        }
        if AnswerValue::from_raw(value).is_none() {
            return Err(SessionError::UnrecognizedAnswerValue {
                question_id: question_id.to_string(),
                value,
            });
        }
        self.answers.insert(question_id, value);
        Ok(())
    }

    pub fn current_dimension<'c>(
        &self,
        catalog: &'c AssessmentCatalog,
    ) -> Option<&'c Dimension> {
        catalog.dimension_at(self.current_section_index)
    }

    pub fn section_progress(&self, catalog: &AssessmentCatalog) -> Option<SectionProgress> {
        let dimension = self.current_dimension(catalog)?;
        let questions = catalog.questions_for(dimension.id);
        let total = questions.len();
        let answered = questions
            .iter()
            .filter(|question| {
                matches!(
                    self.answers.lookup(&question.id),
                    AnswerLookup::Recognized(_)
                )
            })
            .count();
        let percent = if total == 0 {
            0
        } else {
            u8::try_from((answered * 100 + total / 2) / total).unwrap_or(100)
        };

        Some(SectionProgress {
            dimension_id: dimension.id,
            answered,
            total,
            percent,
        })
    }

    /// Moves to the next dimension, or to the results once the last one is
    /// complete. Every question of the current dimension needs an answer,
    /// "No aplica" included.
    pub fn next_section(
        &mut self,
        catalog: &AssessmentCatalog,
    ) -> Result<AssessmentStep, SessionError> {
        self.expect_step(AssessmentStep::Assessment)?;
        let progress = self
            .section_progress(catalog)
            .ok_or(SessionError::NoSections)?;
        if !progress.is_complete() {
            return Err(SessionError::SectionIncomplete {
                dimension: progress.dimension_id,
                answered: progress.answered,
                total: progress.total,
            });
        }

        if self.current_section_index + 1 < catalog.dimensions().len() {
            self.current_section_index += 1;
        } else {
            self.step = AssessmentStep::Results;
        }
        Ok(self.step)
    }

    /// No-op on the first dimension.
    pub fn previous_section(&mut self) -> Result<(), SessionError> {
        self.expect_step(AssessmentStep::Assessment)?;
        self.current_section_index = self.current_section_index.saturating_sub(1);
        Ok(())
    }

    pub fn results(&self, engine: &ScoringEngine<'_>) -> Result<AssessmentResult, SessionError> {
        self.expect_step(AssessmentStep::Results)?;
        Ok(engine.assess(&self.answers)?)
    }

    pub fn results_with_benchmark<B>(
        &self,
        engine: &ScoringEngine<'_>,
        benchmark: &mut B,
    ) -> Result<AssessmentResult, SessionError>
    where
        B: BenchmarkSource + ?Sized,
    {
        self.expect_step(AssessmentStep::Results)?;
        Ok(engine.assess_with_benchmark(&self.answers, benchmark)?)
    }

    pub fn report(
        &self,
        engine: &ScoringEngine<'_>,
        generated_on: NaiveDate,
    ) -> Result<AssessmentReport, SessionError> {
        let result = self.results(engine)?;
        Ok(AssessmentReport::build(
            &result,
            Some(self.company.clone()),
            generated_on,
        ))
    }

    /// Checks a loaded document against the active catalog.
    pub fn validate(&self, catalog: &AssessmentCatalog) -> Result<(), SessionError> {
        let sections = catalog.dimensions().len();
        if self.step == AssessmentStep::Assessment && self.current_section_index >= sections {
            return Err(SessionError::SectionOutOfRange {
                index: self.current_section_index,
                sections,
            });
        }
        Ok(())
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn expect_step(&self, expected: AssessmentStep) -> Result<(), SessionError> {
        if self.step == expected {
            Ok(())
        } else {
            Err(SessionError::InvalidStep {
                expected,
                actual: self.step,
            })
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("action requires step '{expected}' but the session is at '{actual}'")]
    InvalidStep {
        expected: AssessmentStep,
        actual: AssessmentStep,
    },
    #[error("company profile is missing: {}", .0.join(", "))]
    IncompleteCompanyProfile(Vec<&'static str>),
    #[error("question '{0}' is not part of the catalog")]
    UnknownQuestion(String),
    #[error("answer {value} for question '{question_id}' is not a recognized option")]
    UnrecognizedAnswerValue { question_id: String, value: f64 },
    #[error("dimension '{dimension}' has {answered} of {total} questions answered")]
    SectionIncomplete {
        dimension: DimensionId,
        answered: usize,
        total: usize,
    },
    #[error("catalog has no dimensions to walk through")]
    NoSections,
    #[error("section {index} is out of range for a catalog with {sections} dimensions")]
    SectionOutOfRange { index: usize, sections: usize },
    #[error(transparent)]
    Scoring(#[from] ScoringError),
}
