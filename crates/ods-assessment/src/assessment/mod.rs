pub mod answers;
pub mod benchmark;
pub mod catalog;
pub mod company;
pub mod domain;
pub mod report;
pub mod scoring;
pub mod session;
pub mod store;

pub use answers::{AnswerImportError, AnswerLookup, AnswerSet};
pub use benchmark::{BenchmarkSource, FixedBenchmark, SimulatedBenchmark};
pub use catalog::{AssessmentCatalog, CatalogDefinition, CatalogError};
pub use company::CompanyProfile;
pub use domain::{
    AnswerOption, AnswerValue, Dimension, DimensionIcon, DimensionId, MaturityTier, Question,
    TierBand,
};
pub use report::AssessmentReport;
pub use scoring::{
    AssessmentResult, DimensionScore, DontKnowPolicy, GlobalScore, ImprovementOpportunity,
    ScoringConfig, ScoringEngine, ScoringError,
};
pub use session::{AssessmentSession, AssessmentStep, SectionProgress, SessionError};
pub use store::{InMemorySessionStore, JsonFileSessionStore, SessionStore, StoreError};
