use chrono::NaiveDate;
use metrics_exporter_prometheus::PrometheusHandle;
use ods_assessment::assessment::{
    AssessmentCatalog, DimensionId, ScoringConfig, SimulatedBenchmark,
};
use ods_assessment::config::AssessmentConfig;
use ods_assessment::error::AppError;
use serde::Deserialize;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Shared by every scoring request. The catalog is validated once at startup.
#[derive(Clone)]
pub(crate) struct ScoringState {
    pub(crate) catalog: Arc<AssessmentCatalog>,
    pub(crate) scoring: ScoringConfig,
    pub(crate) benchmark_seed: Option<u64>,
}

impl ScoringState {
    pub(crate) fn from_config(config: &AssessmentConfig) -> Result<Self, AppError> {
        Ok(Self {
            catalog: Arc::new(config.catalog()?),
            scoring: config.scoring,
            benchmark_seed: config.benchmark_seed,
        })
    }

    #[cfg(test)]
    pub(crate) fn standard() -> Self {
        Self {
            catalog: Arc::new(AssessmentCatalog::standard()),
            scoring: ScoringConfig::default(),
            benchmark_seed: None,
        }
    }
}

/// Seeded when a seed is known, otherwise drawn from entropy.
pub(crate) fn benchmark_source(seed: Option<u64>) -> SimulatedBenchmark {
    match seed {
        Some(seed) => SimulatedBenchmark::seeded(seed),
        None => SimulatedBenchmark::from_entropy(),
    }
}

pub(crate) fn parse_dimension(raw: &str) -> Result<DimensionId, String> {
    DimensionId::parse(raw).ok_or_else(|| {
        let known: Vec<&str> = DimensionId::ordered().iter().map(|id| id.key()).collect();
        format!("unknown dimension '{raw}' (expected one of {})", known.join(", "))
    })
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

pub(crate) fn deserialize_optional_date<'de, D>(
    deserializer: D,
) -> Result<Option<NaiveDate>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    opt.map(|value| parse_date(&value).map_err(serde::de::Error::custom))
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ods_assessment::assessment::BenchmarkSource;

    #[test]
    fn seeded_benchmark_source_repeats() {
        let mut first = benchmark_source(Some(11));
        let mut second = benchmark_source(Some(11));
        for id in DimensionId::ordered() {
            assert_eq!(first.sector_average(id), second.sector_average(id));
        }
    }

    #[test]
    fn parse_date_reports_bad_input() {
        assert!(parse_date("2026-02-30").is_err());
        assert_eq!(
            parse_date(" 2026-03-02 "),
            Ok(NaiveDate::from_ymd_opt(2026, 3, 2).expect("valid date"))
        );
    }

    #[test]
    fn parse_dimension_lists_known_keys() {
        assert_eq!(parse_dimension("Planeta"), Ok(DimensionId::Planeta));
        let err = parse_dimension("energia").expect_err("unknown");
        assert!(err.contains("gestion"));
    }
}
