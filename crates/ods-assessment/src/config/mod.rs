use crate::assessment::catalog::{AssessmentCatalog, CatalogError};
use crate::assessment::scoring::{DontKnowPolicy, ScoringConfig};
use crate::assessment::store::DEFAULT_SESSION_FILE;
use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub assessment: AssessmentConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            assessment: AssessmentConfig::from_env()?,
        })
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Catalog source, scoring policy and answer storage.
#[derive(Debug, Clone)]
pub struct AssessmentConfig {
    pub catalog_path: Option<PathBuf>,
    pub scoring: ScoringConfig,
    pub benchmark_seed: Option<u64>,
    pub answers_path: PathBuf,
}

impl Default for AssessmentConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            scoring: ScoringConfig::default(),
            benchmark_seed: None,
            answers_path: PathBuf::from(DEFAULT_SESSION_FILE),
        }
    }
}

impl AssessmentConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let catalog_path = env::var("ODS_CATALOG_PATH")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);

        let dont_know = match env::var("ODS_DONT_KNOW_POLICY") {
            Ok(raw) => DontKnowPolicy::parse(&raw)
                .ok_or(ConfigError::InvalidDontKnowPolicy(raw))?,
            Err(_) => DontKnowPolicy::default(),
        };

        let benchmark_seed = match env::var("ODS_BENCHMARK_SEED") {
            Ok(raw) => Some(
                raw.trim()
                    .parse::<u64>()
                    .map_err(|_| ConfigError::InvalidBenchmarkSeed(raw))?,
            ),
            Err(_) => None,
        };

        let answers_path = env::var("ODS_ANSWERS_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_SESSION_FILE));

        Ok(Self {
            catalog_path,
            scoring: ScoringConfig { dont_know },
            benchmark_seed,
            answers_path,
        })
    }

    /// The configured catalog file, or the built-in catalog.
    pub fn catalog(&self) -> Result<AssessmentCatalog, CatalogError> {
        match &self.catalog_path {
            Some(path) => AssessmentCatalog::from_path(path),
            None => Ok(AssessmentCatalog::standard()),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidDontKnowPolicy(String),
    InvalidBenchmarkSeed(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidDontKnowPolicy(value) => write!(
                f,
                "ODS_DONT_KNOW_POLICY must be 'zero' or 'exclude', got '{value}'"
            ),
            ConfigError::InvalidBenchmarkSeed(value) => {
                write!(f, "ODS_BENCHMARK_SEED must be a valid u64, got '{value}'")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::InvalidPort
            | ConfigError::InvalidDontKnowPolicy(_)
            | ConfigError::InvalidBenchmarkSeed(_) => None,
        }
    }
}
