use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;

/// Banned terms used when no override is configured. Each one signals that a
/// listing expects prior experience.
pub const DEFAULT_BANNED_TERMS: &[&str] = &[
    "experience",
    "experienced",
    "years",
    "yrs",
    "senior",
    "expert",
    "seasoned",
    "veteran",
    "proficient",
];

pub const DEFAULT_MAX_DISTANCE: usize = 2;

/// Distinguishes runtime behavior for different stages of the tool.
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
    pub screening: ScreeningConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let banned_terms = match env::var("SCREENING_BANNED_TERMS") {
            Ok(raw) => {
                let terms = split_terms(&raw);
                if terms.is_empty() {
                    return Err(ConfigError::EmptyBannedTerms);
                }
                terms
            }
            Err(_) => default_banned_terms(),
        };

        let max_distance = match env::var("SCREENING_MAX_DISTANCE") {
            Ok(raw) => raw
                .trim()
                .parse::<usize>()
                .map_err(|_| ConfigError::InvalidMaxDistance { value: raw })?,
            Err(_) => DEFAULT_MAX_DISTANCE,
        };

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            screening: ScreeningConfig {
                banned_terms,
                max_distance,
            },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

/// Policy dial for the banned-term screener.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreeningConfig {
    #[serde(default = "default_banned_terms")]
    pub banned_terms: Vec<String>,
    /// Largest edit distance still treated as a match.
    #[serde(default = "default_max_distance")]
    pub max_distance: usize,
}

impl Default for ScreeningConfig {
    fn default() -> Self {
        Self {
            banned_terms: default_banned_terms(),
            max_distance: DEFAULT_MAX_DISTANCE,
        }
    }
}

fn default_banned_terms() -> Vec<String> {
    DEFAULT_BANNED_TERMS
        .iter()
        .map(|term| term.to_string())
        .collect()
}

fn default_max_distance() -> usize {
    DEFAULT_MAX_DISTANCE
}

fn split_terms(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|term| !term.is_empty())
        .map(str::to_string)
        .collect()
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidMaxDistance { value: String },
    EmptyBannedTerms,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidMaxDistance { value } => write!(
                f,
                "SCREENING_MAX_DISTANCE must be a non-negative integer (found '{value}')"
            ),
            ConfigError::EmptyBannedTerms => {
                write!(f, "SCREENING_BANNED_TERMS must list at least one term")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
