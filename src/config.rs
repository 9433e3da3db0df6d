use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::core::DEFAULT_SCORE_THRESHOLD;
use crate::models::ScoringWeights;

/// Application configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Settings {
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    #[serde(default = "default_score_threshold")]
    pub score_threshold: u32,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            score_threshold: default_score_threshold(),
        }
    }
}

fn default_score_threshold() -> u32 {
    DEFAULT_SCORE_THRESHOLD
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_base_points")]
    pub base: u32,
    #[serde(default = "default_budget_points")]
    pub budget: u32,
    #[serde(default = "default_location_exact_points")]
    pub location_exact: u32,
    #[serde(default = "default_location_main_points")]
    pub location_main: u32,
    #[serde(default = "default_configuration_points")]
    pub configuration: u32,
    #[serde(default = "default_size_points")]
    pub size: u32,
    #[serde(default = "default_rent_budget_tolerance")]
    pub rent_budget_tolerance: f64,
    #[serde(default = "default_buy_budget_tolerance")]
    pub buy_budget_tolerance: f64,
    #[serde(default = "default_size_tolerance")]
    pub size_tolerance: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            base: default_base_points(),
            budget: default_budget_points(),
            location_exact: default_location_exact_points(),
            location_main: default_location_main_points(),
            configuration: default_configuration_points(),
            size: default_size_points(),
            rent_budget_tolerance: default_rent_budget_tolerance(),
            buy_budget_tolerance: default_buy_budget_tolerance(),
            size_tolerance: default_size_tolerance(),
        }
    }
}

fn default_base_points() -> u32 { 40 }
fn default_budget_points() -> u32 { 25 }
fn default_location_exact_points() -> u32 { 20 }
fn default_location_main_points() -> u32 { 15 }
fn default_configuration_points() -> u32 { 10 }
fn default_size_points() -> u32 { 5 }
fn default_rent_budget_tolerance() -> f64 { 1.15 }
fn default_buy_budget_tolerance() -> f64 { 1.10 }
fn default_size_tolerance() -> f64 { 1.15 }

impl From<WeightsConfig> for ScoringWeights {
    fn from(config: WeightsConfig) -> Self {
        Self {
            base: config.base,
            budget: config.budget,
            location_exact: config.location_exact,
            location_main: config.location_main,
            configuration: config.configuration,
            size: config.size,
            rent_budget_tolerance: config.rent_budget_tolerance,
            buy_budget_tolerance: config.buy_budget_tolerance,
            size_tolerance: config.size_tolerance,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Environment variables (prefixed with PROPMATCH_)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Add default config file
            .add_source(File::with_name("config/default").required(false))
            // Add local config file (for development overrides)
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables (prefixed with PROPMATCH_)
            // e.g., PROPMATCH_MATCHING__SCORE_THRESHOLD -> matching.score_threshold
            .add_source(
                Environment::with_prefix("PROPMATCH")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("PROPMATCH")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Build a matcher from the configured weights and threshold.
    pub fn matcher(&self) -> crate::core::Matcher {
        crate::core::Matcher::new(self.scoring.weights.clone().into())
            .with_score_threshold(self.matching.score_threshold)
    }
}

/// Install the global tracing subscriber for the embedding application.
///
/// Safe to call more than once; later calls are no-ops.
pub fn init_logging(settings: &LoggingSettings) {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_new(&settings.level)
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_level(true);

    if settings.format == "pretty" {
        let _ = subscriber.pretty().try_init();
    } else {
        let _ = subscriber.try_init();
    }
}
