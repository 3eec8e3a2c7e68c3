use crate::services::feedback::DEFAULT_LIKED_BONUS;
use crate::services::ranking::{MAX_RECOMMENDATIONS, MIN_SCORE_THRESHOLD};
use crate::services::RecommendationRanker;
use serde::Deserialize;
use std::env;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read environment: {0}")]
    Env(#[from] envy::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub service: ServiceConfig,
    pub ranking: RankingConfig,
}

#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub service_name: String,
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Pretty,
}

impl LogFormat {
    fn parse(raw: &str) -> Result<Self, ConfigError> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "pretty" | "text" => Ok(LogFormat::Pretty),
            other => Err(ConfigError::Invalid(format!(
                "LOG_FORMAT must be 'json' or 'pretty', got '{other}'"
            ))),
        }
    }
}

/// Ranking policy, read from `RECOMMENDER_*` variables
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RankingConfig {
    #[serde(default = "default_min_score_threshold")]
    pub min_score_threshold: f64,
    #[serde(default = "default_max_results")]
    pub max_results: usize,
    #[serde(default = "default_liked_bonus")]
    pub liked_bonus: f64,
}

fn default_min_score_threshold() -> f64 {
    MIN_SCORE_THRESHOLD
}

fn default_max_results() -> usize {
    MAX_RECOMMENDATIONS
}

fn default_liked_bonus() -> f64 {
    DEFAULT_LIKED_BONUS
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            min_score_threshold: MIN_SCORE_THRESHOLD,
            max_results: MAX_RECOMMENDATIONS,
            liked_bonus: DEFAULT_LIKED_BONUS,
        }
    }
}

impl RankingConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let config: RankingConfig = envy::prefixed("RECOMMENDER_").from_env()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..1.0).contains(&self.min_score_threshold) {
            return Err(ConfigError::Invalid(format!(
                "RECOMMENDER_MIN_SCORE_THRESHOLD must be in [0, 1), got {}",
                self.min_score_threshold
            )));
        }
        if self.max_results == 0 {
            return Err(ConfigError::Invalid(
                "RECOMMENDER_MAX_RESULTS must be at least 1".to_string(),
            ));
        }
        if !self.liked_bonus.is_finite() || self.liked_bonus < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "RECOMMENDER_LIKED_BONUS must be a non-negative number, got {}",
                self.liked_bonus
            )));
        }
        Ok(())
    }

    pub fn build_ranker(&self) -> RecommendationRanker {
        RecommendationRanker::new()
            .with_min_threshold(self.min_score_threshold)
            .with_max_results(self.max_results)
            .with_liked_bonus(self.liked_bonus)
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Ok(Config {
            service: ServiceConfig {
                service_name: env::var("SERVICE_NAME")
                    .unwrap_or_else(|_| "product-recommender".to_string()),
                log_format: LogFormat::parse(
                    &env::var("LOG_FORMAT").unwrap_or_else(|_| "json".to_string()),
                )?,
            },
            ranking: RankingConfig::from_env()?,
        })
    }
}
