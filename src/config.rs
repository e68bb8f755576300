//! Configuration loading from TOML.
//!
//! Reads `config.toml` and deserializes into strongly-typed structs.
//! Every section has defaults, so an empty file is a valid config. The
//! dataset path can be overridden at runtime via `MATCHUP_DATASET`.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;

use crate::types::{MatchupError, Metric, ModeKind};

/// Environment variable that overrides `[dataset] path`.
pub const DATASET_ENV: &str = "MATCHUP_DATASET";

/// Top-level application configuration.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub dataset: DatasetConfig,
    #[serde(default)]
    pub rating: RatingConfig,
    #[serde(default)]
    pub dashboard: DashboardConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatasetConfig {
    pub path: String,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            path: "NFL_Combined_2025.csv".to_string(),
        }
    }
}

/// Defaults and bounds for the rating controls.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct RatingConfig {
    /// "single" or "blend"
    pub default_mode: String,
    /// Column name used when single mode is picked without a metric.
    pub default_metric: String,
    pub offense_weight: f64,
    pub defense_weight: f64,
    /// Slider bounds for both blend weights.
    pub weight_min: f64,
    pub weight_max: f64,
    pub weight_step: f64,
}

impl Default for RatingConfig {
    fn default() -> Self {
        Self {
            default_mode: "single".to_string(),
            default_metric: "PSR_POINTS".to_string(),
            offense_weight: 1.0,
            defense_weight: 1.0,
            weight_min: 0.0,
            weight_max: 2.0,
            weight_step: 0.1,
        }
    }
}

impl RatingConfig {
    /// Reject a blend weight outside the slider range.
    pub fn check_weight(&self, name: &'static str, value: f64) -> Result<(), MatchupError> {
        if value.is_finite() && (self.weight_min..=self.weight_max).contains(&value) {
            Ok(())
        } else {
            Err(MatchupError::WeightOutOfRange {
                name,
                value,
                min: self.weight_min,
                max: self.weight_max,
            })
        }
    }

    /// Parsed default metric.
    pub fn default_metric(&self) -> Result<Metric, MatchupError> {
        self.default_metric.parse()
    }

    fn validate(&self) -> Result<(), MatchupError> {
        self.default_mode.parse::<ModeKind>()?;
        self.default_metric()?;
        if !(self.weight_min <= self.weight_max) {
            return Err(MatchupError::Config(format!(
                "weight_min {} is greater than weight_max {}",
                self.weight_min, self.weight_max
            )));
        }
        if !(self.weight_step > 0.0) {
            return Err(MatchupError::Config(format!(
                "weight_step must be positive, got {}",
                self.weight_step
            )));
        }
        self.check_weight("offense", self.offense_weight)?;
        self.check_weight("defense", self.defense_weight)?;
        Ok(())
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct DashboardConfig {
    pub host: String,
    pub port: u16,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8501,
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file and validate it.
    pub fn load(path: &str) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {path}"))?;
        let config = Self::from_toml(&contents)
            .with_context(|| format!("Failed to parse config file: {path}"))?;
        Ok(config)
    }

    /// Parse and validate configuration from TOML text.
    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: AppConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.rating.validate().context("Invalid [rating] section")?;
        Ok(())
    }

    /// Dataset path after applying the `MATCHUP_DATASET` override.
    pub fn dataset_path(&self) -> String {
        std::env::var(DATASET_ENV).unwrap_or_else(|_| self.dataset.path.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_config() {
        // This test requires config.toml to be in the working directory.
        let result = AppConfig::load("config.toml");
        if let Ok(cfg) = result {
            assert!(!cfg.dataset.path.is_empty());
            assert!(cfg.dashboard.port > 0);
            assert!(cfg.rating.weight_min <= cfg.rating.weight_max);
            assert!(cfg.rating.default_metric().is_ok());
        }
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let cfg = AppConfig::from_toml("").unwrap();
        assert_eq!(cfg.dataset.path, "NFL_Combined_2025.csv");
        assert_eq!(cfg.dashboard.port, 8501);
        assert_eq!(cfg.rating.default_metric().unwrap(), Metric::PsrPoints);
        assert_eq!(cfg.rating.weight_max, 2.0);
    }

    #[test]
    fn test_partial_rating_section() {
        let cfg = AppConfig::from_toml(
            r#"
            [rating]
            default_mode = "blend"
            offense_weight = 1.5
            "#,
        )
        .unwrap();
        assert_eq!(cfg.rating.default_mode, "blend");
        assert_eq!(cfg.rating.offense_weight, 1.5);
        assert_eq!(cfg.rating.defense_weight, 1.0);
    }

    #[test]
    fn test_unknown_default_metric_rejected() {
        let err = AppConfig::from_toml("[rating]\ndefault_metric = \"YARDS\"\n").unwrap_err();
        assert!(format!("{err:#}").contains("Field not found: YARDS"));
    }

    #[test]
    fn test_unknown_default_mode_rejected() {
        let err = AppConfig::from_toml("[rating]\ndefault_mode = \"elo\"\n").unwrap_err();
        assert!(format!("{err:#}").contains("Unknown rating mode"));
    }

    #[test]
    fn test_inverted_weight_range_rejected() {
        let err = AppConfig::from_toml("[rating]\nweight_min = 2.0\nweight_max = 1.0\n")
            .unwrap_err();
        assert!(format!("{err:#}").contains("greater than weight_max"));
    }

    #[test]
    fn test_default_weight_outside_range_rejected() {
        let err = AppConfig::from_toml("[rating]\ndefense_weight = 3.0\n").unwrap_err();
        assert!(format!("{err:#}").contains("defense weight 3 is outside"));
    }

    #[test]
    fn test_check_weight_bounds_inclusive() {
        let cfg = RatingConfig::default();
        assert!(cfg.check_weight("offense", 0.0).is_ok());
        assert!(cfg.check_weight("offense", 2.0).is_ok());
        assert!(cfg.check_weight("offense", -0.1).is_err());
        assert!(cfg.check_weight("offense", f64::NAN).is_err());
    }
}
