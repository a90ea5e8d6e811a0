//! Configuration management for the job matcher

use crate::error::{JobMatcherError, Result};
use crate::matching::vocabulary::MatchStrategy;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    pub matching: MatchingConfig,
    pub scoring: ScoringWeights,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchingConfig {
    /// How vocabulary tokens are matched against job text. `substring`
    /// reproduces historical scores; `word_boundary` reduces false positives
    /// on short tokens at the cost of drifting from them.
    pub strategy: MatchStrategy,
}

/// Linear weights for the overall score. The defaults sum to 1.00 and the
/// nice-to-have category intentionally carries no weight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub technical: f64,
    pub soft_skills: f64,
    pub experience: f64,
    pub keywords: f64,
    pub must_have: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            technical: 0.30,
            soft_skills: 0.15,
            experience: 0.25,
            keywords: 0.15,
            must_have: 0.15,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub color_output: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Console,
            detailed: false,
            color_output: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
}

impl Config {
    /// Load the configuration, creating a default file on first run. An
    /// explicit path skips the default lookup and must exist.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(path) => path.to_path_buf(),
            None => Self::config_path(),
        };

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = toml::from_str(&content).map_err(|e| {
                JobMatcherError::Configuration(format!("Failed to parse config: {}", e))
            })?;
            config.validate()?;
            Ok(config)
        } else if path.is_some() {
            Err(JobMatcherError::Configuration(format!(
                "Config file not found: {}",
                config_path.display()
            )))
        } else {
            let config = Self::default();
            config.save()?;
            Ok(config)
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            JobMatcherError::Configuration(format!("Failed to serialize config: {}", e))
        })?;

        std::fs::write(&config_path, content)?;
        Ok(())
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("job-matcher")
            .join("config.toml")
    }

    fn validate(&self) -> Result<()> {
        let weights = [
            self.scoring.technical,
            self.scoring.soft_skills,
            self.scoring.experience,
            self.scoring.keywords,
            self.scoring.must_have,
        ];
        if weights.iter().any(|w| !(0.0..=1.0).contains(w)) {
            return Err(JobMatcherError::Configuration(
                "Scoring weights must lie in [0.0, 1.0]".to_string(),
            ));
        }
        let sum: f64 = weights.iter().sum();
        if (sum - 1.0).abs() > 1e-6 {
            return Err(JobMatcherError::Configuration(format!(
                "Scoring weights must sum to 1.0, got {}",
                sum
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights_sum_to_one() {
        let config = Config::default();
        assert!(config.validate().is_ok());

        let w = &config.scoring;
        let sum = w.technical + w.soft_skills + w.experience + w.keywords + w.must_have;
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_default_strategy_is_substring() {
        assert_eq!(Config::default().matching.strategy, MatchStrategy::Substring);
    }

    #[test]
    fn test_unbalanced_weights_rejected() {
        let mut config = Config::default();
        config.scoring.technical = 0.9;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_round_trips_through_toml() {
        let config = Config::default();
        let serialized = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&serialized).unwrap();
        assert_eq!(parsed.matching.strategy, config.matching.strategy);
        assert_eq!(parsed.scoring.technical, config.scoring.technical);
    }
}
