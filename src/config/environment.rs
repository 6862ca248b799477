// ABOUTME: Environment configuration for analyzer settings, locale, and profile overrides
// ABOUTME: Parses FORM_* variables with defaults and rejects out-of-range values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration
//!
//! All settings come from environment variables; there is no config file
//! apart from the optional JSON profile override named by
//! `FORM_PROFILES_PATH`.

use anyhow::{anyhow, Context, Result};
use pierre_form_engine::{AnalyzerSettings, Locale, ProfileCatalog};
use pierre_pose_core::constants::env_config;
use serde::{Deserialize, Serialize};
use std::env;
use std::error::Error as StdError;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::{info, warn};

/// Environment type for logging and other configurations
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Test runs
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Complete form coach configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoachConfig {
    /// Deployment environment
    pub environment: Environment,
    /// Settings shared by every analyzer
    pub settings: AnalyzerSettings,
    /// JSON file overriding built-in exercise profiles
    pub profiles_path: Option<PathBuf>,
}

impl Default for CoachConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            settings: AnalyzerSettings::default(),
            profiles_path: None,
        }
    }
}

impl CoachConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a variable cannot be parsed or a value is out of range
    pub fn from_env() -> Result<Self> {
        let defaults = AnalyzerSettings::default();

        let locale = match env::var(env_config::LOCALE) {
            Ok(value) => value
                .parse::<Locale>()
                .map_err(|e| anyhow!("Invalid {} value: {e}", env_config::LOCALE))?,
            Err(_) => defaults.locale,
        };

        let settings = AnalyzerSettings {
            passing_score: env_parse(env_config::PASSING_SCORE, defaults.passing_score)?,
            min_feature_confidence: env_parse(
                env_config::MIN_FEATURE_CONFIDENCE,
                defaults.min_feature_confidence,
            )?,
            visibility_threshold: env_parse(
                env_config::VISIBILITY_THRESHOLD,
                defaults.visibility_threshold,
            )?,
            frame_confidence_floor: env_parse(
                env_config::FRAME_CONFIDENCE_FLOOR,
                defaults.frame_confidence_floor,
            )?,
            frame_interval_ms: env_parse(
                env_config::FRAME_INTERVAL_MS,
                defaults.frame_interval_ms,
            )?,
            reps_per_set: env_parse_optional(env_config::REPS_PER_SET)?,
            locale,
        };

        let config = Self {
            environment: env::var(env_config::ENVIRONMENT)
                .map(|value| Environment::from_str_or_default(&value))
                .unwrap_or_default(),
            settings,
            profiles_path: env::var(env_config::PROFILES_PATH)
                .ok()
                .filter(|path| !path.trim().is_empty())
                .map(PathBuf::from),
        };

        config.validate()?;
        info!("Configuration loaded successfully");
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error describing the first out-of-range value
    pub fn validate(&self) -> Result<()> {
        self.settings
            .validate()
            .context("Invalid analyzer settings")?;
        if self.settings.frame_confidence_floor < f64::EPSILON {
            warn!("Frame confidence floor is zero; every frame will drive rep counting");
        }
        Ok(())
    }

    /// Profile catalog: built-ins plus the override file when one is configured
    ///
    /// # Errors
    ///
    /// Returns an error if the override file cannot be read or fails validation
    pub fn catalog(&self) -> Result<ProfileCatalog> {
        match &self.profiles_path {
            Some(path) => ProfileCatalog::from_path(path).with_context(|| {
                format!("Failed to load exercise profiles from {}", path.display())
            }),
            None => Ok(ProfileCatalog::builtin()),
        }
    }

    /// Configuration summary for logs and the CLI
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Pierre Form Coach Configuration:\n\
             - Environment: {}\n\
             - Passing Score: {}\n\
             - Min Feature Confidence: {}\n\
             - Visibility Threshold: {}\n\
             - Frame Confidence Floor: {}\n\
             - Frame Interval: {} ms\n\
             - Reps Per Set: {}\n\
             - Locale: {}\n\
             - Profile Overrides: {}",
            self.environment,
            self.settings.passing_score,
            self.settings.min_feature_confidence,
            self.settings.visibility_threshold,
            self.settings.frame_confidence_floor,
            self.settings.frame_interval_ms,
            self.settings
                .reps_per_set
                .map_or_else(|| "Disabled".to_owned(), |reps| reps.to_string()),
            self.settings.locale,
            self.profiles_path
                .as_ref()
                .map_or_else(|| "None".to_owned(), |path| path.display().to_string()),
        )
    }
}

/// Parse an environment variable, falling back to `default` when unset
fn env_parse<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: StdError + Send + Sync + 'static,
{
    env::var(key).map_or(Ok(default), |raw| {
        raw.trim()
            .parse()
            .with_context(|| format!("Invalid {key} value: {raw}"))
    })
}

/// Parse an optional environment variable; unset or empty means `None`
fn env_parse_optional<T>(key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: StdError + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map(Some)
            .with_context(|| format!("Invalid {key} value: {raw}")),
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_parsing() {
        assert_eq!(
            Environment::from_str_or_default("PROD"),
            Environment::Production
        );
        assert_eq!(Environment::from_str_or_default("test"), Environment::Testing);
        assert_eq!(
            Environment::from_str_or_default("staging"),
            Environment::Development
        );
    }

    #[test]
    fn test_summary_mentions_settings() {
        let config = CoachConfig::default();
        let summary = config.summary();
        assert!(summary.contains("Passing Score: 70"));
        assert!(summary.contains("Reps Per Set: Disabled"));
    }
}
