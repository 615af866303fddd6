//! Evaluator configuration management
//!
//! Handles loading evaluation limits from defaults, TOML files, and
//! environment variables.

use serde::Deserialize;
use std::path::Path;

use crate::lazy::guard;
use crate::types::ConfigurationError;

/// Environment variable overriding [`EvalConfig::max_depth`].
pub const MAX_DEPTH_ENV: &str = "PRICER_EVAL_MAX_DEPTH";

/// Default limit on nested attribute reads.
pub const DEFAULT_MAX_DEPTH: usize = 1024;

/// Evaluation configuration.
///
/// | Parameter | Default | Description |
/// |-----------|---------|-------------|
/// | `max_depth` | 1024 | Nested attribute reads allowed before `DepthExceeded` |
///
/// # Examples
///
/// ```
/// use pricer_core::config::EvalConfig;
///
/// let config = EvalConfig::default().with_max_depth(64);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.max_depth, 64);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EvalConfig {
    /// Maximum nesting of attribute reads on one thread
    pub max_depth: usize,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl EvalConfig {
    /// Create a new EvalConfig with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the depth limit.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigurationError> {
        let mut config = Self::default();

        if let Ok(depth) = std::env::var(MAX_DEPTH_ENV) {
            config.max_depth = depth.trim().parse().map_err(|_| {
                ConfigurationError::InvalidConfig(format!(
                    "{} must be a positive integer, got '{}'",
                    MAX_DEPTH_ENV, depth
                ))
            })?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigurationError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigurationError::FileError(format!("Failed to read config file: {}", e))
        })?;

        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigurationError> {
        let config: EvalConfig = toml::from_str(content)
            .map_err(|e| ConfigurationError::FileError(format!("Failed to parse TOML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.max_depth == 0 {
            return Err(ConfigurationError::InvalidConfig(
                "max_depth must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Apply the limits to attribute reads on the current thread.
    pub fn install(&self) -> Result<(), ConfigurationError> {
        self.validate()?;
        guard::set_max_depth(self.max_depth);
        tracing::debug!(max_depth = self.max_depth, "Evaluation config installed");
        Ok(())
    }
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. Environment variables
/// 2. Config file
/// 3. Default values
pub fn build_config(config_file: Option<&Path>) -> Result<EvalConfig, ConfigurationError> {
    let mut config = match config_file {
        Some(path) => EvalConfig::from_file(path)?,
        None => EvalConfig::default(),
    };

    if std::env::var(MAX_DEPTH_ENV).is_ok() {
        config.max_depth = EvalConfig::from_env()?.max_depth;
    }

    config.validate()?;
    Ok(config)
}
