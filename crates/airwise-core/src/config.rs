//! Configuration for the assistant

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Assistant tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssistantConfig {
    /// Simulated latency before a reply becomes visible
    pub response_delay_ms: u64,

    /// Hours reported by the exercise advice
    pub best_hours_count: usize,

    /// Hours cited by the forecast summary
    pub forecast_windows: usize,
}

impl AssistantConfig {
    pub fn new() -> Self {
        Self {
            response_delay_ms: 1500,
            best_hours_count: 3,
            forecast_windows: 2,
        }
    }

    pub fn response_delay(&self) -> Duration {
        Duration::from_millis(self.response_delay_ms)
    }
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub assistant: AssistantConfig,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a JSON file. Missing keys keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&contents)?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.assistant.best_hours_count == 0 {
            return Err(Error::Config(
                "assistant.best_hours_count must be at least 1".to_string(),
            ));
        }
        if self.assistant.forecast_windows == 0 {
            return Err(Error::Config(
                "assistant.forecast_windows must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
