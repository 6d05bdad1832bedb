//! Application configuration

use std::path::Path;
use std::time::Duration;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use serde_with::serde_as;

use crate::errors::LaunchTrackerError;
use crate::links::Platform;
use crate::models::UserLocation;

pub const DEFAULT_BASE_URL: &str = "https://api.spacexdata.com";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub api: ApiConfig,
    /// Fixed device position; absent means location access is denied
    #[serde(default)]
    pub location: Option<UserLocation>,
    #[serde(default)]
    pub platform: Platform,
    /// Show developer diagnostics on the map screen
    #[serde(default)]
    pub debug: bool,
}

#[serde_as]
#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    /// Transport timeout for a single request
    #[serde_as(as = "serde_with::DurationSeconds<u64>")]
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config/default")
    }

    /// Load from the given config file (optional) overlaid with environment
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref().to_string_lossy().into_owned();
        let config = Config::builder()
            .set_default("api.base_url", DEFAULT_BASE_URL)?
            .set_default("api.timeout", DEFAULT_TIMEOUT_SECS)?
            .add_source(File::with_name(&path).required(false))
            .add_source(
                Environment::with_prefix("LAUNCHTRACKER")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl ApiConfig {
    /// Validate configuration parameters
    pub fn validate(&self) -> Result<(), LaunchTrackerError> {
        self.validate_base_url()?;
        self.validate_timeout()?;
        Ok(())
    }

    fn validate_base_url(&self) -> Result<(), LaunchTrackerError> {
        if self.base_url.trim().is_empty() {
            return Err(LaunchTrackerError::ConfigurationError {
                message: "API base URL cannot be empty".to_string(),
            });
        }
        reqwest::Url::parse(&self.base_url).map_err(|e| LaunchTrackerError::ConfigurationError {
            message: format!("Invalid API base URL {}: {}", self.base_url, e),
        })?;
        Ok(())
    }

    fn validate_timeout(&self) -> Result<(), LaunchTrackerError> {
        if self.timeout.is_zero() {
            return Err(LaunchTrackerError::ConfigurationError {
                message: "Timeout must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}
