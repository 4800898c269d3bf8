//! Configuration module

use std::env;
use std::path::PathBuf;

use sentinel_core::constants;
use sentinel_core::logic::alert::Audience;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,

    /// Threshold used when a request omits one
    pub default_threshold: f64,

    /// Audience used when a request omits one
    pub default_audience: Audience,

    /// Alert store directory; `None` keeps history in memory only
    pub store_dir: Option<PathBuf>,

    /// Environment (development, production)
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let persist = env::var("SENTINEL_PERSIST")
            .map(|s| s.to_lowercase() != "false" && s != "0")
            .unwrap_or(true);

        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),

            // Out-of-range values fall back to the built-in default
            default_threshold: constants::get_alert_threshold(),

            default_audience: constants::get_audience(),

            store_dir: persist.then(constants::get_store_dir),

            environment: env::var("ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string()),
        }
    }

    /// In-memory configuration for tests
    #[cfg(test)]
    pub fn for_tests() -> Self {
        Self {
            port: 0,
            default_threshold: 75.0,
            default_audience: Audience::Researchers,
            store_dir: None,
            environment: "test".to_string(),
        }
    }

    /// Threshold for a request: the requested one, else the configured
    /// default when that lies within 0-100, else the built-in default
    pub fn effective_threshold(&self, requested: Option<f64>) -> f64 {
        requested.unwrap_or_else(|| constants::threshold_or_default(Some(self.default_threshold)))
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}
