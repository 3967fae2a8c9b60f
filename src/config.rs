/// Application configuration
///
/// Settings are read from an optional JSON file in the user's config
/// directory:
/// - Linux: ~/.config/catalog-browser/config.json
/// - macOS: ~/Library/Application Support/catalog-browser/config.json
/// - Windows: %APPDATA%\catalog-browser\config.json
///
/// Every field has a default, so a partial file (or none at all) is fine.
/// `CATALOG_BROWSER_ENDPOINT` overrides the endpoint from the file.
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

use crate::error::ConfigError;
use crate::state::price::SliderBounds;

const ENDPOINT_ENV: &str = "CATALOG_BROWSER_ENDPOINT";

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// URL returning a JSON array of products
    pub endpoint: String,
    /// Upper bound on any single request, in seconds
    pub request_timeout_secs: u64,
    /// Lower bound of the price slider
    pub price_min: f64,
    /// Upper bound of the price slider
    pub price_max: f64,
    /// Minimum distance kept between the two price endpoints
    pub min_gap: f64,
    /// Card thumbnails are downsized to fit a square of this size
    pub thumbnail_size: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: "https://fakestoreapi.com/products".to_string(),
            request_timeout_secs: 15,
            price_min: 0.0,
            price_max: 200.0,
            min_gap: 10.0,
            thumbnail_size: 256,
        }
    }
}

impl Config {
    /// Load, override from the environment, and validate
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match Self::config_path() {
            Some(path) if path.exists() => {
                let json = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
                    path: path.clone(),
                    source,
                })?;
                info!(path = %path.display(), "loaded configuration file");
                Self::from_json(&json)?
            }
            _ => Self::default(),
        };

        config.apply_endpoint_override(std::env::var(ENDPOINT_ENV).ok());
        config.validate()?;
        Ok(config)
    }

    /// Parse from a JSON document; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Where the config file is expected to live
    fn config_path() -> Option<PathBuf> {
        let mut path = dirs::config_dir().or_else(dirs::home_dir)?;
        path.push("catalog-browser");
        path.push("config.json");
        Some(path)
    }

    pub fn apply_endpoint_override(&mut self, endpoint: Option<String>) {
        if let Some(endpoint) = endpoint.filter(|e| !e.trim().is_empty()) {
            self.endpoint = endpoint;
        }
    }

    /// Reject settings the slider invariant cannot hold under
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.endpoint.trim().is_empty() {
            return Err(ConfigError::Invalid("endpoint is empty".to_string()));
        }
        if !self.price_min.is_finite() || !self.price_max.is_finite() || !self.min_gap.is_finite() {
            return Err(ConfigError::Invalid("price settings must be finite".to_string()));
        }
        if self.price_min >= self.price_max {
            return Err(ConfigError::Invalid(format!(
                "price_min ({}) must be below price_max ({})",
                self.price_min, self.price_max
            )));
        }
        if self.min_gap < 0.0 || self.min_gap > self.price_max - self.price_min {
            return Err(ConfigError::Invalid(format!(
                "min_gap ({}) must fit within the price span",
                self.min_gap
            )));
        }
        if self.thumbnail_size == 0 {
            return Err(ConfigError::Invalid("thumbnail_size must be positive".to_string()));
        }
        Ok(())
    }

    pub fn slider_bounds(&self) -> SliderBounds {
        SliderBounds {
            min: self.price_min,
            max: self.price_max,
            min_gap: self.min_gap,
            ..SliderBounds::default()
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
