//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading appraisal
//! configurations from YAML files.

use rust_decimal::Decimal;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::RatingKey;

use super::types::{AppraisalConfig, CategoryWeights, RatingKeysConfig, ScoringConfig};

/// Loads and provides access to appraisal configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory
/// and provides methods to query category weights and rating bands.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/appraisal/
/// ├── scoring.yaml      # Category weights
/// └── rating_keys.yaml  # Rating scale bands
/// ```
///
/// # Example
///
/// ```no_run
/// use appraisal_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/appraisal").unwrap();
/// println!("Strategic weight: {}", loader.category_weights().strategic);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: AppraisalConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/appraisal")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - The category weights do not sum to 1
    ///
    /// # Example
    ///
    /// ```no_run
    /// use appraisal_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/appraisal")?;
    /// # Ok::<(), appraisal_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let scoring = Self::load_yaml::<ScoringConfig>(&path.join("scoring.yaml"))?;
        let rating_keys = Self::load_yaml::<RatingKeysConfig>(&path.join("rating_keys.yaml"))?;

        let config = AppraisalConfig::new(scoring.category_weights, rating_keys.rating_keys)?;

        Ok(Self { config })
    }

    /// Wraps an already-built configuration.
    pub fn from_config(config: AppraisalConfig) -> Self {
        Self { config }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying appraisal configuration.
    pub fn config(&self) -> &AppraisalConfig {
        &self.config
    }

    /// Returns the category weights.
    pub fn category_weights(&self) -> &CategoryWeights {
        self.config.category_weights()
    }

    /// Gets the rating band description for a rating, if any band matches.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use appraisal_engine::config::ConfigLoader;
    /// use rust_decimal::Decimal;
    ///
    /// let loader = ConfigLoader::load("./config/appraisal")?;
    /// if let Some(band) = loader.rating_band(Decimal::new(85, 2)) {
    ///     println!("Band: {}", band.description);
    /// }
    /// # Ok::<(), appraisal_engine::error::EngineError>(())
    /// ```
    pub fn rating_band(&self, rating: Decimal) -> Option<&RatingKey> {
        self.config.rating_band(rating)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn config_path() -> &'static str {
        "./config/appraisal"
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
    }

    #[test]
    fn test_category_weights_loaded_correctly() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        assert_eq!(loader.category_weights().strategic, dec("0.70"));
        assert_eq!(loader.category_weights().soft_skill, dec("0.30"));
    }

    #[test]
    fn test_rating_keys_loaded_in_order() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let keys = loader.config().rating_keys();

        assert_eq!(keys.len(), 5);
        assert_eq!(keys[0].point_scale_min, 0);
        assert_eq!(keys[4].point_scale_max, 100);
    }

    #[test]
    fn test_rating_band_for_full_rating() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        let band = loader.rating_band(dec("1.00")).unwrap();
        assert_eq!(band.description, "Outstanding");
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");
        assert!(result.is_err());

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("scoring.yaml"));
            }
            _ => panic!("Expected ConfigNotFound error"),
        }
    }

    #[test]
    fn test_default_loader_uses_seventy_thirty() {
        let loader = ConfigLoader::default();
        assert_eq!(loader.category_weights().strategic, dec("0.7"));
        assert!(loader.rating_band(dec("0.5")).is_none());
    }
}
