//! Finder decision-tree configuration

use serde::Deserialize;
use std::fs;
use tracing::info;

use super::error::{ConfigError, ValidationError};
use crate::domain::finder::{default_finder_config, FinderConfig};

/// Which decision tree to run and how many results to aim for
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FinderSettings {
    /// YAML file holding a finder configuration; built-in tree when absent
    pub config_path: Option<String>,

    pub min_results: Option<usize>,
    pub ideal_results: Option<usize>,
    pub max_results: Option<usize>,
}

impl FinderSettings {
    /// Validate threshold overrides that are present
    pub fn validate(&self) -> Result<(), ValidationError> {
        let ordered = |low: Option<usize>, high: Option<usize>| match (low, high) {
            (Some(low), Some(high)) => low <= high,
            _ => true,
        };
        if !ordered(self.min_results, self.ideal_results)
            || !ordered(self.ideal_results, self.max_results)
            || !ordered(self.min_results, self.max_results)
        {
            return Err(ValidationError::InvalidThresholds);
        }
        Ok(())
    }

    /// Build the finder configuration: the YAML file or the built-in tree,
    /// with threshold overrides applied on top.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::FinderConfig` if the file cannot be read or does
    /// not describe a valid decision tree.
    pub fn load_finder_config(&self) -> Result<FinderConfig, ConfigError> {
        let mut config = match &self.config_path {
            Some(path) => {
                let yaml = fs::read_to_string(path)
                    .map_err(|e| ConfigError::FinderConfig(format!("{}: {}", path, e)))?;
                FinderConfig::from_yaml_str(&yaml)
                    .map_err(|e| ConfigError::FinderConfig(format!("{}: {}", path, e)))?
            }
            None => default_finder_config(),
        };

        let thresholds = &mut config.thresholds;
        if let Some(min) = self.min_results {
            thresholds.min_results = min;
        }
        if let Some(ideal) = self.ideal_results {
            thresholds.ideal_results = ideal;
        }
        if let Some(max) = self.max_results {
            thresholds.max_results = max;
        }
        config
            .validate()
            .map_err(|e| ConfigError::FinderConfig(e.to_string()))?;

        info!(
            version = %config.version,
            flows = config.flows.len(),
            ideal_results = config.thresholds.ideal_results,
            "Loaded finder configuration"
        );
        Ok(config)
    }
}
