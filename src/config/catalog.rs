//! Catalog source configuration

use serde::Deserialize;
use std::path::Path;

use super::error::ValidationError;

/// Where the technique catalog is read from
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    /// Path of the JSON array of techniques
    pub path: String,
}

impl CatalogConfig {
    pub fn path(&self) -> &Path {
        Path::new(&self.path)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.path.trim().is_empty() {
            return Err(ValidationError::MissingRequired("catalog.path"));
        }
        Ok(())
    }
}
