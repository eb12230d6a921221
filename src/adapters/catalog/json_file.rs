//! JSON File Catalog Adapter
//!
//! Reads the technique catalog from a JSON array on disk. Null or mistyped
//! goal and tag data degrades to empty lists. Only records without a
//! readable `slug` or `name` are skipped, with a warning.

use async_trait::async_trait;
use serde_json::Value;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{info, warn};

use crate::domain::catalog::Technique;
use crate::ports::{CatalogError, CatalogSource};

/// File-backed technique catalog
#[derive(Debug, Clone)]
pub struct JsonFileCatalog {
    path: PathBuf,
}

impl JsonFileCatalog {
    /// Create a catalog reading from `path`
    ///
    /// # Example
    /// ```ignore
    /// let catalog = JsonFileCatalog::new("./data/techniques.json");
    /// ```
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl CatalogSource for JsonFileCatalog {
    async fn load_techniques(&self) -> Result<Vec<Technique>, CatalogError> {
        let raw = fs::read_to_string(&self.path).await.map_err(|e| match e.kind() {
            ErrorKind::NotFound => CatalogError::NotFound(self.path.display().to_string()),
            _ => CatalogError::Io(e.to_string()),
        })?;

        let techniques = parse_catalog(&raw)?;
        info!(
            path = %self.path.display(),
            techniques = techniques.len(),
            "Loaded technique catalog"
        );
        Ok(techniques)
    }
}

/// Parses a JSON array of techniques, dropping unreadable records.
pub fn parse_catalog(raw: &str) -> Result<Vec<Technique>, CatalogError> {
    let value: Value =
        serde_json::from_str(raw).map_err(|e| CatalogError::Malformed(e.to_string()))?;
    let Value::Array(records) = value else {
        return Err(CatalogError::Malformed(
            "expected a JSON array of techniques".to_string(),
        ));
    };

    let techniques = records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| match serde_json::from_value::<Technique>(record) {
            Ok(technique) => Some(technique),
            Err(e) => {
                warn!(index, error = %e, "Skipping unreadable catalog record");
                None
            }
        })
        .collect();

    Ok(techniques)
}
