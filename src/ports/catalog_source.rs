//! Catalog Source Port - Interface for loading the technique catalog.
//!
//! The finder reads the catalog once, when a session is opened, and never
//! re-fetches it.

use async_trait::async_trait;

use crate::domain::catalog::Technique;
use crate::domain::foundation::{DomainError, ErrorCode};

/// Errors that can occur while loading the catalog
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Catalog not found at: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(String),

    #[error("Malformed catalog: {0}")]
    Malformed(String),
}

impl From<CatalogError> for DomainError {
    fn from(err: CatalogError) -> Self {
        let code = match &err {
            CatalogError::NotFound(_) | CatalogError::Io(_) => ErrorCode::CatalogUnavailable,
            CatalogError::Malformed(_) => ErrorCode::CatalogMalformed,
        };
        DomainError::new(code, err.to_string())
    }
}

/// Port for supplying the full technique catalog
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Load every technique in the catalog
    ///
    /// # Errors
    /// Returns `CatalogError` if the catalog cannot be read or is not a list
    async fn load_techniques(&self) -> Result<Vec<Technique>, CatalogError>;
}
