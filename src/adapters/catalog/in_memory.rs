//! In-Memory Catalog Adapter
//!
//! Serves a fixed technique list. Useful for testing and embedding.

use async_trait::async_trait;

use crate::domain::catalog::Technique;
use crate::ports::{CatalogError, CatalogSource};

/// Catalog held in memory
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    techniques: Vec<Technique>,
}

impl InMemoryCatalog {
    pub fn new(techniques: Vec<Technique>) -> Self {
        Self { techniques }
    }

    pub fn len(&self) -> usize {
        self.techniques.len()
    }

    pub fn is_empty(&self) -> bool {
        self.techniques.is_empty()
    }
}

impl From<Vec<Technique>> for InMemoryCatalog {
    fn from(techniques: Vec<Technique>) -> Self {
        Self::new(techniques)
    }
}

#[async_trait]
impl CatalogSource for InMemoryCatalog {
    async fn load_techniques(&self) -> Result<Vec<Technique>, CatalogError> {
        Ok(self.techniques.clone())
    }
}
