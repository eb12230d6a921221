//! OpenFinderHandler - Command handler that opens a finder session.
//!
//! Loads the catalog once through the `CatalogSource` port and binds it to
//! the configured decision tree.

use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::finder::FinderConfig;
use crate::domain::foundation::DomainError;
use crate::domain::wizard::{FinderSession, Wizard};
use crate::ports::CatalogSource;

/// Command to open a finder session.
#[derive(Debug, Clone, Default)]
pub struct OpenFinderCommand {
    /// Entry point to start immediately; `None` leaves the session idle.
    pub entry_point: Option<String>,
}

/// Handler for opening finder sessions.
pub struct OpenFinderHandler {
    catalog_source: Arc<dyn CatalogSource>,
    config: Arc<FinderConfig>,
}

impl OpenFinderHandler {
    pub fn new(catalog_source: Arc<dyn CatalogSource>, config: Arc<FinderConfig>) -> Self {
        Self {
            catalog_source,
            config,
        }
    }

    pub async fn handle(&self, cmd: OpenFinderCommand) -> Result<FinderSession, DomainError> {
        let techniques = self.catalog_source.load_techniques().await?;
        if techniques.is_empty() {
            warn!("Catalog contains no techniques; every flow will end with no results");
        }

        let wizard = Wizard::new(self.config.clone(), techniques.into())?;
        let mut session = FinderSession::new(wizard);
        info!(
            session_id = %session.id(),
            config_version = %self.config.version,
            techniques = session.filtered_techniques().len(),
            "Opened finder session"
        );

        if let Some(entry_point) = &cmd.entry_point {
            session.start_entry_point(entry_point)?;
        }

        Ok(session)
    }
}
