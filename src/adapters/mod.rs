//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `catalog` - Technique catalog sources (JSON file, in-memory)

pub mod catalog;

pub use catalog::{InMemoryCatalog, JsonFileCatalog};
