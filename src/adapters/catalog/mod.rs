//! Catalog adapters - implementations of the `CatalogSource` port.

mod in_memory;
mod json_file;

pub use in_memory::InMemoryCatalog;
pub use json_file::{parse_catalog, JsonFileCatalog};
