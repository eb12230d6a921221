//! Application handlers.
//!
//! Command handlers that orchestrate domain operations.

pub mod finder;

pub use finder::{OpenFinderCommand, OpenFinderHandler};
