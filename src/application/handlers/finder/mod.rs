//! Finder handlers.

mod open_finder;

pub use open_finder::{OpenFinderCommand, OpenFinderHandler};
