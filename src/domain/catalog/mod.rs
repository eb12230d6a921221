//! Catalog domain module.
//!
//! The read-only technique records the finder narrows, the dimensions
//! questions can filter on, and the static vocabulary used for labels.

mod filter_tag;
mod technique;
pub mod vocabulary;

pub use filter_tag::{is_sentinel, FilterTag, AGNOSTIC, NOT_SURE};
pub use technique::{leaf_segment, Technique, MODEL_AGNOSTIC_TAG};
pub use vocabulary::Term;

#[cfg(test)]
pub(crate) mod fixtures;
