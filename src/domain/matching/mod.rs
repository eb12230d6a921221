//! Matching domain module.
//!
//! Pure functions that narrow a technique list by answers and score the
//! survivors against the answer path.

mod filter;
mod scoring;

pub use filter::{
    apply_filter, distinct_value_count, is_uniform, matches_answer, previous_goal,
    resolved_values, tag_matches_value,
};
pub use scoring::{RankedTechnique, RelevanceScorer};
