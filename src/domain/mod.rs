//! Domain layer containing the finder's business logic and types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (errors, IDs, percentages)
//! - `catalog` - Technique records, filter dimensions and vocabulary
//! - `finder` - Declarative decision tree and the option provider
//! - `matching` - Filter predicates and relevance scoring
//! - `wizard` - Traversal state, transition engine and sessions

pub mod catalog;
pub mod finder;
pub mod foundation;
pub mod matching;
pub mod wizard;
