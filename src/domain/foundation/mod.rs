//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, and error types
//! shared by the catalog, matching and wizard modules.

mod errors;
mod ids;
mod percentage;
mod state_machine;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::FinderSessionId;
pub use percentage::Percentage;
pub use state_machine::StateMachine;
