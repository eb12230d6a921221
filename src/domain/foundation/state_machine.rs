//! State machine trait for status enums.
//!
//! Gives status enums a shared way to check and perform transitions.

use super::ValidationError;

/// Trait for status enums that move through a fixed transition table.
///
/// # Example
///
/// ```ignore
/// impl StateMachine for WizardStatus {
///     fn can_transition_to(&self, target: &Self) -> bool {
///         self.valid_transitions().contains(target)
///     }
///
///     fn valid_transitions(&self) -> Vec<Self> {
///         match self {
///             Idle => vec![Active, Terminal],
///             // ...
///         }
///     }
/// }
///
/// let next = status.transition_to(WizardStatus::Terminal)?;
/// ```
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug {
    /// Returns true if moving from self to target is allowed.
    fn can_transition_to(&self, target: &Self) -> bool;

    /// Returns every status reachable from the current one.
    fn valid_transitions(&self) -> Vec<Self>;

    /// Moves to `target`, or fails if the edge is not in the table.
    fn transition_to(&self, target: Self) -> Result<Self, ValidationError> {
        if self.can_transition_to(&target) {
            Ok(target)
        } else {
            Err(ValidationError::invalid_format(
                "state_transition",
                format!("Cannot transition from {:?} to {:?}", self, target),
            ))
        }
    }

    /// True when no transition leaves the current status.
    fn is_terminal(&self) -> bool {
        self.valid_transitions().is_empty()
    }
}
