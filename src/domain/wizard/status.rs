//! Coarse lifecycle of a finder session.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::StateMachine;

/// Where a session stands in its guided flow.
///
/// Derived from the wizard state rather than stored:
/// - `Idle`: no flow has been started
/// - `Active`: a question is pending and too many results remain
/// - `Terminal`: no question remains or the results are few enough to show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStatus {
    Idle,
    Active,
    Terminal,
}

impl WizardStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Idle => "Choosing a starting point",
            Self::Active => "Answering questions",
            Self::Terminal => "Reviewing results",
        }
    }

    /// True if answers can still be submitted.
    pub fn accepts_answers(&self) -> bool {
        matches!(self, Self::Active | Self::Terminal)
    }
}

impl StateMachine for WizardStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        self.valid_transitions().contains(target)
    }

    /// Every status reachable through one session operation.
    fn valid_transitions(&self) -> Vec<Self> {
        match self {
            // a tiny catalog can skip every question on start
            Self::Idle => vec![Self::Active, Self::Terminal],
            Self::Active => vec![Self::Active, Self::Terminal, Self::Idle],
            Self::Terminal => vec![Self::Terminal, Self::Active, Self::Idle],
        }
    }
}

impl Default for WizardStatus {
    fn default() -> Self {
        Self::Idle
    }
}

impl fmt::Display for WizardStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Idle => "idle",
            Self::Active => "active",
            Self::Terminal => "terminal",
        };
        write!(f, "{}", s)
    }
}
