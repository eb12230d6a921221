//! FinderSession - owns one wizard state for a single user.

use tracing::{info, warn};

use super::machine::{Step, Wizard};
use super::state::WizardState;
use super::status::WizardStatus;
use crate::domain::catalog::Technique;
use crate::domain::finder::{Answer, EntryPoint, Question, QuestionOption, ResultVolume};
use crate::domain::foundation::{DomainError, FinderSessionId, Percentage, StateMachine};
use crate::domain::matching::{RankedTechnique, RelevanceScorer};

/// One user's pass through the finder.
///
/// Not shared between callers; each operation completes before the next.
#[derive(Debug)]
pub struct FinderSession {
    id: FinderSessionId,
    wizard: Wizard,
    state: WizardState,
    status: WizardStatus,
}

impl FinderSession {
    pub fn new(wizard: Wizard) -> Self {
        let state = wizard.idle_state();
        Self {
            id: FinderSessionId::new(),
            wizard,
            state,
            status: WizardStatus::Idle,
        }
    }

    pub fn id(&self) -> &FinderSessionId {
        &self.id
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn status(&self) -> WizardStatus {
        self.status
    }

    pub fn entry_points(&self) -> &[EntryPoint] {
        &self.wizard.config().entry_points
    }

    /// Starts `flow_id` from scratch and returns its first question.
    pub fn start_flow(&mut self, flow_id: &str) -> Result<Option<&Question>, DomainError> {
        let Step { state, .. } = self.wizard.start_flow(flow_id)?;
        self.apply(state);
        Ok(self.wizard.peek_question(&self.state))
    }

    /// Starts the flow behind the entry point `entry_id`.
    pub fn start_entry_point(&mut self, entry_id: &str) -> Result<Option<&Question>, DomainError> {
        let flow_id = self
            .wizard
            .config()
            .entry_point(entry_id)
            .map(|entry| entry.flow_id.clone())
            .ok_or_else(|| {
                DomainError::invalid_flow(entry_id).with_detail("entry_point", entry_id)
            })?;
        self.start_flow(&flow_id)
    }

    pub fn current_question(&mut self) -> Option<&Question> {
        let Step { state, .. } = self.wizard.current_question(&self.state);
        self.apply(state);
        self.wizard.peek_question(&self.state)
    }

    /// Submits an answer to the pending question and returns the next one.
    pub fn submit_answer(&mut self, answer: impl Into<Answer>) -> Option<&Question> {
        let Step { state, .. } = self.wizard.submit_answer(&self.state, answer.into());
        self.apply(state);
        self.wizard.peek_question(&self.state)
    }

    /// Undoes the latest answer. `None` means there was nothing to undo and
    /// the host should return to entry-point selection.
    pub fn go_back(&mut self) -> Option<&Question> {
        let Step { state, .. } = self.wizard.go_back(&self.state)?;
        self.apply(state);
        self.wizard.peek_question(&self.state)
    }

    pub fn reset(&mut self) {
        let state = self.wizard.reset();
        self.apply(state);
    }

    pub fn should_show_results(&self) -> bool {
        self.wizard.should_show_results(&self.state)
    }

    pub fn progress(&self) -> Percentage {
        self.wizard.progress(&self.state)
    }

    pub fn filtered_techniques(&self) -> &[Technique] {
        self.state.filtered_techniques()
    }

    pub fn current_options(&self) -> Vec<QuestionOption> {
        self.wizard.current_options(&self.state)
    }

    pub fn current_prompt(&self) -> Option<String> {
        self.wizard.current_prompt(&self.state)
    }

    /// The filtered techniques, scored and explained, best first.
    pub fn ranked_results(&self) -> Vec<RankedTechnique> {
        RelevanceScorer::rank(self.state.filtered_techniques(), self.state.path())
    }

    pub fn result_volume(&self) -> ResultVolume {
        self.wizard
            .config()
            .thresholds
            .volume(self.state.remaining_techniques())
    }

    /// `(question id, rendered answer)` for every answered question, in order.
    pub fn breadcrumbs(&self) -> Vec<(&str, String)> {
        self.state
            .path()
            .iter()
            .map(|entry| (entry.question_id.as_str(), entry.display_answer()))
            .collect()
    }

    fn apply(&mut self, state: WizardState) {
        self.state = state;
        let status = self.wizard.status(&self.state);
        if status == self.status {
            return;
        }
        match self.status.transition_to(status) {
            Ok(next) => info!(
                session_id = %self.id,
                from = %self.status,
                to = %next,
                remaining = self.state.remaining_techniques(),
                "Finder status changed"
            ),
            Err(e) => {
                debug_assert!(false, "{}", e);
                warn!(session_id = %self.id, error = %e, "Unexpected finder status change");
            }
        }
        self.status = status;
    }
}
