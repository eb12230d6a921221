//! Wizard engine - pure transitions over [`WizardState`].
//!
//! Every operation takes the prior state by reference and returns a new
//! one; nothing here mutates in place. [`super::FinderSession`] is the
//! imperative shell that owns a state value between calls.
//!
//! # Question resolution
//!
//! Starting at the cursor, each question of the flow is checked against
//! the skip rules. Skipped questions are recorded once and the cursor
//! moves past them, so a resolved state's cursor always points at the
//! pending question (or one past the end of the flow).

use std::sync::Arc;
use tracing::{debug, info};

use super::state::WizardState;
use super::status::WizardStatus;
use crate::domain::catalog::Technique;
use crate::domain::finder::{
    Answer, AnswerMap, FinderConfig, Flow, OptionProvider, PathEntry, Question, QuestionOption,
};
use crate::domain::foundation::{DomainError, Percentage};
use crate::domain::matching::{apply_filter, distinct_value_count, is_uniform};

/// Progress never reaches this value until results are shown.
const PROGRESS_CEILING: u8 = 95;

/// A resolved state together with the question it is waiting on.
#[derive(Debug, Clone)]
pub struct Step<'a> {
    pub state: WizardState,
    pub question: Option<&'a Question>,
}

/// Transition engine over one validated configuration and catalog.
#[derive(Debug, Clone)]
pub struct Wizard {
    config: Arc<FinderConfig>,
    catalog: Arc<[Technique]>,
}

impl Wizard {
    /// Builds the engine, refusing configurations with dangling references.
    pub fn new(config: Arc<FinderConfig>, catalog: Arc<[Technique]>) -> Result<Self, DomainError> {
        config.validate()?;
        Ok(Self { config, catalog })
    }

    pub fn config(&self) -> &FinderConfig {
        &self.config
    }

    pub fn catalog(&self) -> &[Technique] {
        &self.catalog
    }

    pub fn idle_state(&self) -> WizardState {
        WizardState::idle(&self.catalog)
    }

    /// Fresh state for `flow_id`, resolved to its first unskipped question.
    pub fn start_flow(&self, flow_id: &str) -> Result<Step<'_>, DomainError> {
        if self.config.flow(flow_id).is_none() {
            return Err(DomainError::invalid_flow(flow_id));
        }
        info!(
            flow_id = %flow_id,
            techniques = self.catalog.len(),
            "Starting finder flow"
        );
        Ok(self.resolve(WizardState::started(flow_id, &self.catalog)))
    }

    /// Resolves the pending question of `state`.
    ///
    /// Calling this again on the returned state yields the same state.
    pub fn current_question(&self, state: &WizardState) -> Step<'_> {
        self.resolve(state.clone())
    }

    /// The pending question without recording skips.
    pub fn peek_question(&self, state: &WizardState) -> Option<&Question> {
        let flow = self.flow_of(state)?;
        flow.questions
            .iter()
            .skip(state.current_question_index())
            .filter_map(|id| self.config.question(id))
            .find(|question| !self.should_skip(question, state))
    }

    /// True if `question` should be bypassed for the current filtered set.
    ///
    /// Once the filtered set is at or below `ideal_results`, every question
    /// is skipped regardless of its own rules.
    pub fn should_skip(&self, question: &Question, state: &WizardState) -> bool {
        let filtered = state.filtered_techniques();
        if filtered.len() <= self.config.thresholds.ideal_results {
            return true;
        }

        let (Some(rules), Some(filter_tag)) = (question.conditional, question.filter_tag) else {
            return false;
        };
        if let Some(min) = rules.min_options_for_display {
            if distinct_value_count(filter_tag, filtered) < min {
                return true;
            }
        }
        rules.skip_if_uniform && is_uniform(filter_tag, filtered)
    }

    /// Records `answer` for the pending question and narrows the filtered set.
    ///
    /// With no pending question the state is returned unchanged.
    pub fn submit_answer(&self, state: &WizardState, answer: Answer) -> Step<'_> {
        let Step {
            state: mut next,
            question,
        } = self.current_question(state);
        let Some(question) = question else {
            debug!("Ignoring answer: no pending question");
            return Step {
                state: state.clone(),
                question: None,
            };
        };

        let index = next.current_question_index();
        next.record_answer(PathEntry::new(&question.id, question.filter_tag, answer.clone()));
        if let Some(filter_tag) = question.filter_tag {
            let narrowed = apply_filter(filter_tag, &answer, next.filtered_techniques(), next.answers());
            next.set_filtered(narrowed);
        }
        next.set_cursor(index + 1);

        info!(
            question_id = %question.id,
            remaining = next.remaining_techniques(),
            "Recorded answer"
        );

        self.resolve(next)
    }

    /// Undoes the latest answer by replaying the rest of the path from the
    /// full catalog. Returns `None` when nothing has been answered.
    pub fn go_back(&self, state: &WizardState) -> Option<Step<'_>> {
        let flow = self.flow_of(state)?;
        let mut next = state.clone();
        let popped = next.pop_answer()?;

        let mut filtered = self.catalog.to_vec();
        let mut replayed = AnswerMap::new();
        for entry in next.path() {
            replayed.insert(entry.question_id.clone(), entry.answer.clone());
            if let Some(filter_tag) = entry.filter_tag {
                filtered = apply_filter(filter_tag, &entry.answer, &filtered, &replayed);
            }
        }
        next.set_filtered(filtered);

        let cursor = flow.position(&popped.question_id).unwrap_or(0);
        next.set_cursor(cursor);
        next.retain_skips(|id| flow.position(id).is_some_and(|p| p < cursor));

        info!(
            question_id = %popped.question_id,
            remaining = next.remaining_techniques(),
            "Went back"
        );

        Some(self.resolve(next))
    }

    pub fn reset(&self) -> WizardState {
        debug!("Resetting finder state");
        self.idle_state()
    }

    /// True once no question remains or the results are few enough to show.
    ///
    /// An idle state has no pending question but still reports false: no
    /// flow has narrowed anything yet, so hosts should offer entry points
    /// rather than a results view.
    pub fn should_show_results(&self, state: &WizardState) -> bool {
        if state.is_idle() {
            return false;
        }
        state.remaining_techniques() <= self.config.thresholds.max_results
            || self.peek_question(state).is_none()
    }

    /// Completion estimate, held below 100 until results are shown.
    ///
    /// Idle states report 0, matching `should_show_results` returning false.
    pub fn progress(&self, state: &WizardState) -> Percentage {
        let Some(flow) = self.flow_of(state) else {
            return Percentage::ZERO;
        };
        if self.should_show_results(state) {
            return Percentage::HUNDRED;
        }
        let expected = flow
            .len()
            .saturating_sub(state.skipped_questions().len())
            .max(1);
        Percentage::from_ratio(state.path().len(), expected).capped_at(PROGRESS_CEILING)
    }

    pub fn status(&self, state: &WizardState) -> WizardStatus {
        if state.is_idle() {
            WizardStatus::Idle
        } else if self.should_show_results(state) {
            WizardStatus::Terminal
        } else {
            WizardStatus::Active
        }
    }

    /// Options for the pending question, counted against the filtered set.
    pub fn current_options(&self, state: &WizardState) -> Vec<QuestionOption> {
        match self.peek_question(state) {
            Some(question) => {
                OptionProvider::load_options(question, state.answers(), state.filtered_techniques())
            }
            None => Vec::new(),
        }
    }

    /// Prompt text of the pending question with the previous answer filled in.
    pub fn current_prompt(&self, state: &WizardState) -> Option<String> {
        let question = self.peek_question(state)?;
        let previous = state.path().last().map(PathEntry::display_answer);
        Some(question.render_text(previous.as_deref()))
    }

    fn flow_of(&self, state: &WizardState) -> Option<&Flow> {
        state.current_flow().and_then(|id| self.config.flow(id))
    }

    fn resolve(&self, mut state: WizardState) -> Step<'_> {
        let Some(flow) = self.flow_of(&state) else {
            return Step {
                state,
                question: None,
            };
        };

        let mut index = state.current_question_index();
        while let Some(question_id) = flow.questions.get(index) {
            if let Some(question) = self.config.question(question_id) {
                if !self.should_skip(question, &state) {
                    state.set_cursor(index);
                    return Step {
                        state,
                        question: Some(question),
                    };
                }
                debug!(
                    question_id = %question_id,
                    remaining = state.remaining_techniques(),
                    "Skipping question"
                );
                state.record_skip(question_id);
            }
            index += 1;
        }

        state.set_cursor(index);
        Step {
            state,
            question: None,
        }
    }
}
