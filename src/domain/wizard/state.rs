//! Wizard traversal state.

use serde::Serialize;

use crate::domain::catalog::Technique;
use crate::domain::finder::{AnswerMap, PathEntry};

/// Snapshot of one traversal through a flow.
///
/// Only the wizard engine produces new states; hosts hold one value and
/// replace it with whatever the engine returns.
///
/// # Invariants
///
/// - `remaining_techniques == filtered_techniques.len()`
/// - `skipped_questions` holds no duplicates
/// - every `path` entry has a matching key in `answers`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WizardState {
    current_flow: Option<String>,
    current_question_index: usize,
    answers: AnswerMap,
    path: Vec<PathEntry>,
    remaining_techniques: usize,
    skipped_questions: Vec<String>,
    #[serde(skip)]
    filtered_techniques: Vec<Technique>,
}

impl WizardState {
    /// State before any flow is chosen; the whole catalog is in play.
    pub(crate) fn idle(catalog: &[Technique]) -> Self {
        Self {
            current_flow: None,
            current_question_index: 0,
            answers: AnswerMap::new(),
            path: Vec::new(),
            remaining_techniques: catalog.len(),
            skipped_questions: Vec::new(),
            filtered_techniques: catalog.to_vec(),
        }
    }

    pub(crate) fn started(flow_id: impl Into<String>, catalog: &[Technique]) -> Self {
        Self {
            current_flow: Some(flow_id.into()),
            ..Self::idle(catalog)
        }
    }

    pub fn current_flow(&self) -> Option<&str> {
        self.current_flow.as_deref()
    }

    pub fn current_question_index(&self) -> usize {
        self.current_question_index
    }

    pub fn answers(&self) -> &AnswerMap {
        &self.answers
    }

    pub fn path(&self) -> &[PathEntry] {
        &self.path
    }

    pub fn remaining_techniques(&self) -> usize {
        self.remaining_techniques
    }

    pub fn skipped_questions(&self) -> &[String] {
        &self.skipped_questions
    }

    pub fn filtered_techniques(&self) -> &[Technique] {
        &self.filtered_techniques
    }

    pub fn is_idle(&self) -> bool {
        self.current_flow.is_none()
    }

    pub(crate) fn set_filtered(&mut self, techniques: Vec<Technique>) {
        self.remaining_techniques = techniques.len();
        self.filtered_techniques = techniques;
    }

    pub(crate) fn set_cursor(&mut self, index: usize) {
        self.current_question_index = index;
    }

    pub(crate) fn record_answer(&mut self, entry: PathEntry) {
        self.answers
            .insert(entry.question_id.clone(), entry.answer.clone());
        self.path.push(entry);
    }

    /// Removes the most recent path entry and its stored answer.
    pub(crate) fn pop_answer(&mut self) -> Option<PathEntry> {
        let entry = self.path.pop()?;
        self.answers.remove(&entry.question_id);
        Some(entry)
    }

    pub(crate) fn record_skip(&mut self, question_id: &str) {
        if !self.skipped_questions.iter().any(|id| id == question_id) {
            self.skipped_questions.push(question_id.to_string());
        }
    }

    pub(crate) fn retain_skips(&mut self, keep: impl Fn(&str) -> bool) {
        self.skipped_questions.retain(|id| keep(id));
    }
}
