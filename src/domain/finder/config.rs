//! Finder configuration model.
//!
//! Entry points, questions, flows and result thresholds. Pure data:
//! nothing here decides what to ask next, it only describes what can be asked.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

use crate::domain::catalog::FilterTag;
use crate::domain::foundation::ValidationError;

/// Id of the goal question whose answer conditions the subcategory question.
pub const GOAL_QUESTION_ID: &str = "assurance-goal";

/// Label of the synthetic "not sure" option when a question sets none.
pub const DEFAULT_NOT_SURE_LABEL: &str = "I'm not sure";

/// Whether a question takes one value or several.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    #[default]
    Single,
    Multi,
}

/// A selectable answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionOption {
    pub value: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl QuestionOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            count: None,
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.count = Some(count);
        self
    }
}

/// Options computed from the catalog at the time the question is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DynamicOptions {
    /// Goal names present in the remaining techniques, most common first.
    AssuranceGoals,
    /// Subcategories of the goal chosen earlier.
    GoalSubcategories,
}

/// Where a question's options come from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum OptionSource {
    Fixed { options: Vec<QuestionOption> },
    Dynamic { provider: DynamicOptions },
}

/// Rules under which a question is skipped given the remaining techniques.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ConditionalRules {
    /// Skip when fewer distinct values than this remain for the filter tag.
    #[serde(default)]
    pub min_options_for_display: Option<usize>,
    /// Skip when every remaining technique has the same values for the filter tag.
    #[serde(default)]
    pub skip_if_uniform: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    /// Prompt text; may contain [`Question::PREVIOUS_ANSWER`].
    pub text: String,
    #[serde(default)]
    pub kind: QuestionKind,
    #[serde(default)]
    pub filter_tag: Option<FilterTag>,
    pub options: OptionSource,
    #[serde(default)]
    pub allow_not_sure: bool,
    #[serde(default)]
    pub not_sure_label: Option<String>,
    /// Annotate fixed options with the number of matching techniques.
    #[serde(default)]
    pub show_counts: bool,
    #[serde(default)]
    pub conditional: Option<ConditionalRules>,
}

impl Question {
    /// Placeholder replaced by the previous answer when the prompt is rendered.
    pub const PREVIOUS_ANSWER: &'static str = "{previous}";

    pub fn is_multi(&self) -> bool {
        self.kind == QuestionKind::Multi
    }

    /// Prompt text with the previous answer substituted in.
    pub fn render_text(&self, previous_answer: Option<&str>) -> String {
        if !self.text.contains(Self::PREVIOUS_ANSWER) {
            return self.text.clone();
        }
        self.text.replace(
            Self::PREVIOUS_ANSWER,
            previous_answer.unwrap_or("your previous choice"),
        )
    }

    pub fn not_sure_label(&self) -> &str {
        self.not_sure_label
            .as_deref()
            .unwrap_or(DEFAULT_NOT_SURE_LABEL)
    }
}

/// One guided path: an ordered list of question ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flow {
    pub id: String,
    #[serde(default)]
    pub title: String,
    pub questions: Vec<String>,
}

impl Flow {
    /// Position of a question in this flow.
    pub fn position(&self, question_id: &str) -> Option<usize> {
        self.questions.iter().position(|q| q == question_id)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

/// A user-facing starting choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryPoint {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub flow_id: String,
    /// The question the flow opens with.
    pub question_id: String,
}

/// How many results the finder aims for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultThresholds {
    pub min_results: usize,
    /// At or below this count no further questions are asked.
    pub ideal_results: usize,
    /// At or below this count results are shown.
    pub max_results: usize,
}

impl Default for ResultThresholds {
    fn default() -> Self {
        Self {
            min_results: 3,
            ideal_results: 8,
            max_results: 15,
        }
    }
}

impl ResultThresholds {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.ideal_results < self.min_results || self.ideal_results > self.max_results {
            return Err(ValidationError::out_of_range(
                "thresholds.ideal_results",
                self.min_results as i64,
                self.max_results as i64,
                self.ideal_results as i64,
            ));
        }
        Ok(())
    }

    /// Classifies a result count against the thresholds.
    pub fn volume(&self, count: usize) -> ResultVolume {
        if count == 0 {
            ResultVolume::None
        } else if count < self.min_results {
            ResultVolume::Few
        } else if count <= self.max_results {
            ResultVolume::Ideal
        } else {
            ResultVolume::TooMany
        }
    }
}

/// How a result count compares to the configured thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultVolume {
    None,
    Few,
    Ideal,
    TooMany,
}

/// The whole declarative decision tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinderConfig {
    pub version: String,
    pub entry_points: Vec<EntryPoint>,
    pub questions: BTreeMap<String, Question>,
    pub flows: BTreeMap<String, Flow>,
    #[serde(default)]
    pub thresholds: ResultThresholds,
}

impl FinderConfig {
    /// Parses a YAML document and validates it.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ValidationError> {
        let config: FinderConfig = serde_yaml::from_str(yaml)
            .map_err(|e| ValidationError::invalid_format("finder_config", e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn question(&self, id: &str) -> Option<&Question> {
        self.questions.get(id)
    }

    pub fn flow(&self, id: &str) -> Option<&Flow> {
        self.flows.get(id)
    }

    pub fn entry_point(&self, id: &str) -> Option<&EntryPoint> {
        self.entry_points.iter().find(|e| e.id == id)
    }

    /// Checks that every id referenced anywhere resolves.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.thresholds.validate()?;

        for (key, question) in &self.questions {
            if key != &question.id {
                return Err(ValidationError::invalid_format(
                    format!("questions.{}", key),
                    format!("key does not match question id '{}'", question.id),
                ));
            }
            if let OptionSource::Fixed { options } = &question.options {
                if options.is_empty() {
                    return Err(ValidationError::empty_field(format!(
                        "questions.{}.options",
                        key
                    )));
                }
            }
        }

        for (key, flow) in &self.flows {
            if key != &flow.id {
                return Err(ValidationError::invalid_format(
                    format!("flows.{}", key),
                    format!("key does not match flow id '{}'", flow.id),
                ));
            }
            if flow.is_empty() {
                return Err(ValidationError::empty_field(format!("flows.{}.questions", key)));
            }
            let mut seen = HashSet::new();
            for question_id in &flow.questions {
                if !self.questions.contains_key(question_id) {
                    return Err(ValidationError::unknown_reference(
                        format!("flow '{}'", key),
                        "question",
                        question_id.clone(),
                    ));
                }
                if !seen.insert(question_id.as_str()) {
                    return Err(ValidationError::invalid_format(
                        format!("flows.{}.questions", key),
                        format!("question '{}' appears more than once", question_id),
                    ));
                }
            }
        }

        for entry in &self.entry_points {
            let flow = self.flow(&entry.flow_id).ok_or_else(|| {
                ValidationError::unknown_reference(
                    format!("entry point '{}'", entry.id),
                    "flow",
                    entry.flow_id.clone(),
                )
            })?;
            if flow.position(&entry.question_id).is_none() {
                return Err(ValidationError::unknown_reference(
                    format!("entry point '{}'", entry.id),
                    "question",
                    entry.question_id.clone(),
                ));
            }
        }

        Ok(())
    }
}
