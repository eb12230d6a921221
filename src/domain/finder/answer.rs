//! Answers and the answer-history path.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::catalog::{is_sentinel, vocabulary, FilterTag};

/// Submitted answers keyed by question id.
pub type AnswerMap = BTreeMap<String, Answer>;

/// The literal answer to a question: one value or a set of values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Answer {
    Single(String),
    Multiple(Vec<String>),
}

impl Answer {
    pub fn single(value: impl Into<String>) -> Self {
        Answer::Single(value.into())
    }

    pub fn multiple<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Answer::Multiple(values.into_iter().map(Into::into).collect())
    }

    /// The distinct values of the answer, in submission order.
    pub fn values(&self) -> Vec<&str> {
        match self {
            Answer::Single(value) => vec![value.as_str()],
            Answer::Multiple(values) => {
                let mut distinct: Vec<&str> = Vec::with_capacity(values.len());
                for value in values {
                    if !distinct.contains(&value.as_str()) {
                        distinct.push(value.as_str());
                    }
                }
                distinct
            }
        }
    }

    /// The first value, if any.
    pub fn first(&self) -> Option<&str> {
        match self {
            Answer::Single(value) => Some(value.as_str()),
            Answer::Multiple(values) => values.first().map(String::as_str),
        }
    }

    pub fn contains_sentinel(&self) -> bool {
        self.values().into_iter().any(is_sentinel)
    }

    /// True when the answer must not narrow the result set: it carries a
    /// sentinel, or it has no values at all.
    pub fn skips_filtering(&self) -> bool {
        self.values().is_empty() || self.contains_sentinel()
    }
}

impl From<&str> for Answer {
    fn from(value: &str) -> Self {
        Answer::Single(value.to_string())
    }
}

impl From<String> for Answer {
    fn from(value: String) -> Self {
        Answer::Single(value)
    }
}

impl From<Vec<String>> for Answer {
    fn from(values: Vec<String>) -> Self {
        Answer::Multiple(values)
    }
}

impl From<Vec<&str>> for Answer {
    fn from(values: Vec<&str>) -> Self {
        Answer::multiple(values)
    }
}

/// One submitted `{question, answer}` pair, in submission order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathEntry {
    pub question_id: String,
    pub filter_tag: Option<FilterTag>,
    pub answer: Answer,
}

impl PathEntry {
    pub fn new(question_id: impl Into<String>, filter_tag: Option<FilterTag>, answer: Answer) -> Self {
        Self {
            question_id: question_id.into(),
            filter_tag,
            answer,
        }
    }

    /// The answer rendered with vocabulary labels, for breadcrumbs and prompts.
    pub fn display_answer(&self) -> String {
        let values = self.answer.values();
        match self.filter_tag {
            Some(tag) => values
                .into_iter()
                .map(|v| vocabulary::label_for(tag, v))
                .collect::<Vec<_>>()
                .join(", "),
            None => values.join(", "),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_deduplicates_multi_answers() {
        let answer = Answer::multiple(["deployment", "monitoring", "deployment"]);
        assert_eq!(answer.values(), vec!["deployment", "monitoring"]);
    }

    #[test]
    fn sentinel_anywhere_skips_filtering() {
        assert!(Answer::single("agnostic").skips_filtering());
        assert!(Answer::multiple(["deployment", "not-sure"]).skips_filtering());
        assert!(!Answer::single("traditional").skips_filtering());
    }

    #[test]
    fn empty_answer_skips_filtering() {
        assert!(Answer::Multiple(vec![]).skips_filtering());
    }

    #[test]
    fn deserializes_string_or_array() {
        let single: Answer = serde_json::from_str("\"Fairness\"").unwrap();
        assert_eq!(single, Answer::single("Fairness"));
        let multi: Answer = serde_json::from_str("[\"a\", \"b\"]").unwrap();
        assert_eq!(multi, Answer::multiple(["a", "b"]));
    }

    #[test]
    fn display_answer_uses_labels() {
        let entry = PathEntry::new(
            "lifecycle-stage",
            Some(FilterTag::LifecycleStage),
            Answer::multiple(["model-development", "monitoring"]),
        );
        assert_eq!(entry.display_answer(), "Model development, Monitoring");
    }
}
