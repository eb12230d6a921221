//! Finder domain module.
//!
//! The declarative decision tree (entry points, questions, flows, thresholds),
//! the answers users give to it, and the provider that turns a question into
//! concrete options for the techniques still in play.

mod answer;
mod config;
mod defaults;
mod options;

pub use answer::{Answer, AnswerMap, PathEntry};
pub use config::{
    ConditionalRules, DynamicOptions, EntryPoint, FinderConfig, Flow, OptionSource, Question,
    QuestionKind, QuestionOption, ResultThresholds, ResultVolume, DEFAULT_NOT_SURE_LABEL,
    GOAL_QUESTION_ID,
};
pub use defaults::{default_finder_config, DEFAULT_CONFIG_VERSION};
pub use options::OptionProvider;
