//! Built-in decision tree shipped with the finder.

use std::collections::BTreeMap;

use super::config::{
    ConditionalRules, DynamicOptions, EntryPoint, FinderConfig, Flow, OptionSource, Question,
    QuestionKind, QuestionOption, ResultThresholds, GOAL_QUESTION_ID,
};
use crate::domain::catalog::vocabulary::{self, Term};
use crate::domain::catalog::FilterTag;

/// Version stamp of the built-in configuration.
pub const DEFAULT_CONFIG_VERSION: &str = "2024.1";

/// Returns the default finder configuration.
pub fn default_finder_config() -> FinderConfig {
    let questions = [
        goal_question(),
        subcategory_question(),
        model_type_question(),
        lifecycle_question(),
        technique_type_question(),
        expertise_question(),
        data_access_question(),
    ]
    .into_iter()
    .map(|q| (q.id.clone(), q))
    .collect::<BTreeMap<_, _>>();

    let flows = [
        flow(
            "by-goal",
            "Start from an assurance goal",
            &[
                GOAL_QUESTION_ID,
                "goal-subcategory",
                "model-type",
                "lifecycle-stage",
                "technique-type",
            ],
        ),
        flow(
            "by-model",
            "Start from a model type",
            &[
                "model-type",
                GOAL_QUESTION_ID,
                "lifecycle-stage",
                "technique-type",
                "data-access",
            ],
        ),
        flow(
            "by-lifecycle",
            "Start from a lifecycle stage",
            &["lifecycle-stage", GOAL_QUESTION_ID, "technique-type", "expertise"],
        ),
    ]
    .into_iter()
    .map(|f| (f.id.clone(), f))
    .collect::<BTreeMap<_, _>>();

    FinderConfig {
        version: DEFAULT_CONFIG_VERSION.to_string(),
        entry_points: vec![
            entry(
                "goal",
                "I know what I want to assure",
                "Pick a goal such as fairness or explainability first.",
                "by-goal",
                GOAL_QUESTION_ID,
            ),
            entry(
                "model",
                "I know what model I'm using",
                "Start from the architecture you need to assure.",
                "by-model",
                "model-type",
            ),
            entry(
                "lifecycle",
                "I know where I am in the project",
                "Start from the current lifecycle stage.",
                "by-lifecycle",
                "lifecycle-stage",
            ),
        ],
        questions,
        flows,
        thresholds: ResultThresholds::default(),
    }
}

fn goal_question() -> Question {
    Question {
        id: GOAL_QUESTION_ID.to_string(),
        text: "What is your primary assurance goal?".to_string(),
        kind: QuestionKind::Single,
        filter_tag: Some(FilterTag::AssuranceGoals),
        options: OptionSource::Dynamic {
            provider: DynamicOptions::AssuranceGoals,
        },
        allow_not_sure: false,
        not_sure_label: None,
        show_counts: false,
        conditional: None,
    }
}

fn subcategory_question() -> Question {
    Question {
        id: "goal-subcategory".to_string(),
        text: "Which aspect of {previous} matters most?".to_string(),
        kind: QuestionKind::Single,
        filter_tag: Some(FilterTag::AssuranceGoalCategory),
        options: OptionSource::Dynamic {
            provider: DynamicOptions::GoalSubcategories,
        },
        allow_not_sure: true,
        not_sure_label: Some("Show me everything".to_string()),
        show_counts: false,
        conditional: Some(ConditionalRules {
            min_options_for_display: Some(2),
            skip_if_uniform: false,
        }),
    }
}

fn model_type_question() -> Question {
    fixed_question(
        "model-type",
        "What type of model are you working with?",
        QuestionKind::Single,
        FilterTag::ApplicableModels,
        vocabulary::MODEL_TYPES,
        false,
        ConditionalRules {
            min_options_for_display: None,
            skip_if_uniform: true,
        },
    )
}

fn lifecycle_question() -> Question {
    fixed_question(
        "lifecycle-stage",
        "Which lifecycle stages are you working in?",
        QuestionKind::Multi,
        FilterTag::LifecycleStage,
        vocabulary::LIFECYCLE_STAGES,
        true,
        ConditionalRules {
            min_options_for_display: Some(2),
            skip_if_uniform: false,
        },
    )
}

fn technique_type_question() -> Question {
    fixed_question(
        "technique-type",
        "What kind of technique are you looking for?",
        QuestionKind::Single,
        FilterTag::TechniqueType,
        vocabulary::TECHNIQUE_TYPES,
        true,
        ConditionalRules {
            min_options_for_display: None,
            skip_if_uniform: true,
        },
    )
}

fn expertise_question() -> Question {
    fixed_question(
        "expertise",
        "What expertise is available on your team?",
        QuestionKind::Multi,
        FilterTag::ExpertiseNeeded,
        vocabulary::EXPERTISE_LEVELS,
        true,
        ConditionalRules {
            min_options_for_display: Some(2),
            skip_if_uniform: false,
        },
    )
}

fn data_access_question() -> Question {
    fixed_question(
        "data-access",
        "What data or model access do you have?",
        QuestionKind::Multi,
        FilterTag::DataRequirements,
        vocabulary::DATA_REQUIREMENTS,
        true,
        ConditionalRules {
            min_options_for_display: None,
            skip_if_uniform: true,
        },
    )
}

fn fixed_question(
    id: &str,
    text: &str,
    kind: QuestionKind,
    filter_tag: FilterTag,
    terms: &[Term],
    allow_not_sure: bool,
    conditional: ConditionalRules,
) -> Question {
    Question {
        id: id.to_string(),
        text: text.to_string(),
        kind,
        filter_tag: Some(filter_tag),
        options: OptionSource::Fixed {
            options: terms
                .iter()
                .map(|t| QuestionOption::new(t.value, t.label).with_description(t.description))
                .collect(),
        },
        allow_not_sure,
        not_sure_label: None,
        show_counts: true,
        conditional: Some(conditional),
    }
}

fn flow(id: &str, title: &str, questions: &[&str]) -> Flow {
    Flow {
        id: id.to_string(),
        title: title.to_string(),
        questions: questions.iter().map(|q| q.to_string()).collect(),
    }
}

fn entry(id: &str, title: &str, description: &str, flow_id: &str, question_id: &str) -> EntryPoint {
    EntryPoint {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        flow_id: flow_id.to_string(),
        question_id: question_id.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_entry_point_opens_its_flow() {
        let config = default_finder_config();
        for entry in &config.entry_points {
            let flow = config.flow(&entry.flow_id).unwrap();
            assert_eq!(flow.questions[0], entry.question_id);
        }
    }

    #[test]
    fn goal_first_flow_asks_subcategory_second() {
        let config = default_finder_config();
        let flow = config.flow("by-goal").unwrap();
        assert_eq!(flow.position("goal-subcategory"), Some(1));
    }

    #[test]
    fn model_type_offers_agnostic_without_extra_not_sure() {
        let config = default_finder_config();
        let q = config.question("model-type").unwrap();
        assert!(!q.allow_not_sure);
        match &q.options {
            OptionSource::Fixed { options } => {
                assert!(options.iter().any(|o| o.value == "agnostic"));
            }
            other => panic!("expected fixed options, got {:?}", other),
        }
    }

    #[test]
    fn lifecycle_question_is_multi_select() {
        let config = default_finder_config();
        assert!(config.question("lifecycle-stage").unwrap().is_multi());
    }
}
