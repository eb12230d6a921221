//! Option Provider - computes the selectable answers for a question.

use std::collections::BTreeMap;

use super::answer::{Answer, AnswerMap};
use super::config::{DynamicOptions, OptionSource, Question, QuestionOption, GOAL_QUESTION_ID};
use crate::domain::catalog::{is_sentinel, vocabulary, Technique, NOT_SURE};
use crate::domain::matching::apply_filter;

/// Builds option lists from configuration and the remaining techniques.
pub struct OptionProvider;

impl OptionProvider {
    /// Returns the options for `question` given the answers so far and the
    /// techniques still in play.
    pub fn load_options(
        question: &Question,
        answers: &AnswerMap,
        techniques: &[Technique],
    ) -> Vec<QuestionOption> {
        let mut options = match &question.options {
            OptionSource::Fixed { options } => {
                Self::fixed_options(question, options, answers, techniques)
            }
            OptionSource::Dynamic {
                provider: DynamicOptions::AssuranceGoals,
            } => Self::goal_options(techniques),
            OptionSource::Dynamic {
                provider: DynamicOptions::GoalSubcategories,
            } => Self::subcategory_options(answers, techniques),
        };

        if question.allow_not_sure {
            options.push(
                QuestionOption::new(NOT_SURE, question.not_sure_label()).with_count(techniques.len()),
            );
        }

        options
    }

    /// Counts each option as the techniques `apply_filter` would keep for it.
    /// Techniques with no tags in the namespace count toward every option,
    /// so a count can exceed the number of techniques carrying that tag.
    fn fixed_options(
        question: &Question,
        options: &[QuestionOption],
        answers: &AnswerMap,
        techniques: &[Technique],
    ) -> Vec<QuestionOption> {
        let filter_tag = match question.filter_tag {
            Some(tag) if question.show_counts => tag,
            _ => return options.to_vec(),
        };

        options
            .iter()
            .map(|option| {
                let count = if is_sentinel(&option.value) {
                    techniques.len()
                } else {
                    apply_filter(filter_tag, &Answer::single(option.value.as_str()), techniques, answers)
                        .len()
                };
                option.clone().with_count(count)
            })
            .collect()
    }

    /// Goals present in `techniques`, most common first; ties alphabetical.
    fn goal_options(techniques: &[Technique]) -> Vec<QuestionOption> {
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for technique in techniques {
            for goal in &technique.assurance_goals {
                *counts.entry(goal.as_str()).or_default() += 1;
            }
        }

        let mut ranked: Vec<(&str, usize)> = counts.into_iter().filter(|(_, n)| *n > 0).collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));

        ranked
            .into_iter()
            .map(|(goal, count)| {
                let option = QuestionOption::new(goal, goal).with_count(count);
                match vocabulary::goal_description(goal) {
                    Some(description) => option.with_description(description),
                    None => option,
                }
            })
            .collect()
    }

    /// Subcategories of the goal answered earlier, counted by substring match on tags.
    fn subcategory_options(answers: &AnswerMap, techniques: &[Technique]) -> Vec<QuestionOption> {
        let Some(goal) = answers.get(GOAL_QUESTION_ID).and_then(Answer::first) else {
            return Vec::new();
        };
        let Some(subcategories) = vocabulary::subcategories_for(goal) else {
            return Vec::new();
        };

        subcategories
            .iter()
            .map(|sub| {
                let count = techniques
                    .iter()
                    .filter(|t| t.tags.iter().any(|tag| tag.contains(sub.value)))
                    .count();
                QuestionOption::new(sub.value, sub.label)
                    .with_description(sub.description)
                    .with_count(count)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::finder::config::{ConditionalRules, QuestionKind};
    use crate::domain::finder::default_finder_config;

    fn catalog() -> Vec<Technique> {
        vec![
            Technique::new("shap", "SHAP")
                .with_goals(["Explainability", "Transparency"])
                .with_tags([
                    "applicable-models/agnostic",
                    "assurance-goal-category/explainability/feature-analysis/importance",
                ]),
            Technique::new("grad-cam", "Grad-CAM")
                .with_goals(["Explainability"])
                .with_tags([
                    "applicable-models/neural-network/cnn",
                    "assurance-goal-category/explainability/visualization",
                ]),
            Technique::new("demographic-parity", "Demographic Parity")
                .with_goals(["Fairness"])
                .with_tags(["applicable-models/traditional/tree-based"]),
        ]
    }

    fn question(id: &str) -> Question {
        default_finder_config().question(id).unwrap().clone()
    }

    mod fixed {
        use super::*;

        #[test]
        fn counts_follow_the_filter_predicate() {
            let options =
                OptionProvider::load_options(&question("model-type"), &AnswerMap::new(), &catalog());
            let count = |value: &str| {
                options
                    .iter()
                    .find(|o| o.value == value)
                    .and_then(|o| o.count)
                    .unwrap()
            };
            // shap is agnostic so it matches every model query
            assert_eq!(count("neural-network"), 2);
            assert_eq!(count("traditional"), 2);
            assert_eq!(count("agnostic"), 3);
        }

        #[test]
        fn untagged_techniques_count_toward_every_option() {
            let mut techniques = catalog();
            techniques.push(Technique::new("model-cards", "Model Cards").with_goals(["Transparency"]));
            let options =
                OptionProvider::load_options(&question("model-type"), &AnswerMap::new(), &techniques);
            let neural = options.iter().find(|o| o.value == "neural-network").unwrap();
            assert_eq!(neural.count, Some(3));
        }

        #[test]
        fn counts_are_omitted_when_not_requested() {
            let mut q = question("model-type");
            q.show_counts = false;
            let options = OptionProvider::load_options(&q, &AnswerMap::new(), &catalog());
            assert!(options.iter().all(|o| o.count.is_none()));
        }

        #[test]
        fn not_sure_is_appended_last_with_full_count() {
            let options = OptionProvider::load_options(
                &question("technique-type"),
                &AnswerMap::new(),
                &catalog(),
            );
            let last = options.last().unwrap();
            assert_eq!(last.value, NOT_SURE);
            assert_eq!(last.label, "I'm not sure");
            assert_eq!(last.count, Some(3));
        }
    }

    mod goals {
        use super::*;

        #[test]
        fn sorted_by_count_descending() {
            let options =
                OptionProvider::load_options(&question("assurance-goal"), &AnswerMap::new(), &catalog());
            let values: Vec<_> = options.iter().map(|o| o.value.as_str()).collect();
            assert_eq!(values, vec!["Explainability", "Fairness", "Transparency"]);
            assert_eq!(options[0].count, Some(2));
        }

        #[test]
        fn carry_static_descriptions() {
            let options =
                OptionProvider::load_options(&question("assurance-goal"), &AnswerMap::new(), &catalog());
            assert!(options.iter().all(|o| o.description.is_some()));
        }

        #[test]
        fn empty_catalog_has_no_goals() {
            let options =
                OptionProvider::load_options(&question("assurance-goal"), &AnswerMap::new(), &[]);
            assert!(options.is_empty());
        }
    }

    mod subcategories {
        use super::*;

        fn bare_subcategory_question() -> Question {
            Question {
                allow_not_sure: false,
                ..question("goal-subcategory")
            }
        }

        #[test]
        fn keyed_by_previous_goal_answer() {
            let mut answers = AnswerMap::new();
            answers.insert(GOAL_QUESTION_ID.to_string(), Answer::single("Explainability"));
            let options =
                OptionProvider::load_options(&bare_subcategory_question(), &answers, &catalog());
            let feature = options.iter().find(|o| o.value == "feature-analysis").unwrap();
            assert_eq!(feature.count, Some(1));
            let visual = options.iter().find(|o| o.value == "visualization").unwrap();
            assert_eq!(visual.count, Some(1));
        }

        #[test]
        fn empty_without_goal_answer() {
            let options = OptionProvider::load_options(
                &bare_subcategory_question(),
                &AnswerMap::new(),
                &catalog(),
            );
            assert!(options.is_empty());
        }

        #[test]
        fn empty_for_goal_without_subcategories() {
            let mut answers = AnswerMap::new();
            answers.insert(GOAL_QUESTION_ID.to_string(), Answer::single("Safety"));
            let options =
                OptionProvider::load_options(&bare_subcategory_question(), &answers, &catalog());
            assert!(options.is_empty());
        }

        #[test]
        fn lookup_is_case_sensitive() {
            let mut answers = AnswerMap::new();
            answers.insert(GOAL_QUESTION_ID.to_string(), Answer::single("explainability"));
            let options =
                OptionProvider::load_options(&bare_subcategory_question(), &answers, &catalog());
            assert!(options.is_empty());
        }

        #[test]
        fn not_sure_still_appended_when_enabled() {
            let options = OptionProvider::load_options(
                &question("goal-subcategory"),
                &AnswerMap::new(),
                &catalog(),
            );
            assert_eq!(options.len(), 1);
            assert_eq!(options[0].label, "Show me everything");
        }
    }

    #[test]
    fn custom_question_without_filter_tag_returns_options_verbatim() {
        let q = Question {
            id: "team-size".to_string(),
            text: "How large is your team?".to_string(),
            kind: QuestionKind::Single,
            filter_tag: None,
            options: OptionSource::Fixed {
                options: vec![QuestionOption::new("small", "Small")],
            },
            allow_not_sure: false,
            not_sure_label: None,
            show_counts: true,
            conditional: Some(ConditionalRules::default()),
        };
        let options = OptionProvider::load_options(&q, &AnswerMap::new(), &catalog());
        assert_eq!(options, vec![QuestionOption::new("small", "Small")]);
    }
}
