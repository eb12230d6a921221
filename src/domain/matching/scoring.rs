//! Relevance scoring for narrowed results.
//!
//! A technique's score is the share of answered dimensions it satisfies.
//! "Not sure" answers count as satisfied; lifecycle answers require an
//! actual matching lifecycle tag rather than the "no tags" default.

use serde::Serialize;
use std::cmp::Reverse;
use std::collections::BTreeSet;

use super::filter::{matches_answer, tag_matches_value};
use crate::domain::catalog::{is_sentinel, vocabulary, FilterTag, Technique};
use crate::domain::finder::{PathEntry, GOAL_QUESTION_ID};
use crate::domain::foundation::Percentage;

/// A technique annotated for presentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedTechnique {
    pub technique: Technique,
    pub score: Percentage,
    pub reasons: Vec<String>,
    pub versatile: bool,
}

/// Scores and explains techniques against an answer path.
pub struct RelevanceScorer;

impl RelevanceScorer {
    /// Percentage of path entries the technique satisfies. An empty path scores 0.
    pub fn score(technique: &Technique, path: &[PathEntry]) -> Percentage {
        let goal = goal_in_path(path);
        let matched = path
            .iter()
            .filter(|entry| Self::entry_matches(technique, entry, goal))
            .count();
        Percentage::from_ratio(matched, path.len())
    }

    /// Sorts by descending score; equal scores keep their relative order.
    pub fn sort_by_relevance(techniques: &mut [Technique], path: &[PathEntry]) {
        techniques.sort_by_cached_key(|t| Reverse(Self::score(t, path)));
    }

    /// Scores, explains and orders `techniques` for display.
    pub fn rank(techniques: &[Technique], path: &[PathEntry]) -> Vec<RankedTechnique> {
        let mut ranked: Vec<RankedTechnique> = techniques
            .iter()
            .map(|technique| RankedTechnique {
                score: Self::score(technique, path),
                reasons: Self::match_reasons(technique, path),
                versatile: Self::is_versatile(technique),
                technique: technique.clone(),
            })
            .collect();
        ranked.sort_by_key(|r| Reverse(r.score));
        ranked
    }

    /// Human-readable explanations of why a technique fits the path.
    pub fn match_reasons(technique: &Technique, path: &[PathEntry]) -> Vec<String> {
        let goal = goal_in_path(path);
        let mut reasons = Vec::new();
        let mut mentions_models = false;

        for entry in path {
            let Some(tag) = entry.filter_tag else {
                continue;
            };
            if !Self::entry_matches(technique, entry, goal) {
                continue;
            }

            let open = entry.answer.skips_filtering();
            let values: Vec<&str> = entry
                .answer
                .values()
                .into_iter()
                .filter(|v| !is_sentinel(v))
                .collect();

            let reason = match tag {
                FilterTag::AssuranceGoals if open => "Open to any assurance goal".to_string(),
                FilterTag::AssuranceGoals => {
                    let supported: Vec<&str> = values
                        .iter()
                        .copied()
                        .filter(|v| technique.has_goal(v))
                        .collect();
                    format!("Supports {}", supported.join(", "))
                }
                FilterTag::ApplicableModels => {
                    mentions_models = true;
                    if open {
                        "Works with any model".to_string()
                    } else {
                        format!("Suitable for {}", labels(tag, &values))
                    }
                }
                FilterTag::LifecycleStage if open => "Fits any lifecycle stage".to_string(),
                FilterTag::LifecycleStage => {
                    let stages: Vec<&str> = values
                        .iter()
                        .copied()
                        .filter(|v| technique.tags_in(tag.as_str()).any(|t| tag_matches_value(t, v)))
                        .collect();
                    format!("{} stage", labels(tag, &stages))
                }
                FilterTag::TechniqueType if open => "Any technique type".to_string(),
                FilterTag::TechniqueType => format!("{} technique", labels(tag, &values)),
                FilterTag::AssuranceGoalCategory if open => "Covers every aspect of the goal".to_string(),
                FilterTag::AssuranceGoalCategory => format!("Focuses on {}", labels(tag, &values)),
                FilterTag::ExpertiseNeeded if open => "Any expertise level".to_string(),
                FilterTag::ExpertiseNeeded => format!("Expertise: {}", labels(tag, &values)),
                FilterTag::DataRequirements if open => "Any data access".to_string(),
                FilterTag::DataRequirements => format!("Data access: {}", labels(tag, &values)),
            };
            reasons.push(reason);
        }

        if technique.is_model_agnostic() && !mentions_models {
            reasons.push("Works across contexts".to_string());
        }

        reasons
    }

    /// Model-agnostic, spanning more than two goals, or more than one lifecycle stage.
    pub fn is_versatile(technique: &Technique) -> bool {
        let stages: BTreeSet<&str> = technique
            .tags_in(FilterTag::LifecycleStage.as_str())
            .collect();
        technique.is_model_agnostic() || technique.assurance_goals.len() > 2 || stages.len() > 1
    }

    fn entry_matches(technique: &Technique, entry: &PathEntry, goal: Option<&str>) -> bool {
        let Some(tag) = entry.filter_tag else {
            return true;
        };
        if entry.answer.skips_filtering() {
            return true;
        }
        let values = entry.answer.values();
        match tag {
            FilterTag::LifecycleStage => values.iter().any(|v| {
                technique
                    .tags_in(tag.as_str())
                    .any(|t| tag_matches_value(t, v))
            }),
            other => matches_answer(other, &values, technique, goal),
        }
    }
}

fn goal_in_path(path: &[PathEntry]) -> Option<&str> {
    path.iter()
        .find(|entry| entry.question_id == GOAL_QUESTION_ID)
        .and_then(|entry| entry.answer.first())
        .filter(|goal| !is_sentinel(goal))
}

fn labels(tag: FilterTag, values: &[&str]) -> String {
    values
        .iter()
        .map(|v| vocabulary::label_for(tag, v))
        .collect::<Vec<_>>()
        .join(", ")
}
