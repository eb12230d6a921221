//! Filter engine - narrows a technique list by one answer.
//!
//! # Matching rules
//!
//! - `assurance_goals`: the technique's goals intersect the answer values.
//! - tag namespaces: a tag under `<namespace>/` ends in `/<value>` (or its
//!   leaf equals the value). A technique with no tags in the namespace
//!   declares no constraint and always matches.
//! - `applicable-models`: additionally accepts the named model families and
//!   any technique tagged `applicable-models/agnostic`.
//! - `assurance-goal-category`: a category tag starts with
//!   `assurance-goal-category/<goal>/<value>`, where `<goal>` is the
//!   lowercased answer to the goal question.
//!
//! Answers carrying a sentinel never narrow.

use std::collections::BTreeSet;
use tracing::debug;

use crate::domain::catalog::{is_sentinel, leaf_segment, vocabulary, FilterTag, Technique};
use crate::domain::finder::{Answer, AnswerMap, GOAL_QUESTION_ID};

/// Returns the techniques that satisfy `answer` on `filter_tag`.
pub fn apply_filter(
    filter_tag: FilterTag,
    answer: &Answer,
    techniques: &[Technique],
    answers: &AnswerMap,
) -> Vec<Technique> {
    if answer.skips_filtering() {
        return techniques.to_vec();
    }

    let values = answer.values();
    let goal = previous_goal(answers);
    let narrowed: Vec<Technique> = techniques
        .iter()
        .filter(|t| matches_answer(filter_tag, &values, t, goal))
        .cloned()
        .collect();

    debug!(
        filter_tag = %filter_tag,
        before = techniques.len(),
        after = narrowed.len(),
        "Applied filter"
    );

    narrowed
}

/// The goal answered earlier, unless it was a sentinel.
pub fn previous_goal(answers: &AnswerMap) -> Option<&str> {
    answers
        .get(GOAL_QUESTION_ID)
        .and_then(Answer::first)
        .filter(|goal| !is_sentinel(goal))
}

/// True if `technique` satisfies at least one of `values` on `filter_tag`.
///
/// Sentinel values are ignored; the caller decides whether a sentinel
/// answer should bypass matching altogether.
pub fn matches_answer(
    filter_tag: FilterTag,
    values: &[&str],
    technique: &Technique,
    previous_goal: Option<&str>,
) -> bool {
    let values: Vec<&str> = values.iter().copied().filter(|v| !is_sentinel(v)).collect();

    match filter_tag {
        FilterTag::AssuranceGoals => values.iter().any(|v| technique.has_goal(v)),
        FilterTag::AssuranceGoalCategory => matches_goal_category(&values, technique, previous_goal),
        FilterTag::ApplicableModels => matches_model_type(&values, technique),
        FilterTag::LifecycleStage
        | FilterTag::TechniqueType
        | FilterTag::ExpertiseNeeded
        | FilterTag::DataRequirements => matches_namespace(filter_tag.as_str(), &values, technique),
    }
}

/// True if `tag` names `value` as its leaf or as its trailing path.
pub fn tag_matches_value(tag: &str, value: &str) -> bool {
    if leaf_segment(tag) == value {
        return true;
    }
    tag.len() > value.len()
        && tag.ends_with(value)
        && tag.as_bytes()[tag.len() - value.len() - 1] == b'/'
}

fn matches_namespace(namespace: &str, values: &[&str], technique: &Technique) -> bool {
    let resolved: Vec<&str> = technique.tags_in(namespace).collect();
    if values.is_empty() || resolved.is_empty() {
        return true;
    }
    values
        .iter()
        .any(|v| resolved.iter().any(|tag| tag_matches_value(tag, v)))
}

fn matches_model_type(values: &[&str], technique: &Technique) -> bool {
    if values.is_empty() || technique.is_model_agnostic() {
        return true;
    }
    let resolved: Vec<&str> = technique
        .tags_in(FilterTag::ApplicableModels.as_str())
        .collect();
    if resolved.is_empty() {
        return true;
    }
    values.iter().any(|value| {
        let family = vocabulary::model_family(value).unwrap_or(&[]);
        resolved.iter().any(|tag| {
            tag_matches_value(tag, value) || family.iter().any(|member| tag.contains(member))
        })
    })
}

fn matches_goal_category(values: &[&str], technique: &Technique, previous_goal: Option<&str>) -> bool {
    if values.is_empty() {
        return true;
    }
    let namespace = FilterTag::AssuranceGoalCategory.as_str();
    let base = match previous_goal {
        Some(goal) => format!("{}/{}", namespace, goal.to_lowercase()),
        None => namespace.to_string(),
    };
    let paths: Vec<String> = values
        .iter()
        .map(|v| {
            if v.starts_with(namespace) && v[namespace.len()..].starts_with('/') {
                v.to_string()
            } else {
                format!("{}/{}", base, v)
            }
        })
        .collect();

    technique
        .tags_in(namespace)
        .any(|tag| paths.iter().any(|path| tag.starts_with(path.as_str())))
}

/// The values a technique carries on a dimension, for skip rules.
///
/// Goal names for `assurance_goals`; namespaced tags with the
/// `<namespace>/` prefix stripped otherwise.
pub fn resolved_values(filter_tag: FilterTag, technique: &Technique) -> BTreeSet<&str> {
    match filter_tag.tag_namespace() {
        None => technique.assurance_goals.iter().map(String::as_str).collect(),
        Some(namespace) => technique
            .tags_in(namespace)
            .map(|tag| &tag[namespace.len() + 1..])
            .collect(),
    }
}

/// Number of distinct values present across `techniques` on a dimension.
pub fn distinct_value_count(filter_tag: FilterTag, techniques: &[Technique]) -> usize {
    techniques
        .iter()
        .flat_map(|t| resolved_values(filter_tag, t))
        .collect::<BTreeSet<_>>()
        .len()
}

/// True if every technique carries the identical value set on a dimension.
pub fn is_uniform(filter_tag: FilterTag, techniques: &[Technique]) -> bool {
    let mut sets = techniques.iter().map(|t| resolved_values(filter_tag, t));
    match sets.next() {
        Some(first) => sets.all(|set| set == first),
        None => true,
    }
}
