//! Static vocabulary of the technique catalog.
//!
//! Human-readable labels and descriptions for goal names and tag values,
//! the per-goal subcategory lists, and the model-type groupings.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use super::{FilterTag, AGNOSTIC, NOT_SURE};

/// A labelled value offered as an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Term {
    pub value: &'static str,
    pub label: &'static str,
    pub description: &'static str,
}

const fn term(value: &'static str, label: &'static str, description: &'static str) -> Term {
    Term {
        value,
        label,
        description,
    }
}

pub const ASSURANCE_GOALS: &[Term] = &[
    term("Explainability", "Explainability", "Understand and communicate how a model reaches its outputs."),
    term("Fairness", "Fairness", "Detect and mitigate unjust bias across individuals and groups."),
    term("Privacy", "Privacy", "Protect personal data used to train or query a system."),
    term("Reliability", "Reliability", "Ensure consistent, accurate behaviour under expected conditions."),
    term("Safety", "Safety", "Prevent harmful behaviour and failures with serious consequences."),
    term("Security", "Security", "Defend the system against adversarial manipulation and misuse."),
    term("Transparency", "Transparency", "Make the system's design, data and decisions open to scrutiny."),
];

pub const MODEL_TYPES: &[Term] = &[
    term("neural-network", "Neural networks", "Deep learning models including CNNs, RNNs and transformers."),
    term("traditional", "Traditional ML", "Tree-based, linear and ensemble models."),
    term("probabilistic", "Probabilistic models", "Bayesian and other probabilistic models."),
    term(AGNOSTIC, "Any model", "Show techniques regardless of model architecture."),
];

pub const LIFECYCLE_STAGES: &[Term] = &[
    term("project-design", "Project design", "Scoping, requirements and problem formulation."),
    term("data-collection", "Data collection", "Gathering and preparing training data."),
    term("model-development", "Model development", "Training, tuning and selecting models."),
    term("model-evaluation", "Model evaluation", "Testing and validating model behaviour."),
    term("deployment", "Deployment", "Releasing the model into its operating environment."),
    term("monitoring", "Monitoring", "Observing the deployed system over time."),
];

pub const TECHNIQUE_TYPES: &[Term] = &[
    term("algorithmic", "Algorithmic", "Computational methods applied to a model or its data."),
    term("procedural", "Procedural", "Processes, frameworks and governance practices."),
    term("testing", "Testing", "Structured tests of system behaviour."),
    term("documentation", "Documentation", "Artefacts that record decisions and properties."),
];

pub const EXPERTISE_LEVELS: &[Term] = &[
    term("ml-engineering", "ML engineering", "Hands-on experience building and training models."),
    term("statistics", "Statistics", "Comfort with statistical testing and inference."),
    term("domain-knowledge", "Domain knowledge", "Understanding of the application area."),
    term("low-code", "Low code", "Usable without programming experience."),
];

pub const DATA_REQUIREMENTS: &[Term] = &[
    term("labelled-data", "Labelled data", "Ground-truth labels for the evaluation set."),
    term("training-data", "Training data", "Access to the data the model was trained on."),
    term("access-to-model-internals", "Model internals", "Access to weights, gradients or architecture."),
    term("no-special-requirements", "No special requirements", "Works from model inputs and outputs alone."),
];

pub const NEURAL_NETWORK_FAMILY: &[&str] = &["neural-network", "cnn", "rnn", "transformer"];

pub const TRADITIONAL_FAMILY: &[&str] = &["tree-based", "linear", "logistic-regression", "ensemble"];

static SUBCATEGORIES: Lazy<HashMap<&'static str, Vec<Term>>> = Lazy::new(|| {
    HashMap::from([
        (
            "Explainability",
            vec![
                term("feature-analysis", "Feature analysis", "Attribute outputs to input features."),
                term("model-approximation", "Model approximation", "Explain with simpler surrogate models."),
                term("example-based", "Example-based", "Explain through counterfactuals and prototypes."),
                term("visualization", "Visualization", "Inspect internals and behaviour visually."),
            ],
        ),
        (
            "Fairness",
            vec![
                term("group-fairness", "Group fairness", "Compare outcomes across protected groups."),
                term("individual-fairness", "Individual fairness", "Treat similar individuals similarly."),
                term("causal-fairness", "Causal fairness", "Reason about discrimination causally."),
            ],
        ),
        (
            "Privacy",
            vec![
                term("formal-guarantees", "Formal guarantees", "Mathematically bounded disclosure."),
                term("data-minimisation", "Data minimisation", "Reduce or transform personal data."),
            ],
        ),
        (
            "Reliability",
            vec![
                term("uncertainty-quantification", "Uncertainty quantification", "Estimate confidence in outputs."),
                term("robustness", "Robustness", "Stability under shifted or perturbed inputs."),
            ],
        ),
        (
            "Transparency",
            vec![
                term("documentation", "Documentation", "Record model and data provenance."),
                term("auditability", "Auditability", "Enable external review of decisions."),
            ],
        ),
    ])
});

/// Description shown next to a goal name, if the goal is known.
pub fn goal_description(goal: &str) -> Option<&'static str> {
    ASSURANCE_GOALS
        .iter()
        .find(|t| t.value == goal)
        .map(|t| t.description)
}

/// Subcategories offered after `goal` was chosen. Keys are case-sensitive.
pub fn subcategories_for(goal: &str) -> Option<&'static [Term]> {
    SUBCATEGORIES.get(goal).map(Vec::as_slice)
}

/// The extra tag fragments a model-type answer also accepts.
pub fn model_family(value: &str) -> Option<&'static [&'static str]> {
    match value {
        "neural-network" => Some(NEURAL_NETWORK_FAMILY),
        "traditional" => Some(TRADITIONAL_FAMILY),
        _ => None,
    }
}

/// Terms known for a dimension.
pub fn terms_for(filter_tag: FilterTag) -> &'static [Term] {
    match filter_tag {
        FilterTag::AssuranceGoals => ASSURANCE_GOALS,
        FilterTag::AssuranceGoalCategory => &[],
        FilterTag::ApplicableModels => MODEL_TYPES,
        FilterTag::LifecycleStage => LIFECYCLE_STAGES,
        FilterTag::TechniqueType => TECHNIQUE_TYPES,
        FilterTag::ExpertiseNeeded => EXPERTISE_LEVELS,
        FilterTag::DataRequirements => DATA_REQUIREMENTS,
    }
}

/// Display label for an answer value, falling back to a humanized value.
pub fn label_for(filter_tag: FilterTag, value: &str) -> String {
    if value == NOT_SURE {
        return "Not sure".to_string();
    }
    let known = terms_for(filter_tag)
        .iter()
        .chain(SUBCATEGORIES.values().flatten())
        .find(|t| t.value == value);
    match known {
        Some(t) => t.label.to_string(),
        None => humanize(value),
    }
}

fn humanize(value: &str) -> String {
    let spaced = value.replace(['-', '_'], " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
