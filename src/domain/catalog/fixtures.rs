//! Shared catalog for engine tests.

use super::Technique;

fn technique(slug: &str, goal: &str, tags: &[&str]) -> Technique {
    Technique::new(slug, slug.replace('-', " "))
        .with_goals([goal])
        .with_tags(tags.iter().copied())
}

/// Twenty techniques: 3 explainability, 5 fairness, 4 privacy,
/// 3 reliability, 2 safety, 2 security, 1 transparency.
///
/// Only `cross-validation` is unavailable for neural networks.
pub fn sample_catalog() -> Vec<Technique> {
    vec![
        technique(
            "shap",
            "Explainability",
            &[
                "applicable-models/agnostic",
                "lifecycle-stage/model-development",
                "lifecycle-stage/model-evaluation",
                "technique-type/algorithmic",
                "assurance-goal-category/explainability/feature-analysis/importance",
            ],
        ),
        technique(
            "grad-cam",
            "Explainability",
            &[
                "applicable-models/neural-network/cnn",
                "lifecycle-stage/model-evaluation",
                "technique-type/algorithmic",
                "assurance-goal-category/explainability/visualization",
            ],
        ),
        technique(
            "lime",
            "Explainability",
            &[
                "applicable-models/agnostic",
                "lifecycle-stage/model-evaluation",
                "technique-type/algorithmic",
                "assurance-goal-category/explainability/model-approximation",
            ],
        ),
        technique(
            "demographic-parity",
            "Fairness",
            &[
                "applicable-models/agnostic",
                "lifecycle-stage/model-evaluation",
                "technique-type/testing",
                "assurance-goal-category/fairness/group-fairness",
            ],
        ),
        technique(
            "equalized-odds",
            "Fairness",
            &[
                "applicable-models/agnostic",
                "lifecycle-stage/model-evaluation",
                "technique-type/testing",
                "assurance-goal-category/fairness/group-fairness",
            ],
        ),
        technique(
            "counterfactual-fairness",
            "Fairness",
            &[
                "applicable-models/neural-network",
                "lifecycle-stage/model-development",
                "technique-type/algorithmic",
                "assurance-goal-category/fairness/causal-fairness",
                "expertise-needed/statistics",
            ],
        ),
        technique(
            "fairness-audit",
            "Fairness",
            &[
                "applicable-models/agnostic",
                "lifecycle-stage/deployment",
                "lifecycle-stage/monitoring",
                "technique-type/procedural",
                "assurance-goal-category/fairness/group-fairness",
                "expertise-needed/domain-knowledge",
            ],
        ),
        technique(
            "reweighing",
            "Fairness",
            &[
                "applicable-models/agnostic",
                "lifecycle-stage/data-collection",
                "technique-type/algorithmic",
                "assurance-goal-category/fairness/group-fairness",
                "data-requirements/training-data",
            ],
        ),
        technique(
            "differential-privacy",
            "Privacy",
            &[
                "applicable-models/neural-network",
                "lifecycle-stage/model-development",
                "technique-type/algorithmic",
                "expertise-needed/ml-engineering",
                "data-requirements/training-data",
            ],
        ),
        technique(
            "federated-learning",
            "Privacy",
            &[
                "applicable-models/neural-network/transformer",
                "lifecycle-stage/model-development",
                "technique-type/algorithmic",
                "expertise-needed/ml-engineering",
            ],
        ),
        technique(
            "data-minimisation",
            "Privacy",
            &[
                "applicable-models/agnostic",
                "lifecycle-stage/data-collection",
                "technique-type/procedural",
            ],
        ),
        technique(
            "privacy-impact-assessment",
            "Privacy",
            &[
                "applicable-models/agnostic",
                "lifecycle-stage/project-design",
                "technique-type/documentation",
            ],
        ),
        technique(
            "cross-validation",
            "Reliability",
            &[
                "applicable-models/traditional/tree-based",
                "lifecycle-stage/model-evaluation",
                "technique-type/testing",
            ],
        ),
        technique(
            "drift-detection",
            "Reliability",
            &[
                "applicable-models/agnostic",
                "lifecycle-stage/monitoring",
                "technique-type/testing",
                "data-requirements/production-data",
            ],
        ),
        technique(
            "uncertainty-quantification",
            "Reliability",
            &[
                "applicable-models/neural-network",
                "lifecycle-stage/model-evaluation",
                "technique-type/algorithmic",
            ],
        ),
        technique(
            "red-teaming",
            "Safety",
            &[
                "applicable-models/neural-network/transformer",
                "lifecycle-stage/model-evaluation",
                "technique-type/testing",
                "expertise-needed/domain-knowledge",
            ],
        ),
        technique(
            "safety-case",
            "Safety",
            &[
                "applicable-models/agnostic",
                "lifecycle-stage/project-design",
                "technique-type/documentation",
            ],
        ),
        technique(
            "adversarial-training",
            "Security",
            &[
                "applicable-models/neural-network",
                "lifecycle-stage/model-development",
                "technique-type/algorithmic",
            ],
        ),
        technique(
            "model-watermarking",
            "Security",
            &[
                "applicable-models/neural-network",
                "lifecycle-stage/deployment",
                "technique-type/algorithmic",
            ],
        ),
        technique(
            "model-cards",
            "Transparency",
            &[
                "applicable-models/agnostic",
                "lifecycle-stage/deployment",
                "technique-type/documentation",
            ],
        ),
    ]
}
