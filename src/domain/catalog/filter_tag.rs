//! FilterTag - the closed set of dimensions a question can filter on.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Answer meaning "I don't know" - never narrows the result set.
pub const NOT_SURE: &str = "not-sure";

/// Answer meaning "any will do" - never narrows the result set.
pub const AGNOSTIC: &str = "agnostic";

/// True for the reserved "do not filter on this dimension" answers.
pub fn is_sentinel(value: &str) -> bool {
    value == NOT_SURE || value == AGNOSTIC
}

/// The namespace or pseudo-namespace a question filters on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FilterTag {
    /// Flat goal names in `Technique::assurance_goals`.
    #[serde(rename = "assurance_goals")]
    AssuranceGoals,
    /// Two-level `assurance-goal-category/<goal>/<subcategory>` tags.
    #[serde(rename = "assurance-goal-category")]
    AssuranceGoalCategory,
    #[serde(rename = "applicable-models")]
    ApplicableModels,
    #[serde(rename = "lifecycle-stage")]
    LifecycleStage,
    #[serde(rename = "technique-type")]
    TechniqueType,
    #[serde(rename = "expertise-needed")]
    ExpertiseNeeded,
    #[serde(rename = "data-requirements")]
    DataRequirements,
}

impl FilterTag {
    pub fn all() -> &'static [FilterTag] {
        &[
            FilterTag::AssuranceGoals,
            FilterTag::AssuranceGoalCategory,
            FilterTag::ApplicableModels,
            FilterTag::LifecycleStage,
            FilterTag::TechniqueType,
            FilterTag::ExpertiseNeeded,
            FilterTag::DataRequirements,
        ]
    }

    /// The string form used in configuration and as a tag prefix.
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterTag::AssuranceGoals => "assurance_goals",
            FilterTag::AssuranceGoalCategory => "assurance-goal-category",
            FilterTag::ApplicableModels => "applicable-models",
            FilterTag::LifecycleStage => "lifecycle-stage",
            FilterTag::TechniqueType => "technique-type",
            FilterTag::ExpertiseNeeded => "expertise-needed",
            FilterTag::DataRequirements => "data-requirements",
        }
    }

    /// The tag namespace, or `None` when the dimension is not stored in `tags`.
    pub fn tag_namespace(&self) -> Option<&'static str> {
        match self {
            FilterTag::AssuranceGoals => None,
            other => Some(other.as_str()),
        }
    }
}

impl fmt::Display for FilterTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterTag {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FilterTag::all()
            .iter()
            .copied()
            .find(|tag| tag.as_str() == s)
            .ok_or_else(|| {
                ValidationError::invalid_format("filter_tag", format!("unknown filter tag '{}'", s))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinels_are_recognized() {
        assert!(is_sentinel("not-sure"));
        assert!(is_sentinel("agnostic"));
        assert!(!is_sentinel("neural-network"));
    }

    #[test]
    fn parses_every_variant_from_its_string() {
        for tag in FilterTag::all() {
            assert_eq!(tag.as_str().parse::<FilterTag>().unwrap(), *tag);
        }
    }

    #[test]
    fn rejects_unknown_strings() {
        assert!("colour".parse::<FilterTag>().is_err());
    }

    #[test]
    fn assurance_goals_has_no_tag_namespace() {
        assert_eq!(FilterTag::AssuranceGoals.tag_namespace(), None);
        assert_eq!(
            FilterTag::LifecycleStage.tag_namespace(),
            Some("lifecycle-stage")
        );
    }

    #[test]
    fn serde_uses_configuration_names() {
        let json = serde_json::to_string(&FilterTag::ApplicableModels).unwrap();
        assert_eq!(json, "\"applicable-models\"");
        let tag: FilterTag = serde_json::from_str("\"assurance_goals\"").unwrap();
        assert_eq!(tag, FilterTag::AssuranceGoals);
    }
}
