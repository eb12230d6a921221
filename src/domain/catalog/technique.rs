//! Technique - one catalog record describing an AI-assurance method.

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

/// Tag carried by techniques that apply to any model architecture.
pub const MODEL_AGNOSTIC_TAG: &str = "applicable-models/agnostic";

/// A catalog entry. Owned by the host; the finder only reads it.
///
/// Tags are hierarchical strings (`namespace/segment/leaf`). Missing, null
/// or non-array goal and tag fields read as empty, and non-string entries
/// are dropped, so a sparse record still loads and matches by default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Technique {
    pub slug: String,
    pub name: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient_strings")]
    pub assurance_goals: Vec<String>,
    #[serde(default, deserialize_with = "lenient_strings")]
    pub tags: Vec<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LooseEntry {
    Text(String),
    Other(IgnoredAny),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LooseList {
    Items(Vec<LooseEntry>),
    Other(IgnoredAny),
}

fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<LooseEntry>::deserialize(deserializer)? {
        Some(LooseEntry::Text(text)) => text,
        _ => String::new(),
    })
}

/// Reads a string list, keeping only the string entries.
fn lenient_strings<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let list = Option::<LooseList>::deserialize(deserializer)?;
    Ok(match list {
        Some(LooseList::Items(entries)) => entries
            .into_iter()
            .filter_map(|entry| match entry {
                LooseEntry::Text(text) => Some(text),
                LooseEntry::Other(_) => None,
            })
            .collect(),
        _ => Vec::new(),
    })
}

impl Technique {
    /// Creates a technique with no goals or tags.
    pub fn new(slug: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            name: name.into(),
            description: String::new(),
            assurance_goals: Vec::new(),
            tags: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_goals<I, S>(mut self, goals: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.assurance_goals = goals.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Returns every tag that lives under `namespace/`.
    pub fn tags_in<'a>(&'a self, namespace: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.tags
            .iter()
            .map(String::as_str)
            .filter(move |tag| {
                tag.len() > namespace.len()
                    && tag.starts_with(namespace)
                    && tag.as_bytes()[namespace.len()] == b'/'
            })
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    pub fn has_goal(&self, goal: &str) -> bool {
        self.assurance_goals.iter().any(|g| g == goal)
    }

    /// True if the technique declares itself usable with any model type.
    pub fn is_model_agnostic(&self) -> bool {
        self.has_tag(MODEL_AGNOSTIC_TAG)
    }
}

/// Returns the final `/`-separated segment of a tag.
pub fn leaf_segment(tag: &str) -> &str {
    tag.rsplit('/').next().unwrap_or(tag)
}
