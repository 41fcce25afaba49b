//! Scene-wide matching.
//!
//! Both entry points return the *names* of matching objects as a sorted set.
//! Callers that need the objects look them up again; the host owns them.

use crate::host::SceneEntity;
use crate::query::Query;
use crate::tags::tag_set;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// How [`filter_by_tags`] combines several tags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterMode {
    /// Object has any of the tags.
    #[default]
    Or,
    /// Object has all of the tags.
    And,
}

impl fmt::Display for FilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterMode::Or => write!(f, "or"),
            FilterMode::And => write!(f, "and"),
        }
    }
}

impl FromStr for FilterMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "or" | "any" => Ok(FilterMode::Or),
            "and" | "all" => Ok(FilterMode::And),
            other => Err(format!("Unknown filter mode '{}' (expected or/and)", other)),
        }
    }
}

/// Names of every object whose tags satisfy `query`.
pub fn match_query<'a, O, I>(query: &str, objects: I) -> BTreeSet<String>
where
    O: SceneEntity + 'a,
    I: IntoIterator<Item = &'a O>,
{
    let parsed = Query::parse(query);
    if parsed.is_empty() {
        return BTreeSet::new();
    }

    let matched: BTreeSet<String> = objects
        .into_iter()
        .filter(|o| parsed.matches(&tag_set(*o)))
        .map(|o| o.name().to_string())
        .collect();

    tracing::debug!(query, matched = matched.len(), "query scan");
    matched
}

/// Names of every object carrying the given tags, combined per `mode`.
///
/// An empty `tags` list matches nothing in either mode.
pub fn filter_by_tags<'a, O, I, S>(objects: I, tags: &[S], mode: FilterMode) -> BTreeSet<String>
where
    O: SceneEntity + 'a,
    I: IntoIterator<Item = &'a O>,
    S: AsRef<str>,
{
    if tags.is_empty() {
        return BTreeSet::new();
    }

    objects
        .into_iter()
        .filter(|o| {
            let set = tag_set(*o);
            match mode {
                FilterMode::Or => set.contains_any(tags),
                FilterMode::And => set.contains_all(tags),
            }
        })
        .map(|o| o.name().to_string())
        .collect()
}
