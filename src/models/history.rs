use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::source::SourceType;

/// A single unit of recorded work (commit, PR event, editor or assistant session)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkItem {
    pub source: SourceType,
    #[serde(deserialize_with = "crate::parsers::deserializers::deserialize_timestamp")]
    pub timestamp: DateTime<Utc>,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
    /// Collector-specific data, carried through untouched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Map<String, Value>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateRange {
    #[serde(deserialize_with = "crate::parsers::deserializers::deserialize_timestamp")]
    pub start: DateTime<Utc>,
    #[serde(deserialize_with = "crate::parsers::deserializers::deserialize_timestamp")]
    pub end: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub items: Vec<WorkItem>,
}

/// One recorded snapshot of work, grouped by project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub id: String,
    #[serde(deserialize_with = "crate::parsers::deserializers::deserialize_timestamp")]
    pub timestamp: DateTime<Utc>,
    pub date_range: DateRange,
    #[serde(default)]
    pub sources: Vec<SourceType>,
    #[serde(default)]
    pub projects: Vec<Project>,
}

impl HistoryEntry {
    /// Iterate over every item in every project, in stored order
    pub fn items(&self) -> impl Iterator<Item = &WorkItem> {
        self.projects.iter().flat_map(|project| project.items.iter())
    }

    pub fn item_count(&self) -> usize {
        self.projects.iter().map(|project| project.items.len()).sum()
    }
}
