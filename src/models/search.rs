use std::fmt;

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::history::{HistoryEntry, WorkItem};
use super::source::SourceType;

/// How a piece of text matched the query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchType {
    Exact,
    Fuzzy,
    Regex,
}

impl MatchType {
    pub fn as_str(self) -> &'static str {
        match self {
            MatchType::Exact => "exact",
            MatchType::Fuzzy => "fuzzy",
            MatchType::Regex => "regex",
        }
    }
}

impl fmt::Display for MatchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Query and filters for a single search
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchOptions {
    pub query: String,
    pub regex: bool,
    pub fuzzy: bool,
    /// Inclusive source filter; empty means any source
    pub sources: Vec<SourceType>,
    /// Case-insensitive project substrings; empty means any project
    pub projects: Vec<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    /// Non-positive or absent returns every result
    pub limit: Option<i64>,
}

impl SearchOptions {
    pub fn new(query: impl Into<String>) -> Self {
        Self { query: query.into(), ..Self::default() }
    }
}

/// A ranked hit, borrowing the item and its owning entry from the loaded history
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchResult<'a> {
    pub item: &'a WorkItem,
    pub entry: &'a HistoryEntry,
    pub score: f64,
    pub match_type: MatchType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Timeline,
    Grouped,
    Json,
}
