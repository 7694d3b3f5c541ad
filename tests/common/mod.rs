//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, TimeZone, Utc};
use tempfile::TempDir;
use worklog::models::{DateRange, HistoryEntry, Project, SourceType, WorkItem};

/// Builder for a worklog data directory (`<tmp>/history/*.json`)
pub struct WorklogDirBuilder {
    temp_dir: TempDir,
}

impl WorklogDirBuilder {
    /// Create a new builder with an empty history directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        fs::create_dir(temp_dir.path().join("history")).expect("Failed to create history dir");
        Self { temp_dir }
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn history_dir(&self) -> PathBuf {
        self.temp_dir.path().join("history")
    }

    /// Serialize an entry into `history/<id>.json`
    pub fn with_entry(self, entry: &HistoryEntry) -> Self {
        let json = serde_json::to_string_pretty(entry).expect("Failed to serialize entry");
        self.with_raw_file(&format!("{}.json", entry.id), &json)
    }

    /// Write arbitrary content into the history directory
    pub fn with_raw_file(self, name: &str, content: &str) -> Self {
        fs::write(self.history_dir().join(name), content).expect("Failed to write history file");
        self
    }

    pub fn with_config(self, content: &str) -> Self {
        fs::write(self.temp_dir.path().join("config.toml"), content)
            .expect("Failed to write config.toml");
        self
    }

    /// Build and return the temp directory (consumes self)
    pub fn build(self) -> TempDir {
        self.temp_dir
    }
}

impl Default for WorklogDirBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for work items
pub struct ItemBuilder {
    item: WorkItem,
}

impl ItemBuilder {
    pub fn new(title: &str) -> Self {
        Self {
            item: WorkItem {
                source: SourceType::Git,
                timestamp: day(2025, 1, 10),
                title: title.to_string(),
                description: None,
                project: None,
                metadata: None,
            },
        }
    }

    pub fn source(mut self, source: SourceType) -> Self {
        self.item.source = source;
        self
    }

    pub fn timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.item.timestamp = timestamp;
        self
    }

    pub fn description(mut self, description: &str) -> Self {
        self.item.description = Some(description.to_string());
        self
    }

    pub fn project(mut self, project: &str) -> Self {
        self.item.project = Some(project.to_string());
        self
    }

    pub fn build(self) -> WorkItem {
        self.item
    }
}

/// Build an entry with a single project holding `items`
pub fn entry(id: &str, items: Vec<WorkItem>) -> HistoryEntry {
    let start = day(2025, 1, 1);
    let mut sources: Vec<SourceType> = items.iter().map(|item| item.source).collect();
    sources.sort();
    sources.dedup();

    HistoryEntry {
        id: id.to_string(),
        timestamp: start,
        date_range: DateRange { start, end: day(2025, 1, 31) },
        sources,
        projects: vec![Project {
            name: "workspace".to_string(),
            path: "/work/workspace".to_string(),
            items,
        }],
    }
}

pub fn day(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap()
}
