//! Directory-backed history store
//!
//! # Error Handling Strategy
//!
//! Follows a **graceful degradation** approach:
//!
//! - **Missing directory**: treated as an empty history (nothing recorded yet)
//! - **Malformed files**: logged as warnings and skipped
//! - **Failure threshold**: loading fails if more than 50% of the files fail to parse
//! - **Unreadable directory**: returned as an error, which aborts the search

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use tracing::{debug, warn};

use super::HistoryStore;
use crate::models::HistoryEntry;
use crate::parsers::parse_history_file;

/// Maximum number of history files to read (prevent resource exhaustion)
const MAX_HISTORY_FILES: usize = 10_000;

const HISTORY_EXTENSION: &str = "json";

/// Reads one [`HistoryEntry`] per `*.json` file in a directory
#[derive(Debug, Clone)]
pub struct JsonHistoryStore {
    dir: PathBuf,
}

impl JsonHistoryStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// List history files, sorted by file name for a stable load order
    fn history_files(&self) -> Result<Vec<PathBuf>> {
        let entries = fs::read_dir(&self.dir)
            .with_context(|| format!("Failed to read history directory: {}", self.dir.display()))?;

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.context("Failed to read directory entry")?;
            let path = entry.path();

            if !path.is_file() {
                continue;
            }
            if path.extension().and_then(|ext| ext.to_str()) != Some(HISTORY_EXTENSION) {
                continue;
            }

            if files.len() >= MAX_HISTORY_FILES {
                bail!(
                    "Resource limit exceeded: Found more than {} history files in {}",
                    MAX_HISTORY_FILES,
                    self.dir.display()
                );
            }
            files.push(path);
        }

        files.sort();
        Ok(files)
    }
}

impl HistoryStore for JsonHistoryStore {
    fn load_history(&self) -> Result<Vec<HistoryEntry>> {
        if !self.dir.exists() {
            debug!(dir = %self.dir.display(), "History directory missing, treating as empty");
            return Ok(Vec::new());
        }

        let files = self.history_files()?;
        let mut entries = Vec::with_capacity(files.len());
        let mut failed = 0;

        for path in &files {
            match parse_history_file(path) {
                Ok(entry) => entries.push(entry),
                Err(e) => {
                    failed += 1;
                    warn!(path = %path.display(), error = %format!("{:#}", e), "Skipping history file");
                }
            }
        }

        if !files.is_empty() {
            let failure_rate = failed as f64 / files.len() as f64;
            if failure_rate > 0.5 {
                bail!(
                    "Too many parse failures in history directory: {} of {} files failed ({:.1}%)",
                    failed,
                    files.len(),
                    failure_rate * 100.0
                );
            }
        }

        debug!(loaded = entries.len(), skipped = failed, "Loaded history");

        entries.sort_by(|a, b| a.timestamp.cmp(&b.timestamp));
        Ok(entries)
    }
}
