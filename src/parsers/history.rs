use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};

use crate::models::HistoryEntry;
use crate::utils::validate_file_size;

/// Parse a single history entry file (one JSON document)
pub fn parse_history_file(path: &Path) -> Result<HistoryEntry> {
    // Open file and validate size to avoid TOCTOU race condition
    let file = File::open(path)
        .with_context(|| format!("Failed to open history file: {}", path.display()))?;
    validate_file_size(&file, path)?;

    let reader = BufReader::new(file);
    serde_json::from_reader(reader)
        .with_context(|| format!("Failed to parse history file: {}", path.display()))
}
