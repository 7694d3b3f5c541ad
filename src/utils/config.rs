//! Optional `config.toml` in the worklog directory

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::models::OutputFormat;
use crate::output::{DisplayZone, parse_time_zone};

pub const CONFIG_FILENAME: &str = "config.toml";

const HISTORY_DIRNAME: &str = "history";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Where history entries are stored; relative paths resolve against the worklog dir
    pub history_dir: Option<PathBuf>,
    /// Zone for rendering: an IANA name ("Asia/Tokyo", "UTC") or a fixed offset ("+09:00")
    pub time_zone: Option<String>,
    pub default_limit: Option<i64>,
    pub default_format: Option<OutputFormat>,
}

impl Config {
    /// Load `config.toml` from `worklog_dir`; a missing file yields defaults
    pub fn load(worklog_dir: &Path) -> Result<Self> {
        let path = worklog_dir.join(CONFIG_FILENAME);
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&contents).with_context(|| format!("Invalid config file: {}", path.display()))
    }

    pub fn parse(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents)?;
        // Reject a bad time zone at load time
        config.time_zone()?;
        Ok(config)
    }

    pub fn history_dir(&self, worklog_dir: &Path) -> PathBuf {
        match &self.history_dir {
            Some(dir) if dir.is_absolute() => dir.clone(),
            Some(dir) => worklog_dir.join(dir),
            None => worklog_dir.join(HISTORY_DIRNAME),
        }
    }

    pub fn time_zone(&self) -> Result<Option<DisplayZone>> {
        self.time_zone.as_deref().map(parse_time_zone).transpose()
    }
}
