use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Environment variable overriding the data directory
pub const WORKLOG_DIR_ENV: &str = "WORKLOG_DIR";

/// Get the worklog data directory ($WORKLOG_DIR, or ~/.worklog)
///
/// Home is `$HOME`, falling back to the platform home directory when it is unset.
pub fn get_worklog_dir() -> Result<PathBuf> {
    let home = env::var_os("HOME").map(PathBuf::from).or_else(dirs::home_dir);
    resolve_worklog_dir(env::var(WORKLOG_DIR_ENV).ok(), home)
}

fn resolve_worklog_dir(override_dir: Option<String>, home: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = override_dir.filter(|dir| !dir.trim().is_empty()) {
        return Ok(PathBuf::from(dir));
    }

    let home = home.context("Could not determine home directory (HOME not set)")?;
    Ok(home.join(".worklog"))
}
