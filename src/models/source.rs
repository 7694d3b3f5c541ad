use std::fmt;
use std::str::FromStr;

use anyhow::{Result, bail};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Origin of a work item
///
/// The set is closed: an unknown tag fails to deserialize or parse instead of
/// falling into a catch-all variant.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum SourceType {
    Git,
    Github,
    Vscode,
    Cursor,
    Terminal,
    Filesystem,
    Claude,
    Codex,
    Copilot,
    Gemini,
}

/// Display metadata for a source tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceInfo {
    pub tag: &'static str,
    pub name: &'static str,
    pub emoji: &'static str,
}

const SOURCE_INFO: [SourceInfo; 10] = [
    SourceInfo { tag: "git", name: "Git", emoji: "📝" },
    SourceInfo { tag: "github", name: "GitHub", emoji: "🐙" },
    SourceInfo { tag: "vscode", name: "VS Code", emoji: "💻" },
    SourceInfo { tag: "cursor", name: "Cursor", emoji: "🖱️" },
    SourceInfo { tag: "terminal", name: "Terminal", emoji: "⌨️" },
    SourceInfo { tag: "filesystem", name: "Filesystem", emoji: "📁" },
    SourceInfo { tag: "claude", name: "Claude Code", emoji: "🤖" },
    SourceInfo { tag: "codex", name: "Codex", emoji: "🧠" },
    SourceInfo { tag: "copilot", name: "Copilot", emoji: "✈️" },
    SourceInfo { tag: "gemini", name: "Gemini", emoji: "✨" },
];

impl SourceType {
    pub const ALL: [SourceType; 10] = [
        SourceType::Git,
        SourceType::Github,
        SourceType::Vscode,
        SourceType::Cursor,
        SourceType::Terminal,
        SourceType::Filesystem,
        SourceType::Claude,
        SourceType::Codex,
        SourceType::Copilot,
        SourceType::Gemini,
    ];

    pub fn info(self) -> &'static SourceInfo {
        // Variants are declared in table order
        &SOURCE_INFO[self as usize]
    }

    pub fn as_str(self) -> &'static str {
        self.info().tag
    }

    pub fn display_name(self) -> &'static str {
        self.info().name
    }

    pub fn emoji(self) -> &'static str {
        self.info().emoji
    }
}

impl fmt::Display for SourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SourceType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let lower = s.trim().to_lowercase();
        match SourceType::ALL.iter().find(|source| source.as_str() == lower) {
            Some(source) => Ok(*source),
            None => bail!("Unknown source type: {}", s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_info_table_matches_variants() {
        for source in SourceType::ALL {
            let json = serde_json::to_string(&source).unwrap();
            assert_eq!(json, format!("\"{}\"", source.info().tag));
        }
    }

    #[test]
    fn test_display_metadata() {
        assert_eq!(SourceType::Github.display_name(), "GitHub");
        assert_eq!(SourceType::Claude.as_str(), "claude");
        assert_eq!(SourceType::Git.emoji(), "📝");
    }

    #[test]
    fn test_from_str_case_insensitive() {
        assert_eq!("GIT".parse::<SourceType>().unwrap(), SourceType::Git);
        assert_eq!(" vscode ".parse::<SourceType>().unwrap(), SourceType::Vscode);
    }

    #[test]
    fn test_unknown_tag_rejected() {
        assert!("slack".parse::<SourceType>().is_err());
        assert!(serde_json::from_str::<SourceType>("\"slack\"").is_err());
    }
}
