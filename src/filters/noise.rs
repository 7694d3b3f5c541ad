use crate::models::{SourceType, WorkItem};

/// Decides whether a work item is uninteresting and should never be searched
pub trait NoiseClassifier {
    fn is_noise(&self, item: &WorkItem) -> bool;
}

impl<F> NoiseClassifier for F
where
    F: Fn(&WorkItem) -> bool,
{
    fn is_noise(&self, item: &WorkItem) -> bool {
        self(item)
    }
}

/// Treats every item as signal
#[derive(Debug, Clone, Copy, Default)]
pub struct NoNoise;

impl NoiseClassifier for NoNoise {
    fn is_noise(&self, _item: &WorkItem) -> bool {
        false
    }
}

const MERGE_PREFIXES: [&str; 3] =
    ["merge branch", "merge pull request", "merge remote-tracking branch"];

const AUTOSQUASH_PREFIXES: [&str; 2] = ["fixup!", "squash!"];

const WIP_TITLES: [&str; 3] = ["wip", "wip.", "work in progress"];

const BUILD_ARTIFACT_MARKERS: [&str; 4] = ["node_modules", "target/", ".lock", "dist/"];

/// Heuristics for commits and file activity that carry no information
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultNoiseClassifier;

impl NoiseClassifier for DefaultNoiseClassifier {
    fn is_noise(&self, item: &WorkItem) -> bool {
        let title = item.title.trim().to_lowercase();
        if title.is_empty() {
            return true;
        }

        match item.source {
            SourceType::Git | SourceType::Github => {
                MERGE_PREFIXES.iter().any(|prefix| title.starts_with(prefix))
                    || AUTOSQUASH_PREFIXES.iter().any(|prefix| title.starts_with(prefix))
                    || WIP_TITLES.contains(&title.as_str())
            }
            SourceType::Filesystem | SourceType::Terminal => {
                BUILD_ARTIFACT_MARKERS.iter().any(|marker| title.contains(marker))
            }
            _ => false,
        }
    }
}
