//! Full-scan search over stored work history.
//!
//! A search loads every entry from a [`HistoryStore`], then for each item:
//! drops noise, applies the source/project/date filters, matches title and
//! description, and keeps items where either field matched. Hits are ranked by
//! score and recency and optionally truncated.
//!
//! There is no index; each call scans the whole snapshot and keeps no state
//! between calls.

pub mod matcher;
pub mod ranking;

use anyhow::Result;
use chrono::{DateTime, Utc};
use tracing::debug;

pub use matcher::{Matcher, TextMatch, levenshtein, match_text};
pub use ranking::{CompositeMatch, Ranked, rank, score_item};

use crate::filters::{NoiseClassifier, passes_filters};
use crate::models::{HistoryEntry, MatchType, SearchOptions, SearchResult, WorkItem};
use crate::store::HistoryStore;

/// Position of an item inside a loaded history
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ItemRef {
    entry: usize,
    project: usize,
    item: usize,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Hit {
    at: ItemRef,
    timestamp: DateTime<Utc>,
    score: f64,
    match_type: MatchType,
}

impl Ranked for Hit {
    fn score(&self) -> f64 {
        self.score
    }

    fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

/// Ranked hits together with the history snapshot they point into
#[derive(Debug, Clone)]
pub struct SearchResults {
    entries: Vec<HistoryEntry>,
    hits: Vec<Hit>,
}

impl SearchResults {
    pub fn len(&self) -> usize {
        self.hits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    /// Results in rank order
    pub fn iter(&self) -> impl Iterator<Item = SearchResult<'_>> {
        self.hits.iter().map(|hit| resolve(&self.entries, hit))
    }

    pub fn to_vec(&self) -> Vec<SearchResult<'_>> {
        self.iter().collect()
    }

    /// The full snapshot that was searched
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }
}

/// Load history from `store` and search it
///
/// # Errors
///
/// Returns the store's error unchanged if history can't be loaded. Matching,
/// filtering, and ranking never fail.
pub fn search<S, N>(store: &S, noise: &N, options: &SearchOptions) -> Result<SearchResults>
where
    S: HistoryStore + ?Sized,
    N: NoiseClassifier + ?Sized,
{
    let entries = store.load_history()?;
    let hits = collect_hits(&entries, noise, options);

    Ok(SearchResults { entries, hits })
}

/// Search an already-loaded snapshot, borrowing results from it
pub fn search_entries<'a, N>(
    entries: &'a [HistoryEntry],
    noise: &N,
    options: &SearchOptions,
) -> Vec<SearchResult<'a>>
where
    N: NoiseClassifier + ?Sized,
{
    collect_hits(entries, noise, options).iter().map(|hit| resolve(entries, hit)).collect()
}

fn collect_hits<N>(entries: &[HistoryEntry], noise: &N, options: &SearchOptions) -> Vec<Hit>
where
    N: NoiseClassifier + ?Sized,
{
    let matcher = Matcher::from_options(options);
    let mut hits = Vec::new();
    let mut scanned = 0usize;

    for (entry_idx, entry) in entries.iter().enumerate() {
        for (project_idx, project) in entry.projects.iter().enumerate() {
            for (item_idx, item) in project.items.iter().enumerate() {
                scanned += 1;

                if noise.is_noise(item) || !passes_filters(item, options) {
                    continue;
                }

                if let Some(CompositeMatch { score, match_type }) = score_item(item, &matcher) {
                    hits.push(Hit {
                        at: ItemRef { entry: entry_idx, project: project_idx, item: item_idx },
                        timestamp: item.timestamp,
                        score,
                        match_type,
                    });
                }
            }
        }
    }

    let matched = hits.len();
    rank(&mut hits, options.limit);

    debug!(
        query = %options.query,
        entries = entries.len(),
        scanned,
        matched,
        returned = hits.len(),
        "Search complete"
    );

    hits
}

fn resolve<'a>(entries: &'a [HistoryEntry], hit: &Hit) -> SearchResult<'a> {
    let entry = &entries[hit.at.entry];
    let item: &WorkItem = &entry.projects[hit.at.project].items[hit.at.item];

    SearchResult { item, entry, score: hit.score, match_type: hit.match_type }
}
