//! Worklog - Search a local history of recorded work
//!
//! This library searches snapshots of work activity (commits, PR events, editor
//! sessions, AI-assistant sessions, terminal and filesystem summaries) stored on
//! disk by external collectors. It supports:
//!
//! - Exact substring, regex, and edit-distance fuzzy matching over titles and descriptions
//! - Filtering by source, project, and date range, with noise items excluded
//! - Ranking by relevance, then recency
//! - Rendering results as a timeline, grouped by project, or as JSON
//!
//! # Example
//!
//! ```no_run
//! use worklog::{DefaultNoiseClassifier, JsonHistoryStore, SearchOptions, search};
//! use worklog::models::OutputFormat;
//! use worklog::output::{FormatOptions, format_results};
//!
//! let store = JsonHistoryStore::new("/Users/alice/.worklog/history");
//! let options = SearchOptions { fuzzy: true, ..SearchOptions::new("authentication") };
//! let results = search(&store, &DefaultNoiseClassifier, &options)?;
//! println!("{}", format_results(&results.to_vec(), OutputFormat::Timeline, &FormatOptions::default()));
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod filters;
pub mod models;
pub mod output;
pub mod parsers;
pub mod search;
pub mod store;
pub mod utils;

// Re-export commonly used types
pub use filters::{DefaultNoiseClassifier, NoNoise, NoiseClassifier};
pub use models::{HistoryEntry, MatchType, SearchOptions, SearchResult, SourceType, WorkItem};
pub use search::{SearchResults, search, search_entries};
pub use store::{HistoryStore, JsonHistoryStore, MemoryHistoryStore};
pub use utils::format_path_with_tilde;
