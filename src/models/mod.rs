//! Data models for recorded work history and search.
//!
//! - [`HistoryEntry`] - A stored snapshot of work, grouped into [`Project`]s
//! - [`WorkItem`] - One commit, PR event, or editor/assistant session
//! - [`SourceType`] - Closed set of item origins with display metadata
//! - [`SearchOptions`] / [`SearchResult`] - Search input and ranked output
//!
//! Timestamps deserialize from RFC 3339 strings or epoch milliseconds via the
//! `deserializers` module.

pub mod history;
pub mod search;
pub mod source;

pub use history::{DateRange, HistoryEntry, Project, WorkItem};
pub use search::{MatchType, OutputFormat, SearchOptions, SearchResult};
pub use source::{SourceInfo, SourceType};
