//! JSON parsers for stored history entries
//!
//! Each history entry is one JSON document on disk. Parsing a single file either
//! yields a complete [`HistoryEntry`](crate::models::HistoryEntry) or an error with
//! the offending path attached; deciding whether a bad file is fatal is left to the
//! caller (see [`crate::store::JsonHistoryStore`]).

pub mod deserializers;
pub mod history;

pub use history::parse_history_file;
