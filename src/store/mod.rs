//! History stores: where search reads its snapshot of recorded work from
//!
//! [`search`](crate::search::search) takes a store as an explicit argument, so tests
//! and embedders hand in a [`MemoryHistoryStore`] while the CLI uses a
//! [`JsonHistoryStore`] rooted at the configured history directory.

pub mod json;

use anyhow::Result;

pub use json::JsonHistoryStore;

use crate::models::HistoryEntry;

/// Source of stored history entries
pub trait HistoryStore {
    /// Load every stored entry. Failures abort the search that requested them.
    fn load_history(&self) -> Result<Vec<HistoryEntry>>;
}

impl<S: HistoryStore + ?Sized> HistoryStore for &S {
    fn load_history(&self) -> Result<Vec<HistoryEntry>> {
        (**self).load_history()
    }
}

/// In-memory store, returns a copy of its entries on every load
#[derive(Debug, Clone, Default)]
pub struct MemoryHistoryStore {
    entries: Vec<HistoryEntry>,
}

impl MemoryHistoryStore {
    pub fn new(entries: Vec<HistoryEntry>) -> Self {
        Self { entries }
    }
}

impl HistoryStore for MemoryHistoryStore {
    fn load_history(&self) -> Result<Vec<HistoryEntry>> {
        Ok(self.entries.clone())
    }
}
