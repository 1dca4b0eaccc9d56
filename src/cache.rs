//! Session cache of parsed tables.

use crate::data::ParsedTable;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// In-memory cache of parsed tables keyed by source path.
///
/// Entries are write-once and live for the whole session; there is no
/// eviction. The cache is single-threaded and shared by reference, so
/// several trigger handlers running on the same event loop can use it.
#[derive(Debug, Default)]
pub struct TableCache {
    tables: RefCell<HashMap<String, Rc<ParsedTable>>>,
}

impl TableCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the cached table for a source path.
    pub fn get(&self, path: &str) -> Option<Rc<ParsedTable>> {
        self.tables.borrow().get(path).cloned()
    }

    /// Store a table under `path` unless one is already cached.
    ///
    /// Returns the entry that ends up in the cache, which is the existing one
    /// when `path` was already present.
    pub fn insert(&self, path: &str, table: ParsedTable) -> Rc<ParsedTable> {
        self.tables
            .borrow_mut()
            .entry(path.to_string())
            .or_insert_with(|| Rc::new(table))
            .clone()
    }

    /// Returns `true` when a table is cached for `path`.
    pub fn contains(&self, path: &str) -> bool {
        self.tables.borrow().contains_key(path)
    }

    /// Number of cached sources.
    pub fn len(&self) -> usize {
        self.tables.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.borrow().is_empty()
    }

    /// Cached source paths, sorted.
    pub fn paths(&self) -> Vec<String> {
        let mut paths: Vec<String> = self.tables.borrow().keys().cloned().collect();
        paths.sort();
        paths
    }
}
