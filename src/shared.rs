//! Thread-safe access to a [`ResultIndex`]
//!
//! Extraction runs without holding the lock; only the insertion of a fully
//! extracted response happens under the write lock. Each record therefore
//! reaches its flat list and its line bucket inside one critical section, and
//! readers never observe a partially indexed response.

use parking_lot::RwLock;
use std::sync::Arc;

use crate::error::Result;
use crate::extractor::extract;
use crate::index::{LineBucket, ResultIndex, UriEntry};

/// Cloneable handle to an index shared between threads
#[derive(Debug, Clone, Default)]
pub struct SharedResultIndex {
    inner: Arc<RwLock<ResultIndex>>,
}

impl SharedResultIndex {
    pub fn new(index: ResultIndex) -> Self {
        Self {
            inner: Arc::new(RwLock::new(index)),
        }
    }

    /// Parse `raw` and add its records; on error the index is untouched
    pub fn parse(&self, raw: &str) -> Result<()> {
        let fault_uri = self.inner.read().fault_uri().to_string();
        let extraction = extract(raw, &fault_uri)?;
        self.inner.write().insert(extraction);
        Ok(())
    }

    pub fn clear(&self) {
        self.inner.write().clear();
    }

    pub fn keys(&self) -> Vec<String> {
        self.inner.read().keys().map(str::to_string).collect()
    }

    /// Snapshot of the entry for `uri`
    pub fn lookup(&self, uri: &str) -> Option<UriEntry> {
        self.inner.read().lookup(uri).cloned()
    }

    /// Snapshot of the bucket for (`uri`, `line`)
    pub fn lookup_line(&self, uri: &str, line: u32) -> Option<LineBucket> {
        self.inner.read().lookup_line(uri, line).cloned()
    }

    /// Run `f` against the index under the read lock
    pub fn read<R>(&self, f: impl FnOnce(&ResultIndex) -> R) -> R {
        f(&self.inner.read())
    }

    /// Copy of the whole index
    pub fn snapshot(&self) -> ResultIndex {
        self.inner.read().clone()
    }
}

impl From<ResultIndex> for SharedResultIndex {
    fn from(index: ResultIndex) -> Self {
        Self::new(index)
    }
}
