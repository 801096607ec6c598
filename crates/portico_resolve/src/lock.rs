//! Per-unit build serialization.
//!
//! The check→compile→commit sequence is not atomic, so two threads
//! resolving the same stale unit could both observe staleness and both
//! invoke the compiler. The arena hands out one mutex per normalized
//! unit path; at most one compilation proceeds per unit at a time, and
//! a second caller blocks until the first commits, then observes
//! freshness.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// An arena of mutexes keyed by normalized unit path.
#[derive(Default)]
pub struct LockArena {
    locks: Mutex<HashMap<PathBuf, Arc<Mutex<()>>>>,
}

impl LockArena {
    /// Creates an empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the lock for a unit path, creating it on first use.
    ///
    /// Callers hold the returned lock across their whole
    /// check→compile→commit sequence.
    pub fn lock_for(&self, path: &Path) -> Arc<Mutex<()>> {
        let mut locks = self.locks.lock().unwrap_or_else(|p| p.into_inner());
        locks
            .entry(path.to_path_buf())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }
}
