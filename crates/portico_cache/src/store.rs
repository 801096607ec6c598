//! Cache store: the compile-or-reuse decision for each source unit.
//!
//! Combines ledger freshness with artifact presence. A unit is fresh
//! iff its hash record exists, matches the current content, and the
//! artifact is on disk; any one condition failing forces a rebuild.
//! `should_compile` is the canonical gate every resolver consults.

use std::path::{Path, PathBuf};

use portico_common::SourceUnit;

use crate::error::CacheError;
use crate::layout;
use crate::ledger::HashLedger;
use crate::record::BuildRecord;

/// A compiled native artifact for one source unit.
///
/// Holds the artifact's on-disk location. The store references
/// artifacts in place; it never copies them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheArtifact {
    path: PathBuf,
}

impl CacheArtifact {
    /// Wraps an artifact location produced by the compiler invoker.
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }

    /// The artifact's location on disk.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// The compile-or-reuse decision for a unit, with an optional
/// diagnostic explaining why the cache could not be trusted.
#[derive(Debug)]
pub struct CompileDecision {
    /// Whether the unit must be (re)compiled.
    pub compile: bool,

    /// A cache problem that forced the decision (corrupt hash record).
    /// The outward action is the same as ordinary staleness; this is
    /// kept for diagnostics only.
    pub warning: Option<CacheError>,
}

/// Answers "is there a usable cached artifact for this unit right now?"
/// and records build outputs once they exist.
///
/// `ignore_cache` is fixed at construction: when set, every freshness
/// check reports stale, forcing full rebuild of every unit touched
/// through this store.
pub struct CacheStore {
    ignore_cache: bool,
}

impl CacheStore {
    /// Creates a store. Pass `ignore_cache = true` to force rebuilds.
    pub fn new(ignore_cache: bool) -> Self {
        Self { ignore_cache }
    }

    /// Whether this store bypasses freshness checks entirely.
    pub fn ignores_cache(&self) -> bool {
        self.ignore_cache
    }

    /// Existence check for a hash record, independent of correctness.
    pub fn is_hashed(&self, unit: &SourceUnit) -> bool {
        layout::hash_file_path(unit).exists()
    }

    /// Existence check for the artifact at its expected location.
    pub fn is_built(&self, unit: &SourceUnit) -> bool {
        layout::artifact_path(unit).exists()
    }

    /// Existence check for the hidden cache directory itself.
    ///
    /// Distinguishes "never touched" from "touched but stale".
    pub fn is_cache_dir_present(&self, unit: &SourceUnit) -> bool {
        layout::cache_dir(unit).is_dir()
    }

    /// The expected artifact location for a unit.
    pub fn artifact_path(&self, unit: &SourceUnit) -> PathBuf {
        layout::artifact_path(unit)
    }

    /// The compound compile-or-reuse gate.
    ///
    /// True if the store ignores the cache, the content fingerprint
    /// changed (or was never recorded), or no artifact exists. I/O
    /// failures while probing are reported, not swallowed.
    pub fn should_compile(&self, unit: &SourceUnit) -> Result<bool, CacheError> {
        Ok(self.should_compile_detailed(unit)?.compile)
    }

    /// Like [`should_compile`](Self::should_compile), but carries the
    /// diagnostic when a corrupt hash record forced the decision.
    pub fn should_compile_detailed(&self, unit: &SourceUnit) -> Result<CompileDecision, CacheError> {
        if self.ignore_cache {
            return Ok(CompileDecision {
                compile: true,
                warning: None,
            });
        }

        let (changed, warning) = match HashLedger::has_changed(unit) {
            Ok(changed) => (changed, None),
            // Unreadable record: conservatively stale, but keep the
            // diagnostic for the caller.
            Err(corrupt @ CacheError::Corrupt { .. }) => (true, Some(corrupt)),
            Err(e) => return Err(e),
        };

        Ok(CompileDecision {
            compile: changed || !self.is_built(unit),
            warning,
        })
    }

    /// Commits a successful build: registers the artifact, then writes
    /// the hash record and build record.
    ///
    /// This is the only path that (re)creates a hash record. The
    /// artifact must already exist on disk when this is called, so the
    /// ledger can never claim freshness for a nonexistent artifact.
    pub fn commit_build(&self, unit: &SourceUnit, artifact: &CacheArtifact) -> Result<(), CacheError> {
        if !artifact.path().exists() {
            return Err(CacheError::Io {
                path: artifact.path().to_path_buf(),
                source: std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "artifact missing at commit time",
                ),
            });
        }

        let fingerprint = HashLedger::record_fingerprint(unit)?;
        BuildRecord::new(artifact.path(), fingerprint).save(unit)
    }

    /// Loads the advisory build record for a unit, if any.
    pub fn read_record(&self, unit: &SourceUnit) -> Option<BuildRecord> {
        BuildRecord::load(unit)
    }
}
