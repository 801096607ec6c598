//! Hash ledger: per-unit content fingerprints and their durable record.
//!
//! The ledger computes XXH3-128 fingerprints of source file bytes and
//! persists them as hex text in the unit's hidden cache directory.
//! [`HashLedger::has_changed`] is the single source of truth for
//! staleness; higher layers call through it rather than re-implementing
//! the comparison.

use std::path::Path;

use portico_common::{ContentHash, SourceUnit};

use crate::error::CacheError;
use crate::layout;

/// Computes and persists content fingerprints for source units.
pub struct HashLedger;

impl HashLedger {
    /// Computes the content fingerprint of a unit's source file.
    ///
    /// Reads the full byte content and hashes it. Pure function of the
    /// file bytes; no side effects.
    pub fn fingerprint(unit: &SourceUnit) -> Result<ContentHash, CacheError> {
        Self::hash_file(unit.path())
    }

    /// Computes the content hash of an arbitrary file.
    pub fn hash_file(path: &Path) -> Result<ContentHash, CacheError> {
        let content = std::fs::read(path).map_err(|e| CacheError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(ContentHash::from_bytes(&content))
    }

    /// Computes the current fingerprint and writes it to the unit's
    /// hash-record path, creating the cache directory as needed.
    ///
    /// Overwrites any prior record.
    pub fn record_fingerprint(unit: &SourceUnit) -> Result<ContentHash, CacheError> {
        let hash = Self::fingerprint(unit)?;
        let cache_dir = layout::cache_dir(unit);
        std::fs::create_dir_all(&cache_dir).map_err(|e| CacheError::Io {
            path: cache_dir,
            source: e,
        })?;
        let path = layout::hash_file_path(unit);
        // A directory squatting on the record path would make the
        // overwrite fail forever; clear it first.
        if path.is_dir() {
            std::fs::remove_dir_all(&path).map_err(|e| CacheError::Io {
                path: path.clone(),
                source: e,
            })?;
        }
        std::fs::write(&path, hash.to_string()).map_err(|e| CacheError::Io { path, source: e })?;
        Ok(hash)
    }

    /// Reads the persisted fingerprint for a unit.
    ///
    /// Fails with [`CacheError::NotHashed`] when no record exists
    /// (meaning "never built", not corrupt state) and with
    /// [`CacheError::Corrupt`] when the record exists but is
    /// unreadable or cannot be parsed back into a digest.
    pub fn read_fingerprint(unit: &SourceUnit) -> Result<ContentHash, CacheError> {
        let path = layout::hash_file_path(unit);
        let text = match std::fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(CacheError::NotHashed {
                    path: unit.path().to_path_buf(),
                })
            }
            // A record that exists but cannot be read is corrupt cache
            // state, not a hard failure: callers rebuild and warn.
            Err(e) => {
                return Err(CacheError::Corrupt {
                    path,
                    reason: e.to_string(),
                })
            }
        };
        text.parse().map_err(
            |e: portico_common::ParseContentHashError| CacheError::Corrupt {
                path,
                reason: e.to_string(),
            },
        )
    }

    /// Returns `true` if the unit has no record or its record differs
    /// from the current content fingerprint.
    ///
    /// A corrupt record propagates as an error; callers treat it as
    /// staleness but surface the diagnostic.
    pub fn has_changed(unit: &SourceUnit) -> Result<bool, CacheError> {
        let stored = match Self::read_fingerprint(unit) {
            Ok(hash) => hash,
            Err(CacheError::NotHashed { .. }) => return Ok(true),
            Err(e) => return Err(e),
        };
        Ok(stored != Self::fingerprint(unit)?)
    }
}
