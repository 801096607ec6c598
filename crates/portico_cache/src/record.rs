//! Advisory build records.
//!
//! A build record is a JSON sidecar written next to the hash record on
//! every successful build. It is diagnostic metadata only: freshness is
//! decided by the hash record and artifact presence, never by this
//! file, so loading is fail-safe.

use std::path::{Path, PathBuf};

use portico_common::{ContentHash, SourceUnit};
use serde::{Deserialize, Serialize};

use crate::error::CacheError;
use crate::layout;

/// Metadata persisted after each successful build of a unit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildRecord {
    /// Portico version that produced the artifact.
    pub portico_version: String,

    /// Location of the compiled artifact on disk.
    pub artifact: PathBuf,

    /// Fingerprint of the source at the time of the build.
    pub fingerprint: ContentHash,
}

impl BuildRecord {
    /// Creates a record for a freshly built artifact.
    pub fn new(artifact: &Path, fingerprint: ContentHash) -> Self {
        Self {
            portico_version: env!("CARGO_PKG_VERSION").to_string(),
            artifact: artifact.to_path_buf(),
            fingerprint,
        }
    }

    /// Loads the record for a unit, returning `None` if it is missing
    /// or unparseable. Fail-safe: a bad record never blocks a build.
    pub fn load(unit: &SourceUnit) -> Option<Self> {
        let content = std::fs::read_to_string(layout::record_path(unit)).ok()?;
        serde_json::from_str(&content).ok()
    }

    /// Saves the record to the unit's cache directory.
    pub fn save(&self, unit: &SourceUnit) -> Result<(), CacheError> {
        let path = layout::record_path(unit);
        let json = serde_json::to_string_pretty(self).map_err(|e| CacheError::Corrupt {
            path: path.clone(),
            reason: e.to_string(),
        })?;
        std::fs::write(&path, json).map_err(|e| CacheError::Io { path, source: e })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portico_common::UnitKind;

    fn make_unit() -> (tempfile::TempDir, SourceUnit) {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("mod.nim");
        std::fs::write(&file, "echo 1").unwrap();
        let unit = SourceUnit::new(&file, UnitKind::SingleFile).unwrap();
        std::fs::create_dir_all(layout::cache_dir(&unit)).unwrap();
        (dir, unit)
    }

    #[test]
    fn save_and_load_roundtrip() {
        let (_dir, unit) = make_unit();
        let record = BuildRecord::new(
            &layout::artifact_path(&unit),
            ContentHash::from_bytes(b"echo 1"),
        );
        record.save(&unit).unwrap();

        let loaded = BuildRecord::load(&unit).unwrap();
        assert_eq!(loaded.artifact, layout::artifact_path(&unit));
        assert_eq!(loaded.fingerprint, record.fingerprint);
        assert_eq!(loaded.portico_version, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn load_missing_returns_none() {
        let (_dir, unit) = make_unit();
        assert!(BuildRecord::load(&unit).is_none());
    }

    #[test]
    fn load_corrupt_returns_none() {
        let (_dir, unit) = make_unit();
        std::fs::write(layout::record_path(&unit), "not valid json {{{").unwrap();
        assert!(BuildRecord::load(&unit).is_none());
    }
}
