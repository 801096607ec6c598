//! Cache directory layout.
//!
//! Every source directory gets its own hidden cache directory; there is
//! no global cache. All derivations here are pure functions of the
//! unit's normalized path, so they are stable across repeated calls and
//! across process restarts.

use std::path::PathBuf;

use portico_common::{native_extension, SourceUnit};

/// Name of the hidden cache directory created next to source files.
pub const CACHE_DIR_NAME: &str = ".portico-cache";

/// Extension appended to the source file name for its hash record.
const HASH_EXT: &str = "hash";

/// Extension appended to the source file name for its build record.
const RECORD_EXT: &str = "json";

/// The hidden cache directory for a unit: `<source_dir>/.portico-cache`.
pub fn cache_dir(unit: &SourceUnit) -> PathBuf {
    unit.source_dir().join(CACHE_DIR_NAME)
}

/// The hash-record path: `<source_dir>/.portico-cache/<file_name>.hash`.
pub fn hash_file_path(unit: &SourceUnit) -> PathBuf {
    cache_dir(unit).join(format!("{}.{HASH_EXT}", unit.file_name()))
}

/// The build-record path: `<source_dir>/.portico-cache/<file_name>.json`.
pub fn record_path(unit: &SourceUnit) -> PathBuf {
    cache_dir(unit).join(format!("{}.{RECORD_EXT}", unit.file_name()))
}

/// The expected artifact path, named after the unit's stem with the
/// platform's native-extension convention.
pub fn artifact_path(unit: &SourceUnit) -> PathBuf {
    cache_dir(unit).join(format!("{}.{}", unit.stem(), native_extension()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use portico_common::UnitKind;

    fn make_unit(name: &str) -> (tempfile::TempDir, SourceUnit) {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join(name);
        std::fs::write(&file, "echo \"Hello World\"").unwrap();
        let unit = SourceUnit::new(&file, UnitKind::SingleFile).unwrap();
        (dir, unit)
    }

    #[test]
    fn cache_dir_is_hidden_sibling() {
        let (_dir, unit) = make_unit("mod2.nim");
        let cache = cache_dir(&unit);
        assert_eq!(cache.parent().unwrap(), unit.source_dir());
        assert_eq!(cache.file_name().unwrap(), CACHE_DIR_NAME);
    }

    #[test]
    fn hash_file_path_shape() {
        let (_dir, unit) = make_unit("mod2.nim");
        let expected = unit
            .source_dir()
            .join(CACHE_DIR_NAME)
            .join("mod2.nim.hash");
        assert_eq!(hash_file_path(&unit), expected);
    }

    #[test]
    fn hash_file_path_is_stable() {
        let (_dir, unit) = make_unit("mod2.nim");
        assert_eq!(hash_file_path(&unit), hash_file_path(&unit));
    }

    #[test]
    fn hash_file_path_is_absolute() {
        let (_dir, unit) = make_unit("mod2.nim");
        assert!(hash_file_path(&unit).is_absolute());
    }

    #[test]
    fn artifact_named_after_stem() {
        let (_dir, unit) = make_unit("mod2.nim");
        let artifact = artifact_path(&unit);
        let name = artifact.file_name().unwrap().to_str().unwrap();
        assert!(name.starts_with("mod2."));
        assert!(!name.contains("nim."));
    }

    #[test]
    fn record_path_shape() {
        let (_dir, unit) = make_unit("mod2.nim");
        assert!(record_path(&unit).ends_with(".portico-cache/mod2.nim.json"));
    }
}
