//! Identity of a foreign source input.

use std::io;
use std::path::{Path, PathBuf};

/// How a source unit is organized on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitKind {
    /// A directory with a designated entry file (`<name>/<name>.<ext>`).
    Package,
    /// A lone foreign source file.
    SingleFile,
}

/// One foreign-language input eligible for compilation.
///
/// Identified by the absolute, normalized path of its source file (for
/// a package unit, the entry file inside the package directory) plus a
/// kind tag. Immutable once constructed; every cache path derivation is
/// a pure function of this path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SourceUnit {
    path: PathBuf,
    kind: UnitKind,
}

impl SourceUnit {
    /// Creates a source unit from a path to an existing source file.
    ///
    /// The path is canonicalized so that two references to the same file
    /// through different spellings map to the same unit (and therefore
    /// the same cache entries and the same build lock).
    pub fn new(path: &Path, kind: UnitKind) -> io::Result<Self> {
        Ok(Self {
            path: path.canonicalize()?,
            kind,
        })
    }

    /// The absolute, normalized path of the source file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The organization of this unit on disk.
    pub fn kind(&self) -> UnitKind {
        self.kind
    }

    /// The source file's name, e.g. `mod2.nim`.
    pub fn file_name(&self) -> &str {
        self.path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
    }

    /// The source file's stem, e.g. `mod2`.
    pub fn stem(&self) -> &str {
        self.path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
    }

    /// The directory containing the source file.
    pub fn source_dir(&self) -> &Path {
        // A canonicalized file path always has a parent.
        self.path.parent().unwrap_or_else(|| Path::new("/"))
    }
}
