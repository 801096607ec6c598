//! Resolvers that map module requests to source units.
//!
//! Two resolvers cooperate in a deliberate order: the package resolver
//! recognizes directory-shaped units first, so a directory is never
//! mistaken for a loose file with the same stem; the single-file
//! resolver is the fallback.

use std::path::PathBuf;

use portico_common::{SourceUnit, UnitKind};

use crate::request::ModuleRequest;

/// A resolver that may claim a module request as a foreign source unit.
///
/// Resolvers are iterated in registration order; the first claim wins.
/// Returning `None` declines the request without error.
pub trait Resolver: Send + Sync {
    /// Attempts to map the request to a source unit this resolver
    /// recognizes.
    fn try_claim(&self, request: &ModuleRequest) -> Option<SourceUnit>;
}

/// Recognizes multi-file units organized as a directory with a
/// designated entry file: `<dir>/<name>/<name>.<ext>`.
pub struct PackageResolver {
    ext: String,
}

impl PackageResolver {
    /// Creates a package resolver for the given source extension.
    pub fn new(ext: &str) -> Self {
        Self {
            ext: ext.to_string(),
        }
    }
}

impl Resolver for PackageResolver {
    fn try_claim(&self, request: &ModuleRequest) -> Option<SourceUnit> {
        let segments = request.segments();
        let last = segments.last()?;
        for dir in request.search_dirs() {
            let package_dir: PathBuf = segments.iter().fold(dir.clone(), |p, s| p.join(s));
            if !package_dir.is_dir() {
                continue;
            }
            let entry = package_dir.join(format!("{last}.{}", self.ext));
            if entry.is_file() {
                if let Ok(unit) = SourceUnit::new(&entry, UnitKind::Package) {
                    return Some(unit);
                }
            }
        }
        None
    }
}

/// Recognizes a lone foreign source file: `<dir>/<name>.<ext>`.
///
/// Registered after [`PackageResolver`] in every chain.
pub struct SingleFileResolver {
    ext: String,
}

impl SingleFileResolver {
    /// Creates a single-file resolver for the given source extension.
    pub fn new(ext: &str) -> Self {
        Self {
            ext: ext.to_string(),
        }
    }
}

impl Resolver for SingleFileResolver {
    fn try_claim(&self, request: &ModuleRequest) -> Option<SourceUnit> {
        let segments = request.segments();
        let (last, parents) = segments.split_last()?;
        for dir in request.search_dirs() {
            let parent: PathBuf = parents.iter().fold(dir.clone(), |p, s| p.join(s));
            let candidate = parent.join(format!("{last}.{}", self.ext));
            if candidate.is_file() {
                if let Ok(unit) = SourceUnit::new(&candidate, UnitKind::SingleFile) {
                    return Some(unit);
                }
            }
        }
        None
    }
}
