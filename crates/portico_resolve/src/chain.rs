//! The resolution chain: claim → gate → compile → commit → load.

use std::path::Path;

use portico_cache::{CacheArtifact, CacheStore};
use portico_common::SourceUnit;

use crate::error::ResolveError;
use crate::invoker::CompilerInvoker;
use crate::lock::LockArena;
use crate::request::ModuleRequest;
use crate::resolver::{PackageResolver, Resolver, SingleFileResolver};

/// The outcome of a claimed resolution: a loadable artifact reference.
#[derive(Debug)]
pub struct Resolution {
    /// The source unit the request resolved to.
    pub unit: SourceUnit,

    /// The artifact to hand to the host's module loader.
    pub artifact: CacheArtifact,

    /// Whether this resolution invoked the compiler (as opposed to
    /// reusing the cached artifact).
    pub rebuilt: bool,

    /// Rendered diagnostic when a corrupt cache record forced the
    /// rebuild. The resolution itself still succeeded.
    pub cache_warning: Option<String>,
}

/// Ordered resolvers plus the cache gate and compiler seam.
///
/// For every request the package resolver is consulted before the
/// single-file resolver; if neither claims it, `resolve` returns
/// `Ok(None)` and the host's default lookup takes over.
pub struct ResolutionChain {
    resolvers: Vec<Box<dyn Resolver>>,
    store: CacheStore,
    invoker: Box<dyn CompilerInvoker>,
    locks: LockArena,
}

impl ResolutionChain {
    /// Creates a chain for units with the given source extension.
    ///
    /// Registers the package resolver first and the single-file
    /// resolver last, so a directory-shaped unit is never mistaken for
    /// a loose file with the same stem.
    pub fn new(source_ext: &str, store: CacheStore, invoker: Box<dyn CompilerInvoker>) -> Self {
        Self {
            resolvers: vec![
                Box::new(PackageResolver::new(source_ext)),
                Box::new(SingleFileResolver::new(source_ext)),
            ],
            store,
            invoker,
            locks: LockArena::new(),
        }
    }

    /// The cache store this chain consults.
    pub fn store(&self) -> &CacheStore {
        &self.store
    }

    /// Asks each resolver in order to claim the request.
    ///
    /// `None` means "not mine": the request belongs to the host's
    /// normal resolution.
    pub fn claim(&self, request: &ModuleRequest) -> Option<SourceUnit> {
        self.resolvers
            .iter()
            .find_map(|resolver| resolver.try_claim(request))
    }

    /// Resolves a module request to a loadable artifact.
    ///
    /// Returns `Ok(None)` when no resolver recognizes the request.
    /// For claimed units, consults the cache gate under the unit's
    /// build lock and compiles first when stale. A failed compile
    /// propagates as [`ResolveError::CompileFailed`]; no partial or
    /// stale artifact is ever returned in that case.
    pub fn resolve(&self, request: &ModuleRequest) -> Result<Option<Resolution>, ResolveError> {
        let Some(unit) = self.claim(request) else {
            return Ok(None);
        };
        self.resolve_unit(unit).map(Some)
    }

    /// Runs the check→compile→commit sequence for an already-claimed
    /// unit, serialized per unit path.
    pub fn resolve_unit(&self, unit: SourceUnit) -> Result<Resolution, ResolveError> {
        let lock = self.locks.lock_for(unit.path());
        let _build_guard = lock.lock().unwrap_or_else(|p| p.into_inner());

        let decision = self.store.should_compile_detailed(&unit)?;
        let cache_warning = decision.warning.map(|w| w.to_string());

        if !decision.compile {
            return Ok(Resolution {
                artifact: CacheArtifact::new(&self.store.artifact_path(&unit)),
                unit,
                rebuilt: false,
                cache_warning,
            });
        }

        let out = self.store.artifact_path(&unit);
        ensure_parent_dir(&out)?;
        let artifact = self.invoker.compile(&unit, &out)?;
        self.store.commit_build(&unit, &artifact)?;

        Ok(Resolution {
            unit,
            artifact,
            rebuilt: true,
            cache_warning,
        })
    }
}

/// Creates the artifact's parent (the hidden cache directory) so the
/// invoker has somewhere to write.
fn ensure_parent_dir(out: &Path) -> Result<(), ResolveError> {
    if let Some(parent) = out.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            ResolveError::Cache(portico_cache::CacheError::Io {
                path: parent.to_path_buf(),
                source: e,
            })
        })?;
    }
    Ok(())
}
