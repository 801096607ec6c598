//! Error types for module resolution.

use std::path::PathBuf;

use portico_cache::CacheError;

/// Errors that can occur while resolving a module request.
///
/// `CompileFailed` is fatal to the one resolution that triggered it and
/// is surfaced with the toolchain's diagnostic text, never silently
/// retried. Cache signals (`NotHashed`, `Corrupt`) are absorbed into
/// rebuild decisions before they reach this level; only real I/O
/// failures propagate as `Cache`.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    /// The external toolchain reported an error for a unit.
    #[error("compilation of {unit} failed:\n{diagnostic}")]
    CompileFailed {
        /// The source file that failed to compile.
        unit: PathBuf,
        /// The toolchain's diagnostic output.
        diagnostic: String,
    },

    /// A cache read or write failed.
    #[error(transparent)]
    Cache(#[from] CacheError),
}
