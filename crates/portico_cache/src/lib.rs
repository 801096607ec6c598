//! Incremental-build cache for foreign source units.
//!
//! Two layers: the [`ledger`] computes and persists per-unit content
//! fingerprints, and the [`store`] combines fingerprint freshness with
//! artifact presence into the single `should_compile` gate that every
//! resolver consults.

#![warn(missing_docs)]

pub mod error;
pub mod layout;
pub mod ledger;
pub mod record;
pub mod store;

pub use error::CacheError;
pub use ledger::HashLedger;
pub use record::BuildRecord;
pub use store::{CacheArtifact, CacheStore, CompileDecision};
