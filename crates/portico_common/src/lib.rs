//! Shared foundational types for the portico toolchain.
//!
//! This crate provides content hashing for cache invalidation, the
//! [`SourceUnit`] identity type for foreign source inputs, and the
//! platform's native-extension naming convention.

#![warn(missing_docs)]

pub mod hash;
pub mod platform;
pub mod unit;

pub use hash::{ContentHash, ParseContentHashError};
pub use platform::native_extension;
pub use unit::{SourceUnit, UnitKind};
