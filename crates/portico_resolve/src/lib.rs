//! Module resolution for foreign source units.
//!
//! Intercepts module-lookup requests and, for requests matching a
//! foreign source unit, produces a loadable native artifact, compiling
//! first when the cache says the unit is stale. Requests no resolver
//! recognizes pass through to the host's normal lookup.

#![warn(missing_docs)]

pub mod chain;
pub mod error;
pub mod invoker;
pub mod lock;
pub mod request;
pub mod resolver;

pub use chain::{Resolution, ResolutionChain};
pub use error::ResolveError;
pub use invoker::{CommandInvoker, CompilerInvoker};
pub use lock::LockArena;
pub use request::ModuleRequest;
pub use resolver::{PackageResolver, Resolver, SingleFileResolver};
