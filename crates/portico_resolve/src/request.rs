//! Module lookup requests.

use std::path::PathBuf;

/// A module-lookup request intercepted from the host's import
/// mechanism.
///
/// The name is the host-side module path (dotted for nested modules,
/// e.g. `pkg1.mod1`); the search directories are consulted in order by
/// each resolver.
#[derive(Debug, Clone)]
pub struct ModuleRequest {
    name: String,
    search_dirs: Vec<PathBuf>,
}

impl ModuleRequest {
    /// Creates a request for a module name searched in the given
    /// directories.
    pub fn new(name: &str, search_dirs: Vec<PathBuf>) -> Self {
        Self {
            name: name.to_string(),
            search_dirs,
        }
    }

    /// The requested module name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The dotted name split into path segments.
    pub fn segments(&self) -> Vec<&str> {
        self.name.split('.').filter(|s| !s.is_empty()).collect()
    }

    /// Directories to search, in order.
    pub fn search_dirs(&self) -> &[PathBuf] {
        &self.search_dirs
    }
}
