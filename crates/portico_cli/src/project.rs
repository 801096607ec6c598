//! Shared project helpers for CLI commands.

use std::path::{Path, PathBuf};

use crate::GlobalArgs;

/// Walks up from `start` looking for the nearest directory containing
/// `portico.toml`.
pub fn find_project_root(start: &Path) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let mut current = start.to_path_buf();
    loop {
        if current.join("portico.toml").exists() {
            return Ok(current);
        }
        if !current.pop() {
            return Err(format!(
                "could not find portico.toml in {} or any parent directory",
                start.display()
            )
            .into());
        }
    }
}

/// Resolves the project root directory from global CLI args.
///
/// If `--config` is specified, uses that path (file → parent dir,
/// dir → itself). Otherwise walks up from the current directory.
pub fn resolve_project_root(global: &GlobalArgs) -> Result<PathBuf, Box<dyn std::error::Error>> {
    if let Some(ref config_path) = global.config {
        let p = PathBuf::from(config_path);
        if p.is_file() {
            Ok(p.parent()
                .map(|p| p.to_path_buf())
                .unwrap_or_else(|| PathBuf::from(".")))
        } else {
            Ok(p)
        }
    } else {
        find_project_root(&std::env::current_dir()?)
    }
}

/// Builds the ordered search-directory list for a request: explicit
/// `--search` directories first, then the project root.
pub fn search_dirs(explicit: &[String], project_root: &Path) -> Vec<PathBuf> {
    let mut dirs: Vec<PathBuf> = explicit.iter().map(PathBuf::from).collect();
    dirs.push(project_root.to_path_buf());
    dirs
}
