//! `portico clean` — remove hidden cache directories.
//!
//! This is the external cache-clearing action: deleting a unit's cache
//! directory removes its hash record and artifact together, so the next
//! resolution sees "never built".

use std::path::{Path, PathBuf};

use portico_cache::layout::CACHE_DIR_NAME;

use crate::project::resolve_project_root;
use crate::{CleanArgs, GlobalArgs};

/// Runs the `portico clean` command.
///
/// Walks the directory tree removing every `.portico-cache` directory.
/// Returns exit code 0; missing target directories are reported as
/// errors by the caller.
pub fn run(args: &CleanArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let root = match &args.dir {
        Some(dir) => PathBuf::from(dir),
        None => resolve_project_root(global)?,
    };

    let removed = remove_cache_dirs(&root)?;
    if !global.quiet {
        eprintln!(
            "   Removed {removed} cache director{} under {}",
            if removed == 1 { "y" } else { "ies" },
            root.display()
        );
    }
    Ok(0)
}

/// Recursively removes `.portico-cache` directories, returning how
/// many were deleted.
fn remove_cache_dirs(dir: &Path) -> Result<usize, Box<dyn std::error::Error>> {
    let mut removed = 0;
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        // Never follow symlinks: a link cycle would recurse without
        // bound, and a link out of the tree must keep its caches.
        if !entry.file_type()?.is_dir() {
            continue;
        }
        let path = entry.path();
        if path.file_name().and_then(|n| n.to_str()) == Some(CACHE_DIR_NAME) {
            std::fs::remove_dir_all(&path)?;
            removed += 1;
        } else {
            removed += remove_cache_dirs(&path)?;
        }
    }
    Ok(removed)
}
