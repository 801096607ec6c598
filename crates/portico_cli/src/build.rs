//! `portico build` — resolve a module and build its artifact if stale.
//!
//! Pipeline:
//! 1. Find project root (walk up looking for `portico.toml`)
//! 2. Load config via `portico_config`
//! 3. Construct the resolution chain (package resolver before
//!    single-file resolver) with the configured compiler
//! 4. Resolve: reuse the cached artifact or compile and commit
//! 5. Print the artifact path for the host loader

use portico_cache::CacheStore;
use portico_resolve::{CommandInvoker, ModuleRequest, ResolutionChain};

use crate::project::{resolve_project_root, search_dirs};
use crate::{BuildArgs, GlobalArgs};

/// Runs the `portico build` command.
///
/// Returns exit code 0 on success (fresh or rebuilt), 1 when the
/// module is not recognized or compilation fails.
pub fn run(args: &BuildArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let project_dir = resolve_project_root(global)?;
    let config = portico_config::load_config(&project_dir)?;

    if !global.quiet {
        eprintln!("  Resolving {} ({})", args.module, config.project.name);
    }

    let ignore_cache = args.force || config.cache.ignore;
    let chain = ResolutionChain::new(
        &config.compiler.source_ext,
        CacheStore::new(ignore_cache),
        Box::new(CommandInvoker::from_config(&config.compiler)),
    );

    let request = ModuleRequest::new(&args.module, search_dirs(&args.search, &project_dir));
    let resolution = match chain.resolve(&request) {
        Ok(Some(resolution)) => resolution,
        Ok(None) => {
            eprintln!(
                "error: no {} source unit found for module '{}'",
                config.compiler.source_ext, args.module
            );
            return Ok(1);
        }
        Err(e) => {
            eprintln!("error: {e}");
            return Ok(1);
        }
    };

    if let Some(warning) = &resolution.cache_warning {
        eprintln!("warning: {warning}");
    }
    if !global.quiet {
        let action = if resolution.rebuilt { "Compiled" } else { "Fresh" };
        eprintln!("  {action} {}", resolution.unit.path().display());
    }

    // The artifact path on stdout is the loadable reference for the host.
    println!("{}", resolution.artifact.path().display());
    Ok(0)
}
