//! `portico status` — report cache state for a module without compiling.

use portico_cache::CacheStore;
use portico_resolve::{ModuleRequest, PackageResolver, Resolver, SingleFileResolver};

use crate::project::{resolve_project_root, search_dirs};
use crate::{GlobalArgs, StatusArgs};

/// Runs the `portico status` command.
///
/// Returns exit code 0 when the module is recognized (fresh or stale),
/// 1 when no resolver claims it.
pub fn run(args: &StatusArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let project_dir = resolve_project_root(global)?;
    let config = portico_config::load_config(&project_dir)?;

    let request = ModuleRequest::new(&args.module, search_dirs(&args.search, &project_dir));

    // Same deliberate order as the resolution chain: package first.
    let ext = &config.compiler.source_ext;
    let resolvers: Vec<Box<dyn Resolver>> = vec![
        Box::new(PackageResolver::new(ext)),
        Box::new(SingleFileResolver::new(ext)),
    ];
    let Some(unit) = resolvers.iter().find_map(|r| r.try_claim(&request)) else {
        eprintln!(
            "error: no {ext} source unit found for module '{}'",
            args.module
        );
        return Ok(1);
    };

    let store = CacheStore::new(config.cache.ignore);
    let decision = store.should_compile_detailed(&unit)?;
    if let Some(warning) = &decision.warning {
        eprintln!("warning: {warning}");
    }

    println!("module    {}", args.module);
    println!("source    {}", unit.path().display());
    println!("kind      {:?}", unit.kind());
    println!("hashed    {}", store.is_hashed(&unit));
    println!("built     {}", store.is_built(&unit));
    println!("cache dir {}", store.is_cache_dir_present(&unit));
    println!("fresh     {}", !decision.compile);
    if let Some(record) = store.read_record(&unit) {
        println!("last build portico v{}", record.portico_version);
        println!("artifact  {}", record.artifact.display());
    }

    Ok(0)
}
