//! Portico CLI — compile-on-import tooling for foreign native modules.
//!
//! Provides `portico build` for resolving and building a module through
//! the cache, `portico status` for inspecting cache freshness without
//! compiling, and `portico clean` for removing cache directories.

#![warn(missing_docs)]

mod build;
mod clean;
mod project;
mod status;

use std::process;

use clap::{Parser, Subcommand};

/// Portico — transparent compile-on-import for foreign source modules.
#[derive(Parser, Debug)]
#[command(name = "portico", version, about = "Portico foreign-module toolchain")]
pub struct Cli {
    /// Suppress all output except errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to a custom `portico.toml` configuration file.
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// The subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve a module and build its native artifact if stale.
    Build(BuildArgs),
    /// Report cache state for a module without compiling.
    Status(StatusArgs),
    /// Remove hidden cache directories under a directory tree.
    Clean(CleanArgs),
}

/// Arguments for the `portico build` subcommand.
#[derive(Parser, Debug)]
pub struct BuildArgs {
    /// Module name to resolve (dotted for nested modules, e.g. `pkg1.mod1`).
    pub module: String,

    /// Force a rebuild even if the cached artifact is fresh.
    #[arg(short, long)]
    pub force: bool,

    /// Additional directories to search, in order (default: project root).
    #[arg(short, long)]
    pub search: Vec<String>,
}

/// Arguments for the `portico status` subcommand.
#[derive(Parser, Debug)]
pub struct StatusArgs {
    /// Module name to inspect.
    pub module: String,

    /// Additional directories to search, in order (default: project root).
    #[arg(short, long)]
    pub search: Vec<String>,
}

/// Arguments for the `portico clean` subcommand.
#[derive(Parser, Debug)]
pub struct CleanArgs {
    /// Directory tree to clean (default: project root).
    pub dir: Option<String>,
}

/// Global settings derived from CLI flags.
pub struct GlobalArgs {
    /// Whether to suppress non-error output.
    pub quiet: bool,
    /// Optional path to a custom config file.
    pub config: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    let global = GlobalArgs {
        quiet: cli.quiet,
        config: cli.config,
    };

    let result = match cli.command {
        Command::Build(ref args) => build::run(args, &global),
        Command::Status(ref args) => status::run(args, &global),
        Command::Clean(ref args) => clean::run(args, &global),
    };

    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}
