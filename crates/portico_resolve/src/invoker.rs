//! The compiler invoker seam.
//!
//! The chain only depends on the [`CompilerInvoker`] trait: given a
//! source unit and an output path, produce an artifact there or fail
//! with diagnostic text. [`CommandInvoker`] is the production
//! implementation that shells out to a configured toolchain.

use std::path::Path;
use std::process::Command;

use portico_cache::CacheArtifact;
use portico_common::SourceUnit;
use portico_config::CompilerConfig;

use crate::error::ResolveError;

/// Produces a native artifact for a source unit.
///
/// Implementations must be idempotent: re-invoking on identical source
/// content yields a functionally identical artifact.
pub trait CompilerInvoker: Send + Sync {
    /// Compiles the unit, leaving the artifact at `out`.
    ///
    /// Fails with [`ResolveError::CompileFailed`] carrying the
    /// toolchain's diagnostic output.
    fn compile(&self, unit: &SourceUnit, out: &Path) -> Result<CacheArtifact, ResolveError>;
}

/// Invokes an external compiler as a subprocess.
///
/// The argument template comes from configuration; `{source}` and
/// `{out}` placeholders are substituted per invocation.
pub struct CommandInvoker {
    command: String,
    args: Vec<String>,
}

impl CommandInvoker {
    /// Creates an invoker from the project's compiler configuration.
    pub fn from_config(config: &CompilerConfig) -> Self {
        Self {
            command: config.command.clone(),
            args: config.args.clone(),
        }
    }

    /// Creates an invoker from an explicit command and argument template.
    pub fn new(command: &str, args: &[&str]) -> Self {
        Self {
            command: command.to_string(),
            args: args.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn render_args(&self, unit: &SourceUnit, out: &Path) -> Vec<String> {
        let source = unit.path().display().to_string();
        let out = out.display().to_string();
        self.args
            .iter()
            .map(|a| a.replace("{source}", &source).replace("{out}", &out))
            .collect()
    }
}

impl CompilerInvoker for CommandInvoker {
    fn compile(&self, unit: &SourceUnit, out: &Path) -> Result<CacheArtifact, ResolveError> {
        let args = self.render_args(unit, out);
        let output =
            Command::new(&self.command)
                .args(&args)
                .output()
                .map_err(|e| ResolveError::CompileFailed {
                    unit: unit.path().to_path_buf(),
                    diagnostic: format!("failed to run '{}': {e}", self.command),
                })?;

        if !output.status.success() {
            return Err(ResolveError::CompileFailed {
                unit: unit.path().to_path_buf(),
                diagnostic: String::from_utf8_lossy(&output.stderr).to_string(),
            });
        }

        if !out.exists() {
            return Err(ResolveError::CompileFailed {
                unit: unit.path().to_path_buf(),
                diagnostic: format!(
                    "'{}' exited successfully but produced no artifact at {}",
                    self.command,
                    out.display()
                ),
            });
        }

        Ok(CacheArtifact::new(out))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portico_common::UnitKind;

    fn make_unit() -> (tempfile::TempDir, SourceUnit) {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("mod.nim");
        std::fs::write(&file, "echo 1").unwrap();
        let unit = SourceUnit::new(&file, UnitKind::SingleFile).unwrap();
        (dir, unit)
    }

    #[test]
    fn placeholders_substituted() {
        let (_dir, unit) = make_unit();
        let invoker = CommandInvoker::new("nim", &["c", "--out:{out}", "{source}"]);
        let args = invoker.render_args(&unit, Path::new("/tmp/out.so"));
        assert_eq!(args[0], "c");
        assert_eq!(args[1], "--out:/tmp/out.so");
        assert_eq!(args[2], unit.path().display().to_string());
    }

    #[test]
    fn missing_toolchain_is_compile_failed() {
        let (dir, unit) = make_unit();
        let invoker = CommandInvoker::new("portico-no-such-compiler", &["{source}"]);
        let result = invoker.compile(&unit, &dir.path().join("out.so"));
        match result {
            Err(ResolveError::CompileFailed { diagnostic, .. }) => {
                assert!(diagnostic.contains("portico-no-such-compiler"));
            }
            other => panic!("expected CompileFailed, got {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn successful_invocation_yields_artifact() {
        let (dir, unit) = make_unit();
        let out = dir.path().join("mod.so");
        let invoker = CommandInvoker::new("sh", &["-c", "cp {source} {out}"]);
        let artifact = invoker.compile(&unit, &out).unwrap();
        assert_eq!(artifact.path(), out);
        assert!(out.exists());
    }

    #[cfg(unix)]
    #[test]
    fn nonzero_exit_carries_stderr() {
        let (dir, unit) = make_unit();
        let invoker = CommandInvoker::new("sh", &["-c", "echo boom >&2; exit 1; # {source}"]);
        match invoker.compile(&unit, &dir.path().join("out.so")) {
            Err(ResolveError::CompileFailed { diagnostic, .. }) => {
                assert!(diagnostic.contains("boom"));
            }
            other => panic!("expected CompileFailed, got {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn success_without_artifact_is_compile_failed() {
        let (dir, unit) = make_unit();
        let invoker = CommandInvoker::new("sh", &["-c", "true # {source}"]);
        match invoker.compile(&unit, &dir.path().join("out.so")) {
            Err(ResolveError::CompileFailed { diagnostic, .. }) => {
                assert!(diagnostic.contains("produced no artifact"));
            }
            other => panic!("expected CompileFailed, got {other:?}"),
        }
    }
}
