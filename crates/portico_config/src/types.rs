//! Configuration types deserialized from `portico.toml`.

use serde::Deserialize;

/// The top-level project configuration parsed from `portico.toml`.
#[derive(Debug, Deserialize)]
pub struct ProjectConfig {
    /// Core project metadata.
    pub project: ProjectMeta,
    /// Foreign compiler toolchain settings.
    pub compiler: CompilerConfig,
    /// Cache behavior settings.
    #[serde(default)]
    pub cache: CacheConfig,
}

/// Core project metadata required in every `portico.toml`.
#[derive(Debug, Deserialize)]
pub struct ProjectMeta {
    /// The project name.
    pub name: String,
    /// A brief description of the project.
    #[serde(default)]
    pub description: String,
}

/// The external compiler toolchain used to build native artifacts.
#[derive(Debug, Deserialize)]
pub struct CompilerConfig {
    /// The compiler executable, e.g. `nim`.
    pub command: String,

    /// Argument template. `{source}` is replaced with the source file
    /// path and `{out}` with the artifact output path.
    #[serde(default)]
    pub args: Vec<String>,

    /// File extension of foreign source units, e.g. `nim`.
    pub source_ext: String,
}

/// Cache behavior settings.
#[derive(Debug, Default, Deserialize)]
pub struct CacheConfig {
    /// When `true`, every freshness check reports stale, forcing a
    /// full rebuild of every unit touched in the process run.
    #[serde(default)]
    pub ignore: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cache_config_defaults_off() {
        let cache = CacheConfig::default();
        assert!(!cache.ignore);
    }

    #[test]
    fn deserialize_compiler_section() {
        let compiler: CompilerConfig = toml::from_str(
            r#"
command = "nim"
args = ["c", "--app:lib", "--out:{out}", "{source}"]
source_ext = "nim"
"#,
        )
        .unwrap();
        assert_eq!(compiler.command, "nim");
        assert_eq!(compiler.args.len(), 4);
        assert_eq!(compiler.source_ext, "nim");
    }
}
