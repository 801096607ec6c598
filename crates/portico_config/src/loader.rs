//! Configuration file loading and validation.

use crate::error::ConfigError;
use crate::types::ProjectConfig;
use std::path::Path;

/// Loads and validates a `portico.toml` configuration from a project
/// directory.
///
/// Reads `<project_dir>/portico.toml`, parses it, and validates
/// required fields.
pub fn load_config(project_dir: &Path) -> Result<ProjectConfig, ConfigError> {
    let config_path = project_dir.join("portico.toml");
    let content = std::fs::read_to_string(&config_path)?;
    load_config_from_str(&content)
}

/// Parses and validates a `portico.toml` configuration from a string.
///
/// Useful for testing without filesystem dependencies.
pub fn load_config_from_str(content: &str) -> Result<ProjectConfig, ConfigError> {
    let config: ProjectConfig =
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
    validate_config(&config)?;
    Ok(config)
}

/// Validates that required fields are present and consistent.
fn validate_config(config: &ProjectConfig) -> Result<(), ConfigError> {
    if config.project.name.is_empty() {
        return Err(ConfigError::MissingField("project.name".to_string()));
    }
    if config.compiler.command.is_empty() {
        return Err(ConfigError::MissingField("compiler.command".to_string()));
    }
    if config.compiler.source_ext.is_empty() {
        return Err(ConfigError::MissingField("compiler.source_ext".to_string()));
    }
    if !config.compiler.args.iter().any(|a| a.contains("{source}")) {
        return Err(ConfigError::ValidationError(
            "compiler.args must mention {source}".to_string(),
        ));
    }
    Ok(())
}
