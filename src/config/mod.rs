pub mod types;

use crate::error::ConfigError;
use std::fs;
use std::path::{Path, PathBuf};
use types::{AwxConfig, ConfigFile, PartialConfig};

const CONFIG_FILE_NAME: &str = ".awx-mcp.toml";

/// Get the global config file path (~/.awx-mcp.toml)
pub fn global_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(CONFIG_FILE_NAME))
}

/// Parse a config file's `[awx]` table
pub fn parse_config_file(content: &str) -> Result<PartialConfig, ConfigError> {
    toml::from_str::<ConfigFile>(content)
        .map(|file| file.awx)
        .map_err(|e| ConfigError::ParsingFailed(e.to_string()))
}

/// Read settings from a config file
///
/// An explicit `path` must exist and parse. Without one the global file is
/// used when present; an unreadable or malformed global file is skipped.
pub fn load_config_file(path: Option<&Path>) -> Result<PartialConfig, ConfigError> {
    if let Some(path) = path {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::ReadFailed {
            path: path.to_path_buf(),
            source,
        })?;
        return parse_config_file(&content);
    }

    if let Some(global) = global_config_path() {
        if global.exists() {
            match fs::read_to_string(&global).map_err(|e| e.to_string()).and_then(|content| {
                parse_config_file(&content).map_err(|e| e.to_string())
            }) {
                Ok(partial) => {
                    log::debug!("Loaded config from {}", global.display());
                    return Ok(partial);
                }
                Err(e) => log::warn!("Ignoring config file {}: {}", global.display(), e),
            }
        }
    }

    Ok(PartialConfig::default())
}

/// Load the AWX configuration
///
/// File settings are the base layer; `overrides` (environment variables and
/// command-line flags) take precedence. The merged result is validated.
pub fn load_config(path: Option<&Path>, overrides: PartialConfig) -> Result<AwxConfig, ConfigError> {
    load_config_file(path)?.merge(overrides).into_config()
}
