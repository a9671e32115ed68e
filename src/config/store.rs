//! Locating, loading, and atomically saving the config file.

use std::env;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::error::{ConfigError, PromptError};
use crate::interact::Prompter;

use super::settings::{API_KEY_PLACEHOLDER, Config};

/// Environment variable overriding the config file location.
pub const CONFIG_ENV_VAR: &str = "GITCOMMIT_CONFIG";

/// Environment variable supplying the API key without persisting it.
pub const API_KEY_ENV_VAR: &str = "OPENAI_API_KEY";

const CONFIG_DIR_NAME: &str = "gitcommit";
const CONFIG_FILE_NAME: &str = "config.json";

/// Resolve the config path.
///
/// Checks in order:
/// 1. `GITCOMMIT_CONFIG` environment variable
/// 2. `<platform config dir>/gitcommit/config.json`
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    if let Ok(path) = env::var(CONFIG_ENV_VAR)
        && !path.is_empty()
    {
        return Ok(PathBuf::from(path));
    }

    dirs::config_dir()
        .map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
        .ok_or(ConfigError::NoConfigDir)
}

/// Load the config at `path`, creating it with defaults if it does not exist.
pub fn load(path: &Path) -> Result<Config, ConfigError> {
    if !path.exists() {
        info!("No config at {}, writing defaults", path.display());
        let config = Config::default();
        save(path, &config)?;
        return Ok(config);
    }

    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFailed {
        path: path.to_path_buf(),
        source,
    })?;

    let config = serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    debug!("Loaded config from {}", path.display());
    Ok(config)
}

/// Write the config to `path` atomically.
///
/// An API key taken from the environment is written back as the placeholder.
///
/// Serializes into a temp file in the same directory, then renames it over
/// the target so a crash never leaves a half-written config behind.
pub fn save(path: &Path, config: &Config) -> Result<(), ConfigError> {
    let write_err = |source| ConfigError::WriteFailed {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir).map_err(write_err)?;

    let mut json = if config.api_key_from_env {
        let on_disk = Config {
            api_key: API_KEY_PLACEHOLDER.to_string(),
            ..config.clone()
        };
        serde_json::to_string_pretty(&on_disk)
    } else {
        serde_json::to_string_pretty(config)
    }
    .map_err(ConfigError::Serialize)?;
    json.push('\n');

    let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
    tmp.write_all(json.as_bytes()).map_err(write_err)?;
    tmp.persist(path).map_err(|e| write_err(e.error))?;

    debug!("Saved config to {}", path.display());
    Ok(())
}

/// Replace first-run placeholders with real values.
///
/// - API key: taken from `OPENAI_API_KEY` when set (kept out of the file),
///   otherwise asked for and persisted.
/// - Task prefix: asked for and persisted. An empty answer disables prefixing.
///
/// Returns `true` when the config changed and should be saved.
pub fn resolve_secrets<P: Prompter + ?Sized>(
    config: &mut Config,
    prompter: &P,
) -> Result<bool, PromptError> {
    let mut changed = false;

    if config.has_api_key_placeholder() {
        match env::var(API_KEY_ENV_VAR) {
            Ok(key) if !key.trim().is_empty() => {
                debug!("Using API key from {}", API_KEY_ENV_VAR);
                config.api_key = key.trim().to_string();
                config.api_key_from_env = true;
            }
            _ => {
                let key = prompter.password("Please enter your OpenAI API key")?;
                let key = key.trim();
                if key.is_empty() {
                    return Err(PromptError::Interaction("API key is required".to_string()));
                }
                config.api_key = key.to_string();
                changed = true;
            }
        }
    }

    if config.has_task_prefix_placeholder() {
        let prefix = prompter.input("Please enter your task prefix (e.g. IOS-, empty for none)", "")?;
        config.task_prefix = prefix.trim().to_string();
        changed = true;
    }

    Ok(changed)
}
