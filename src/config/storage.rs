use std::path::{Path, PathBuf};

use super::types::Config;
use crate::error::BellhopError;

const CONFIG_DIR: &str = "bellhop";
const CONFIG_FILE: &str = "config.toml";

/// Environment variables that override the file-based secrets
pub const ENV_SESSION_ID: &str = "BELLHOP_SESSION_ID";
pub const ENV_CSRF_TOKEN: &str = "BELLHOP_CSRF_TOKEN";

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load the config from its default location
///
/// A missing or unreadable file is not an error, just an all-defaults run.
pub fn load_config() -> Config {
    let Some(path) = config_path() else {
        return Config::default();
    };

    load_config_lenient(&path)
}

pub fn load_config_lenient(path: &Path) -> Config {
    let contents = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(_) => return Config::default(),
    };

    match toml::from_str(&contents) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("Ignoring invalid config at {}: {}", path.display(), e);
            Config::default()
        }
    }
}

/// Load the config from an explicitly requested path
///
/// Unlike the default-path load, problems with a file the user asked for by
/// name are surfaced instead of silently defaulted.
pub fn load_config_from_path(path: &Path) -> Result<Config, BellhopError> {
    let contents = std::fs::read_to_string(path).map_err(|e| BellhopError::InvalidConfig {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    toml::from_str(&contents).map_err(|e| BellhopError::InvalidConfig {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}

/// Pull secret overrides from the environment
pub fn env_secret_overrides(config: &mut Config) {
    apply_secret_overrides(
        config,
        std::env::var(ENV_SESSION_ID).ok(),
        std::env::var(ENV_CSRF_TOKEN).ok(),
    );
}

/// Given overrides win over file values; `None` leaves the file value alone
pub fn apply_secret_overrides(
    config: &mut Config,
    session_id: Option<String>,
    csrf_token: Option<String>,
) {
    if session_id.is_some() {
        config.server.session_id = session_id;
    }
    if csrf_token.is_some() {
        config.server.csrf_token = csrf_token;
    }
}

#[cfg(test)]
#[path = "storage_tests.rs"]
mod storage_tests;
