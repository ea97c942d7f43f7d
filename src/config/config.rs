use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};

use crate::constants::{CONFIG_FILE, DEFAULT_API_URL, ENV_API_TOKEN, ENV_API_URL, ENV_ROLES};
use crate::error::{AdminError, AdminResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_api_url")]
    pub api_url: String,
    pub api_token: Option<String>,
    #[serde(default)]
    pub roles: Vec<String>,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_url: default_api_url(),
            api_token: None,
            roles: Vec::new(),
        }
    }
}

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(CONFIG_FILE))
}

pub fn load_config() -> Config {
    match config_path() {
        Some(path) => load_config_from(&path),
        None => Config::default(),
    }
}

/// Reads the config at `path`; a missing or unreadable file yields the defaults.
pub fn load_config_from(path: &Path) -> Config {
    fs::read_to_string(path)
        .ok()
        .and_then(|raw| serde_json::from_str(&raw).ok())
        .unwrap_or_default()
}

pub fn save_config(config: &Config) -> AdminResult<()> {
    let path = config_path()
        .ok_or_else(|| AdminError::ConfigError("Could not find home directory".to_string()))?;
    save_config_to(config, &path)
}

pub fn save_config_to(config: &Config, path: &Path) -> AdminResult<()> {
    let config_str = serde_json::to_string_pretty(config)?;
    fs::write(path, config_str)?;
    Ok(())
}

/// File config with the `PARADMIN_*` environment variables layered on top.
pub fn resolve_config() -> Config {
    apply_env_overrides(load_config(), |key| env::var(key).ok())
}

pub fn apply_env_overrides<F>(mut config: Config, lookup: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(url) = lookup(ENV_API_URL).filter(|u| !u.trim().is_empty()) {
        config.api_url = url;
    }
    if let Some(token) = lookup(ENV_API_TOKEN).filter(|t| !t.trim().is_empty()) {
        config.api_token = Some(token);
    }
    if let Some(roles) = lookup(ENV_ROLES) {
        config.roles = parse_roles(&roles);
    }
    config
}

pub fn parse_roles(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|r| r.trim())
        .filter(|r| !r.is_empty())
        .map(|r| r.to_string())
        .collect()
}
