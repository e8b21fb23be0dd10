//! Load `$XDG_CONFIG_HOME/<app>/config.toml`: the `[env]` table and the `[directive]` table.
//!
//! ```toml
//! [env]
//! VITE_SUPABASE_URL = "https://x.supabase.co"
//!
//! [directive]
//! work_dir = "/home/project"
//! connected = true
//! project_selected = false
//! policy_dir = "/etc/copybolt/policies"
//! ```

use std::collections::HashMap;
use std::path::PathBuf;

use serde::Deserialize;

use crate::LoadError;

/// `[directive]` table: defaults for settings not given through the environment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DirectiveTable {
    pub work_dir: Option<String>,
    pub connected: Option<bool>,
    pub project_selected: Option<bool>,
    pub supabase_url: Option<String>,
    pub anon_key: Option<String>,
    pub design_file: Option<PathBuf>,
    pub policy_dir: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    env: HashMap<String, String>,
    #[serde(default)]
    directive: DirectiveTable,
}

/// Parsed XDG config file; empty when the file does not exist.
#[derive(Debug, Clone, Default)]
pub struct XdgConfig {
    pub env: HashMap<String, String>,
    pub directive: DirectiveTable,
}

/// `$XDG_CONFIG_HOME` when set, else the platform config directory.
fn config_home() -> Result<PathBuf, LoadError> {
    if let Some(dir) = std::env::var_os("XDG_CONFIG_HOME").filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    dirs::config_dir().ok_or_else(|| LoadError::XdgPath("no config directory for this platform".into()))
}

/// Path of `config.toml` for `app_name` when it exists.
pub fn config_path(app_name: &str) -> Result<Option<PathBuf>, LoadError> {
    let path = config_home()?.join(app_name).join("config.toml");
    Ok(path.is_file().then_some(path))
}

/// Reads the config file for `app_name`. Missing file or missing tables yield empty values.
pub fn load(app_name: &str) -> Result<XdgConfig, LoadError> {
    let Some(path) = config_path(app_name)? else {
        return Ok(XdgConfig::default());
    };
    let content = std::fs::read_to_string(&path).map_err(LoadError::XdgRead)?;
    let file: ConfigFile = toml::from_str(&content)?;
    Ok(XdgConfig {
        env: file.env,
        directive: file.directive,
    })
}
