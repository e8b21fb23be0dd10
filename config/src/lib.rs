//! Load configuration from XDG `config.toml` and project `.env`, apply it to the process
//! environment with priority **existing env > .env > XDG**, and resolve directive [`Settings`].
//!
//! See [`load_and_apply`]. Tracing setup for binaries lives in `logging` behind the
//! `tracing-init` feature.

mod dotenv;
#[cfg(feature = "tracing-init")]
pub mod logging;
pub mod settings;
mod xdg_toml;

use std::collections::{BTreeSet, HashMap};
use std::path::Path;

use thiserror::Error;

pub use settings::{parse_bool, Settings};
pub use xdg_toml::{config_path, DirectiveTable};

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("xdg config path: {0}")]
    XdgPath(String),
    #[error("read xdg config: {0}")]
    XdgRead(std::io::Error),
    #[error("parse xdg toml: {0}")]
    XdgParse(#[from] toml::de::Error),
    #[error("read .env: {0}")]
    DotenvRead(std::io::Error),
    #[error("invalid boolean for {key}: `{value}` (expected 1/0, true/false, yes/no, on/off)")]
    InvalidBool { key: String, value: String },
}

#[cfg(test)]
pub(crate) static ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

/// Sets each key from `.env` or `[env]` that is not already in the process environment.
/// Returns the keys that were set, sorted.
fn apply_missing(
    dotenv_map: &HashMap<String, String>,
    xdg_map: &HashMap<String, String>,
) -> Vec<String> {
    let keys: BTreeSet<&String> = dotenv_map.keys().chain(xdg_map.keys()).collect();
    let mut applied = Vec::new();
    for key in keys {
        if std::env::var_os(key).is_some() {
            continue;
        }
        if let Some(value) = dotenv_map.get(key).or_else(|| xdg_map.get(key)) {
            std::env::set_var(key, value);
            applied.push(key.clone());
        }
    }
    applied
}

/// Loads `$XDG_CONFIG_HOME/<app_name>/config.toml` and the project `.env`, applies missing
/// environment variables, then resolves [`Settings`] from the environment over the
/// `[directive]` table.
///
/// Precedence for a key missing from the process environment:
/// 1. project `.env` (current directory, or `override_dir` if given)
/// 2. `[env]` table of the XDG config file
///
/// * `app_name`: e.g. `"copybolt"`; used for the XDG path.
/// * `override_dir`: look for `.env` here instead of the current directory.
pub fn load_and_apply(app_name: &str, override_dir: Option<&Path>) -> Result<Settings, LoadError> {
    let xdg = xdg_toml::load(app_name)?;
    let dotenv_map = dotenv::load_env_map(override_dir).map_err(LoadError::DotenvRead)?;
    apply_missing(&dotenv_map, &xdg.env);
    Settings::from_env(&xdg.directive)
}
