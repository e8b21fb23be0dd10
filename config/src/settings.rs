//! Directive settings resolved from environment variables over the XDG `[directive]` table.
//!
//! The values stay raw here (flags, strings, paths); turning them into a configuration
//! snapshot is the caller's job.

use std::path::PathBuf;

use crate::xdg_toml::DirectiveTable;
use crate::LoadError;

pub const WORK_DIR_ENV: &str = "COPYBOLT_WORK_DIR";
pub const CONNECTED_ENV: &str = "SUPABASE_CONNECTED";
pub const PROJECT_SELECTED_ENV: &str = "SUPABASE_PROJECT_SELECTED";
pub const SUPABASE_URL_ENV: &str = "VITE_SUPABASE_URL";
pub const ANON_KEY_ENV: &str = "VITE_SUPABASE_ANON_KEY";
pub const DESIGN_FILE_ENV: &str = "COPYBOLT_DESIGN_FILE";
pub const POLICY_DIR_ENV: &str = "COPYBOLT_POLICY_DIR";

/// Directive inputs known before any command-line flag is applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    pub work_dir: Option<String>,
    pub connected: bool,
    pub project_selected: bool,
    pub supabase_url: Option<String>,
    pub anon_key: Option<String>,
    pub design_file: Option<PathBuf>,
    pub policy_dir: Option<PathBuf>,
}

/// Parses `1/true/yes/on` and `0/false/no/off`, case-insensitive.
pub fn parse_bool(key: &str, value: &str) -> Result<bool, LoadError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(LoadError::InvalidBool {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}

impl Settings {
    /// Resolves settings from `lookup` (environment-like, empty values count as unset), falling
    /// back to `table`.
    pub fn resolve<F>(lookup: F, table: &DirectiveTable) -> Result<Self, LoadError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let flag = |key: &str, fallback: Option<bool>| -> Result<bool, LoadError> {
            match get(key) {
                Some(v) => parse_bool(key, &v),
                None => Ok(fallback.unwrap_or(false)),
            }
        };

        Ok(Self {
            work_dir: get(WORK_DIR_ENV).or_else(|| table.work_dir.clone()),
            connected: flag(CONNECTED_ENV, table.connected)?,
            project_selected: flag(PROJECT_SELECTED_ENV, table.project_selected)?,
            supabase_url: get(SUPABASE_URL_ENV).or_else(|| table.supabase_url.clone()),
            anon_key: get(ANON_KEY_ENV).or_else(|| table.anon_key.clone()),
            design_file: get(DESIGN_FILE_ENV)
                .map(PathBuf::from)
                .or_else(|| table.design_file.clone()),
            policy_dir: get(POLICY_DIR_ENV)
                .map(PathBuf::from)
                .or_else(|| table.policy_dir.clone()),
        })
    }

    /// Resolves settings from the process environment over `table`.
    pub fn from_env(table: &DirectiveTable) -> Result<Self, LoadError> {
        Self::resolve(|key| std::env::var(key).ok(), table)
    }
}
