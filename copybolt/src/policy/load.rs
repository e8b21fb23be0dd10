//! Load policy overrides from a directory of YAML files.
//!
//! See [`load`], [`load_or_default`] and [`LoadError`].

use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::{
    AuthoringPolicyFile, DatabasePolicyFile, FormattingPolicyFile, FrameworkPolicyFile,
    PolicyBlocks,
};

/// Error when loading policies from a directory (missing dir, unreadable file, invalid YAML).
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("policy directory not found or not readable: {0}")]
    DirNotFound(String),
    #[error("failed to read policy file {path}: {message}")]
    ReadFile { path: String, message: String },
    #[error("failed to parse YAML in {path}: {message}")]
    ParseYaml { path: String, message: String },
}

const FRAMEWORK_FILE: &str = "framework.yaml";
const DATABASE_FILE: &str = "database.yaml";
const FORMATTING_FILE: &str = "formatting.yaml";
const AUTHORING_FILE: &str = "authoring.yaml";

/// Env var naming the policy directory when no directory is passed.
pub const POLICY_DIR_ENV: &str = "COPYBOLT_POLICY_DIR";

/// Default directory name when `COPYBOLT_POLICY_DIR` is not set.
const DEFAULT_POLICY_DIR: &str = "policies";

/// `dir` if `Some`, else `COPYBOLT_POLICY_DIR`, else `./policies`.
fn policy_dir(dir: Option<&Path>) -> PathBuf {
    dir.map(PathBuf::from).unwrap_or_else(|| {
        std::env::var(POLICY_DIR_ENV)
            .ok()
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_POLICY_DIR))
    })
}

/// Reads and parses one YAML file. A missing file is `Ok(None)`.
fn read_yaml_file<T>(dir: &Path, name: &str) -> Result<Option<T>, LoadError>
where
    T: for<'de> Deserialize<'de>,
{
    let path = dir.join(name);
    let content = match std::fs::read_to_string(&path) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(LoadError::ReadFile {
                path: path.display().to_string(),
                message: e.to_string(),
            })
        }
    };
    // An empty file parses as YAML null; treat it like an empty mapping.
    if content.trim().is_empty() {
        return Ok(None);
    }
    let value: T = serde_yaml::from_str(&content).map_err(|e| LoadError::ParseYaml {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    Ok(Some(value))
}

/// Loads policy overrides: reads `framework.yaml`, `database.yaml`, `formatting.yaml` and
/// `authoring.yaml` from the policy directory.
///
/// If `dir` is `None`, uses `COPYBOLT_POLICY_DIR` or `./policies`. Missing files keep the code
/// defaults for their blocks. Fails when the directory is missing or a present file cannot be
/// read or parsed.
pub fn load(dir: Option<&Path>) -> Result<PolicyBlocks, LoadError> {
    let base = policy_dir(dir);
    if !base.is_dir() {
        return Err(LoadError::DirNotFound(base.display().to_string()));
    }

    let framework = read_yaml_file::<FrameworkPolicyFile>(&base, FRAMEWORK_FILE)?.unwrap_or_default();
    let database = read_yaml_file::<DatabasePolicyFile>(&base, DATABASE_FILE)?.unwrap_or_default();
    let formatting =
        read_yaml_file::<FormattingPolicyFile>(&base, FORMATTING_FILE)?.unwrap_or_default();
    let authoring = read_yaml_file::<AuthoringPolicyFile>(&base, AUTHORING_FILE)?.unwrap_or_default();

    let blocks = PolicyBlocks {
        framework,
        database,
        formatting,
        authoring,
    };
    tracing::debug!(
        dir = %base.display(),
        overrides = blocks.override_count(),
        "loaded policy blocks"
    );
    Ok(blocks)
}

/// Loads from `dir` when possible; otherwise returns the code defaults.
///
/// A missing directory is silent (no overrides configured); any other failure is logged.
pub fn load_or_default(dir: Option<&Path>) -> PolicyBlocks {
    match load(dir) {
        Ok(blocks) => blocks,
        Err(LoadError::DirNotFound(path)) => {
            tracing::debug!(dir = %path, "no policy directory; using defaults");
            PolicyBlocks::default()
        }
        Err(e) => {
            tracing::warn!(error = %e, "ignoring policy overrides; using defaults");
            PolicyBlocks::default()
        }
    }
}
