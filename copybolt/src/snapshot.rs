//! Configuration snapshot: the immutable input to directive assembly.
//!
//! A [`ConfigurationSnapshot`] is supplied by the caller (connection management and design
//! collaborators, or the CLI) and is never mutated by the assembler. The database tri-state
//! is an explicit [`DatabaseState`] variant so that every consumer matches on it exhaustively.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ConfigurationError;

/// Directory name of the default working directory.
pub const WORK_DIR_NAME: &str = "project";

/// Default working directory shown to the agent.
pub const WORK_DIR: &str = "/home/project";

/// Readiness ladder of the database integration.
///
/// Ordered `Disconnected < ConnectedNoProject < ConnectedWithProject`; see [`DatabaseState::rung`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DatabaseState {
    /// No database connection.
    #[default]
    Disconnected,
    /// Connected, but no project selected.
    ConnectedNoProject,
    /// Connected with a selected project; credentials may be injected.
    ConnectedWithProject,
}

impl DatabaseState {
    /// All states, lowest rung first.
    pub fn all() -> &'static [DatabaseState] {
        &[
            DatabaseState::Disconnected,
            DatabaseState::ConnectedNoProject,
            DatabaseState::ConnectedWithProject,
        ]
    }

    /// Derives the state from the two flags reported by the connection collaborator.
    ///
    /// `has_selected_project` without `is_connected` is an invalid combination; it is read as
    /// [`DatabaseState::Disconnected`], the reading that grants the fewest privileges.
    pub fn from_flags(is_connected: bool, has_selected_project: bool) -> Self {
        match (is_connected, has_selected_project) {
            (true, true) => DatabaseState::ConnectedWithProject,
            (true, false) => DatabaseState::ConnectedNoProject,
            (false, false) => DatabaseState::Disconnected,
            (false, true) => {
                tracing::warn!(
                    "project selected while database is disconnected; treating as disconnected"
                );
                DatabaseState::Disconnected
            }
        }
    }

    /// Position on the readiness ladder (0, 1, 2).
    pub fn rung(&self) -> u8 {
        match self {
            DatabaseState::Disconnected => 0,
            DatabaseState::ConnectedNoProject => 1,
            DatabaseState::ConnectedWithProject => 2,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DatabaseState::Disconnected => "disconnected",
            DatabaseState::ConnectedNoProject => "connected-no-project",
            DatabaseState::ConnectedWithProject => "connected-with-project",
        }
    }
}

impl fmt::Display for DatabaseState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DatabaseState {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "disconnected" => Ok(DatabaseState::Disconnected),
            "connected-no-project" => Ok(DatabaseState::ConnectedNoProject),
            "connected-with-project" => Ok(DatabaseState::ConnectedWithProject),
            other => Err(format!("unknown database state `{other}`")),
        }
    }
}

/// Database credentials for the selected project.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Credentials {
    /// Project URL, e.g. `https://x.supabase.co`.
    pub url: String,
    /// Anonymous (public) API key.
    pub anon_key: String,
}

impl Credentials {
    pub fn new(url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            anon_key: anon_key.into(),
        }
    }

    /// Both fields non-blank and single-line.
    pub fn is_complete(&self) -> bool {
        let usable = |v: &str| !v.trim().is_empty() && !v.contains(['\n', '\r']);
        usable(&self.url) && usable(&self.anon_key)
    }
}

/// Visual design scheme chosen by the user. Values are opaque and passed through verbatim.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignScheme {
    pub font: Option<Value>,
    pub palette: Option<Value>,
    pub features: Option<Value>,
}

impl DesignScheme {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_font(mut self, font: impl Into<Value>) -> Self {
        self.font = Some(font.into());
        self
    }

    /// Sets the palette from `(role, color)` pairs, e.g. `[("primary", "#0000FF")]`.
    pub fn with_palette<I, K, V>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        let map: serde_json::Map<String, Value> = entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        self.palette = Some(Value::Object(map));
        self
    }

    pub fn with_features<I, S>(mut self, features: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let list = features
            .into_iter()
            .map(|s| Value::String(s.into()))
            .collect();
        self.features = Some(Value::Array(list));
        self
    }
}

/// Everything the assembler needs to know about the outside world.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigurationSnapshot {
    pub working_directory: String,
    pub database_state: DatabaseState,
    pub credentials: Option<Credentials>,
    pub design_scheme: Option<DesignScheme>,
}

impl Default for ConfigurationSnapshot {
    fn default() -> Self {
        Self {
            working_directory: WORK_DIR.to_string(),
            database_state: DatabaseState::Disconnected,
            credentials: None,
            design_scheme: None,
        }
    }
}

impl ConfigurationSnapshot {
    pub fn new(working_directory: impl Into<String>) -> Self {
        Self {
            working_directory: working_directory.into(),
            ..Self::default()
        }
    }

    pub fn with_database_state(mut self, state: DatabaseState) -> Self {
        self.database_state = state;
        self
    }

    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    pub fn with_design_scheme(mut self, scheme: DesignScheme) -> Self {
        self.design_scheme = Some(scheme);
        self
    }

    /// Checks mandatory fields. Only the working directory is mandatory.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.working_directory.trim().is_empty() {
            return Err(ConfigurationError::EmptyWorkingDirectory);
        }
        Ok(())
    }

    /// Credentials that may be written into the environment file.
    ///
    /// `Some` only when a project is selected and both credential fields are present.
    pub fn env_credentials(&self) -> Option<&Credentials> {
        match self.database_state {
            DatabaseState::ConnectedWithProject => {
                self.credentials.as_ref().filter(|c| c.is_complete())
            }
            DatabaseState::Disconnected | DatabaseState::ConnectedNoProject => None,
        }
    }
}
