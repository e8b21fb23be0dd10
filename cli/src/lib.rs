//! CopyBolt CLI library: builds configuration snapshots from settings and flags, and formats
//! directives, templates, rules and example prompts for the `copybolt` binary.
//!
//! Precedence for every snapshot field: command-line flag > settings (environment, `.env`,
//! XDG config) > built-in default. A `--snapshot` file replaces the settings layer.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use config::Settings;
use copybolt::policy::{self, PolicyBlocks};
use copybolt::{
    assemble, ConfigurationError, ConfigurationSnapshot, Credentials, DatabaseState, DesignScheme,
    Invariant, SectionError, TemplateRegistry, WORK_DIR,
};
use serde::Serialize;
use thiserror::Error;

/// Error from a CLI command.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("parse snapshot {path}: {message}")]
    ParseSnapshot { path: String, message: String },
    #[error("parse design scheme {path}: {message}")]
    ParseDesign { path: String, message: String },
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    #[error(transparent)]
    Section(#[from] SectionError),
    #[error(transparent)]
    Policy(#[from] policy::LoadError),
    #[error("serialize output: {0}")]
    Serialize(String),
    #[error("unknown output format `{0}` (expected yaml, json or text)")]
    UnknownFormat(String),
}

/// Snapshot-related inputs of `copybolt render`.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    pub work_dir: Option<String>,
    pub db_state: Option<DatabaseState>,
    pub supabase_url: Option<String>,
    pub anon_key: Option<String>,
    /// JSON design scheme file.
    pub design: Option<PathBuf>,
    /// JSON or YAML snapshot file.
    pub snapshot: Option<PathBuf>,
    pub policy_dir: Option<PathBuf>,
    /// Print only the body of this section.
    pub section: Option<String>,
    pub json: bool,
}

/// Output format of list commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Yaml,
    Json,
    Text,
}

impl FromStr for OutputFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "yaml" | "yml" => Ok(OutputFormat::Yaml),
            "json" => Ok(OutputFormat::Json),
            "text" | "txt" => Ok(OutputFormat::Text),
            _ => Err(CliError::UnknownFormat(s.to_string())),
        }
    }
}

fn read_file(path: &Path) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.display().to_string(),
        source,
    })
}

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    )
}

/// Reads a snapshot from a `.json`, `.yaml` or `.yml` file. Other extensions are read as JSON.
pub fn load_snapshot_file(path: &Path) -> Result<ConfigurationSnapshot, CliError> {
    let content = read_file(path)?;
    let parsed = if is_yaml(path) {
        serde_yaml::from_str(&content).map_err(|e| e.to_string())
    } else {
        serde_json::from_str(&content).map_err(|e| e.to_string())
    };
    parsed.map_err(|message| CliError::ParseSnapshot {
        path: path.display().to_string(),
        message,
    })
}

/// Reads a design scheme from a JSON file such as
/// `{"font": "Inter", "palette": {"primary": "#0000FF"}, "features": ["dark-mode"]}`.
pub fn load_design_file(path: &Path) -> Result<DesignScheme, CliError> {
    let content = read_file(path)?;
    serde_json::from_str(&content).map_err(|e| CliError::ParseDesign {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

fn snapshot_from_settings(settings: &Settings) -> Result<ConfigurationSnapshot, CliError> {
    let mut snapshot = ConfigurationSnapshot::new(
        settings
            .work_dir
            .clone()
            .unwrap_or_else(|| WORK_DIR.to_string()),
    )
    .with_database_state(DatabaseState::from_flags(
        settings.connected,
        settings.project_selected,
    ));
    if settings.supabase_url.is_some() || settings.anon_key.is_some() {
        snapshot = snapshot.with_credentials(Credentials::new(
            settings.supabase_url.clone().unwrap_or_default(),
            settings.anon_key.clone().unwrap_or_default(),
        ));
    }
    if let Some(path) = &settings.design_file {
        snapshot = snapshot.with_design_scheme(load_design_file(path)?);
    }
    Ok(snapshot)
}

/// Builds the snapshot for `render`: a `--snapshot` file or `settings`, then flag overrides.
pub fn build_snapshot(
    settings: &Settings,
    opts: &RenderOptions,
) -> Result<ConfigurationSnapshot, CliError> {
    let mut snapshot = match &opts.snapshot {
        Some(path) => load_snapshot_file(path)?,
        None => snapshot_from_settings(settings)?,
    };

    if let Some(dir) = &opts.work_dir {
        snapshot.working_directory = dir.clone();
    }
    if let Some(state) = opts.db_state {
        snapshot.database_state = state;
    }
    if opts.supabase_url.is_some() || opts.anon_key.is_some() {
        let creds = snapshot.credentials.get_or_insert_with(Credentials::default);
        if let Some(url) = &opts.supabase_url {
            creds.url = url.clone();
        }
        if let Some(key) = &opts.anon_key {
            creds.anon_key = key.clone();
        }
    }
    if let Some(path) = &opts.design {
        snapshot.design_scheme = Some(load_design_file(path)?);
    }
    Ok(snapshot)
}

/// Policy blocks from `--policy-dir`, else the settings' directory, else the default lookup.
///
/// An explicitly named directory must load; the default lookup falls back to built-in text.
pub fn load_policies(
    settings: &Settings,
    policy_dir: Option<&Path>,
) -> Result<PolicyBlocks, CliError> {
    match policy_dir.or(settings.policy_dir.as_deref()) {
        Some(dir) => Ok(policy::load(Some(dir))?),
        None => Ok(policy::load_or_default(None)),
    }
}

#[derive(Serialize)]
struct RenderedJson<'a> {
    directive: &'a str,
    database_state: DatabaseState,
}

/// Assembles the directive for `snapshot` and formats it as `opts` asks: the whole text, one
/// section body, or a JSON object.
pub fn render(
    snapshot: &ConfigurationSnapshot,
    policies: &PolicyBlocks,
    opts: &RenderOptions,
) -> Result<String, CliError> {
    let directive = assemble(snapshot, policies)?;
    let text = match &opts.section {
        Some(tag) => directive
            .section(tag)
            .ok_or_else(|| SectionError::MissingSection(tag.clone()))?,
        None => directive.as_str(),
    };
    if opts.json {
        let out = RenderedJson {
            directive: text,
            database_state: snapshot.database_state,
        };
        return serde_json::to_string_pretty(&out).map_err(|e| CliError::Serialize(e.to_string()));
    }
    Ok(text.to_string())
}

/// Lists templates, optionally only those carrying `tag`.
pub fn format_templates(
    registry: &TemplateRegistry,
    tag: Option<&str>,
    format: OutputFormat,
) -> Result<String, CliError> {
    let selected: Vec<_> = registry
        .iter()
        .filter(|t| tag.map_or(true, |tag| t.has_tag(tag)))
        .collect();
    match format {
        OutputFormat::Yaml => {
            serde_yaml::to_string(&selected).map_err(|e| CliError::Serialize(e.to_string()))
        }
        OutputFormat::Json => serde_json::to_string_pretty(&selected)
            .map_err(|e| CliError::Serialize(e.to_string())),
        OutputFormat::Text => Ok(selected
            .iter()
            .map(|t| {
                let tags: Vec<&str> = t.tags.iter().map(String::as_str).collect();
                format!("{}\t{}\t[{}]", t.name, t.label, tags.join(", "))
            })
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

/// One block per protocol rule: marker, statement, rationale.
pub fn format_rules() -> String {
    Invariant::all()
        .iter()
        .map(|rule| {
            format!(
                "{}\n  {}\n  Why: {}",
                rule.marker(),
                rule.statement(),
                rule.rationale()
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Example prompts, one per line.
pub fn format_examples() -> String {
    copybolt::example_prompts()
        .iter()
        .map(|p| p.text)
        .collect::<Vec<_>>()
        .join("\n")
}
