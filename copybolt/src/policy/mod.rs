//! Policy blocks: the static text modules composed into every directive.
//!
//! Defaults live in code ([`text`]); a directory of YAML files may override individual blocks.
//! See [`PolicyBlocks`] and [`load`]. The action protocol rules and the database-state text are
//! not part of any policy file and cannot be overridden.

mod load;
mod markup;
mod resolve;
pub mod text;

use serde::Deserialize;

pub use load::{load, load_or_default, LoadError, POLICY_DIR_ENV};
pub use markup::{render_allowed_elements, render_message_formatting, ALLOWED_HTML_ELEMENTS};
pub use resolve::PolicyBlocks;

/// Placeholder for the working directory in `artifact_instructions`.
pub const CWD_PLACEHOLDER: &str = "{cwd}";

/// Placeholder for the action type list in `artifact_instructions`.
pub const ACTION_TYPES_PLACEHOLDER: &str = "{action_types}";

/// Per-file YAML shape for `policies/framework.yaml`. All keys optional.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case", default)]
pub struct FrameworkPolicyFile {
    pub persona: Option<String>,
    pub copywriting_framework: Option<String>,
    /// Asset playbooks: books, sales letters, VSL scripts, landing pages, ads, emails.
    pub copywriting_best_practices: Option<String>,
    pub examples: Option<String>,
}

/// Per-file YAML shape for `policies/database.yaml`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case", default)]
pub struct DatabasePolicyFile {
    pub header: Option<String>,
    pub guidelines: Option<String>,
}

/// Per-file YAML shape for `policies/formatting.yaml`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case", default)]
pub struct FormattingPolicyFile {
    pub code_formatting: Option<String>,
    pub chain_of_thought: Option<String>,
}

/// Per-file YAML shape for `policies/authoring.yaml`. Placeholders in `artifact_instructions`:
/// `{cwd}`, `{action_types}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case", default)]
pub struct AuthoringPolicyFile {
    pub system_constraints: Option<String>,
    pub artifact_intro: Option<String>,
    pub artifact_instructions: Option<String>,
    pub landing_page_design: Option<String>,
    pub closing_rules: Option<String>,
    pub continue_prompt: Option<String>,
}
