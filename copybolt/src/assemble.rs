//! Directive assembly: configuration snapshot and policy blocks in, directive text out.
//!
//! [`assemble`] is a pure function. It performs no I/O, holds no state between calls and
//! returns byte-identical output for equal inputs. The only conditional parts are the database
//! reminder, the environment-file guidance, the working directory and the design section.

use crate::design::render_design_section;
use crate::directive::Directive;
use crate::error::ConfigurationError;
use crate::policy::{
    render_message_formatting, text, PolicyBlocks, ACTION_TYPES_PLACEHOLDER, CWD_PLACEHOLDER,
};
use crate::protocol::{render_action_types, render_migration_protocol, render_rules};
use crate::snapshot::{ConfigurationSnapshot, DatabaseState};

/// Reminder shown while no database is connected.
pub const DISCONNECTED_REMINDER: &str = "You are not connected to Supabase. Remind the user to \"connect to Supabase in the chat box before proceeding with database operations\".";

/// Reminder shown while connected without a selected project.
pub const NO_PROJECT_REMINDER: &str = "You are connected to Supabase but no project is selected. Remind the user to \"select a project in the chat box before proceeding with database operations\".";

/// Environment variable holding the project URL in the generated `.env` file.
pub const ENV_URL_KEY: &str = "VITE_SUPABASE_URL";

/// Environment variable holding the anonymous key in the generated `.env` file.
pub const ENV_ANON_KEY_KEY: &str = "VITE_SUPABASE_ANON_KEY";

/// Top-level sections in the order they appear in every directive.
pub const SECTION_ORDER: &[&str] = &[
    "copywriting_framework",
    "system_constraints",
    "database_instructions",
    "code_formatting_info",
    "message_formatting_info",
    "chain_of_thought_instructions",
    "artifact_info",
    "copywriting_best_practices",
    "examples",
];

const INDENT: &str = "  ";

/// Reminder for the current rung of the readiness ladder. `None` once a project is selected.
pub fn database_reminder(state: DatabaseState) -> Option<&'static str> {
    match state {
        DatabaseState::Disconnected => Some(DISCONNECTED_REMINDER),
        DatabaseState::ConnectedNoProject => Some(NO_PROJECT_REMINDER),
        DatabaseState::ConnectedWithProject => None,
    }
}

/// Instruction about the `.env` file.
///
/// Names the two variables and their values only when a project is selected and both
/// credential fields are present; otherwise asks for the file without naming any variable.
pub fn env_file_guidance(snapshot: &ConfigurationSnapshot) -> String {
    match snapshot.env_credentials() {
        Some(creds) => format!(
            "IMPORTANT: Create a .env file if it doesn't exist and include the following variables:\n{INDENT}{ENV_URL_KEY}={}\n{INDENT}{ENV_ANON_KEY_KEY}={}",
            creds.url, creds.anon_key
        ),
        None => "IMPORTANT: Create a .env file if it doesn't exist.".to_string(),
    }
}

/// Prefixes every non-empty line with `prefix`.
fn indent(body: &str, prefix: &str) -> String {
    body.lines()
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("{prefix}{line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// `<tag>`, indented body, `</tag>`.
fn wrap(tag: &str, body: &str) -> String {
    format!("<{tag}>\n{}\n</{tag}>", indent(body.trim_end(), INDENT))
}

fn database_instructions(snapshot: &ConfigurationSnapshot, policies: &PolicyBlocks) -> String {
    let mut note = "IMPORTANT NOTE: Supabase project setup and configuration is handled separately by the user!".to_string();
    if let Some(reminder) = database_reminder(snapshot.database_state) {
        note.push(' ');
        note.push_str(reminder);
    }
    [
        policies.database_header().to_string(),
        format!("{note}\n{}\n{}", env_file_guidance(snapshot), text::ENV_FILE_PROHIBITIONS),
        text::DATABASE_SAFETY.to_string(),
        render_migration_protocol(&snapshot.working_directory),
        policies.database_guidelines().to_string(),
    ]
    .join("\n\n")
}

/// Replaces each placeholder in one left-to-right pass; substituted text is never rescanned.
fn fill_placeholders(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(pos) = rest.find('{') {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];
        match values.iter().find(|(key, _)| tail.starts_with(key)) {
            Some((key, value)) => {
                out.push_str(value);
                rest = &tail[key.len()..];
            }
            None => {
                out.push('{');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

/// Artifact instructions with the working directory and action types filled in.
///
/// A template without a placeholder still gets that text appended, so overrides cannot drop
/// the working directory or the action kinds.
fn artifact_instructions(snapshot: &ConfigurationSnapshot, policies: &PolicyBlocks) -> String {
    let template = policies.artifact_instructions();
    let action_types = render_action_types();
    let action_types = action_types.trim_end();
    let mut instructions = fill_placeholders(
        template,
        &[
            (CWD_PLACEHOLDER, snapshot.working_directory.as_str()),
            (ACTION_TYPES_PLACEHOLDER, action_types),
        ],
    );
    if !template.contains(CWD_PLACEHOLDER) {
        tracing::debug!("artifact instructions lack {CWD_PLACEHOLDER}; appending it");
        instructions.push_str(&format!(
            "\n\nThe current working directory is `{}`.",
            snapshot.working_directory
        ));
    }
    if !template.contains(ACTION_TYPES_PLACEHOLDER) {
        tracing::debug!("artifact instructions lack {ACTION_TYPES_PLACEHOLDER}; appending it");
        instructions.push_str("\n\n");
        instructions.push_str(action_types);
    }
    instructions
}

fn artifact_info(snapshot: &ConfigurationSnapshot, policies: &PolicyBlocks) -> String {
    let instructions = artifact_instructions(snapshot, policies);
    let design = format!(
        "{}\n\n{}",
        policies.landing_page_design(),
        render_design_section(snapshot.design_scheme.as_ref())
    );
    [
        policies.artifact_intro().to_string(),
        wrap("artifact_instructions", &instructions),
        render_rules(),
        wrap("design_instructions_for_landing_pages", &design),
    ]
    .join("\n\n")
}

/// Builds the directive for `snapshot` using `policies`.
///
/// Fails only with [`ConfigurationError::EmptyWorkingDirectory`]; no partial text is produced.
pub fn assemble(
    snapshot: &ConfigurationSnapshot,
    policies: &PolicyBlocks,
) -> Result<Directive, ConfigurationError> {
    snapshot.validate()?;

    let parts = [
        policies.persona().to_string(),
        wrap("copywriting_framework", policies.copywriting_framework()),
        wrap("system_constraints", policies.system_constraints()),
        wrap(
            "database_instructions",
            &database_instructions(snapshot, policies),
        ),
        wrap("code_formatting_info", policies.code_formatting()),
        wrap("message_formatting_info", &render_message_formatting()),
        wrap("chain_of_thought_instructions", policies.chain_of_thought()),
        wrap("artifact_info", &artifact_info(snapshot, policies)),
        policies.closing_rules().to_string(),
        wrap(
            "copywriting_best_practices",
            policies.copywriting_best_practices(),
        ),
        format!(
            "Here are some examples of correct copywriting asset creation:\n\n{}",
            wrap("examples", policies.examples())
        ),
    ];
    let mut text = parts.join("\n\n");
    text.push('\n');

    tracing::debug!(
        state = %snapshot.database_state,
        credentials_released = snapshot.env_credentials().is_some(),
        design = snapshot.design_scheme.is_some(),
        bytes = text.len(),
        "assembled directive"
    );
    Ok(Directive::from(text))
}

/// [`assemble`] with the in-code default policy blocks.
pub fn assemble_default(snapshot: &ConfigurationSnapshot) -> Result<Directive, ConfigurationError> {
    assemble(snapshot, &PolicyBlocks::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::Credentials;

    #[test]
    fn reminder_mapping_is_total() {
        assert_eq!(
            database_reminder(DatabaseState::Disconnected),
            Some(DISCONNECTED_REMINDER)
        );
        assert_eq!(
            database_reminder(DatabaseState::ConnectedNoProject),
            Some(NO_PROJECT_REMINDER)
        );
        assert_eq!(database_reminder(DatabaseState::ConnectedWithProject), None);
    }

    #[test]
    fn env_guidance_without_credentials_names_no_variables() {
        let s = env_file_guidance(&ConfigurationSnapshot::default());
        assert_eq!(s, "IMPORTANT: Create a .env file if it doesn't exist.");
    }

    #[test]
    fn env_guidance_with_credentials_lists_both_keys() {
        let snap = ConfigurationSnapshot::default()
            .with_database_state(DatabaseState::ConnectedWithProject)
            .with_credentials(Credentials::new("https://x.supabase.co", "abc123"));
        let s = env_file_guidance(&snap);
        assert!(s.contains("VITE_SUPABASE_URL=https://x.supabase.co"));
        assert!(s.contains("VITE_SUPABASE_ANON_KEY=abc123"));
    }

    #[test]
    fn indent_leaves_blank_lines_empty() {
        assert_eq!(indent("a\n\n  b", "  "), "  a\n\n    b");
    }

    #[test]
    fn sections_appear_in_fixed_order() {
        let d = assemble_default(&ConfigurationSnapshot::default()).unwrap();
        let text = d.as_str();
        assert!(text.starts_with(text::PERSONA));
        let positions: Vec<usize> = SECTION_ORDER
            .iter()
            .map(|tag| text.find(&format!("<{tag}>")).unwrap())
            .collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
        assert!(text.ends_with("</examples>\n"));
    }

    #[test]
    fn placeholders_are_substituted() {
        let d = assemble_default(&ConfigurationSnapshot::new("/srv/work")).unwrap();
        assert!(d.as_str().contains("The current working directory is `/srv/work`."));
        assert!(!d.as_str().contains("{cwd}"));
        assert!(!d.as_str().contains("{action_types}"));
        assert!(d.as_str().contains("8. For each `<boltAction>`"));
    }

    /// **Scenario**: a working directory that looks like a placeholder is kept verbatim.
    #[test]
    fn working_directory_is_not_rescanned() {
        let d = assemble_default(&ConfigurationSnapshot::new("/srv/{action_types}")).unwrap();
        assert!(d
            .as_str()
            .contains("The current working directory is `/srv/{action_types}`."));
        assert!(d.as_str().contains("8. For each `<boltAction>`"));
    }

    #[test]
    fn fill_placeholders_leaves_unknown_braces() {
        let out = fill_placeholders("{a}-{b}-{c", &[("{a}", "{b}"), ("{b}", "x")]);
        assert_eq!(out, "{b}-x-{c");
    }

    /// **Scenario**: an artifact-instructions override without placeholders still carries the
    /// working directory and every action kind.
    #[test]
    fn override_without_placeholders_keeps_action_types() {
        let mut policies = PolicyBlocks::default();
        policies.authoring.artifact_instructions = Some("Keep artifacts small.".to_string());
        let d = assemble(&ConfigurationSnapshot::new("/srv/work"), &policies).unwrap();
        let body = d.section("artifact_instructions").unwrap();
        assert!(body.contains("Keep artifacts small."));
        assert!(body.contains("The current working directory is `/srv/work`."));
        assert!(body.contains("- file: For writing new files"));
        assert!(body.contains("(database-migration)"));
        assert!(body.contains("(database-query)"));
    }

    #[test]
    fn override_with_placeholders_is_not_doubled() {
        let mut policies = PolicyBlocks::default();
        policies.authoring.artifact_instructions =
            Some("Work in `{cwd}`.\n{action_types}".to_string());
        let d = assemble(&ConfigurationSnapshot::new("/srv/work"), &policies).unwrap();
        let body = d.section("artifact_instructions").unwrap();
        assert_eq!(body.matches("/srv/work").count(), 1);
        assert_eq!(body.matches("- file: For writing new files").count(), 1);
    }

    #[test]
    fn empty_working_directory_fails() {
        let err = assemble_default(&ConfigurationSnapshot::new("")).unwrap_err();
        assert_eq!(err, ConfigurationError::EmptyWorkingDirectory);
    }
}
