//! Text that teaches the action protocol inside the directive.
//!
//! Nothing here is overridable by policy files: the rules must appear in every directive.

use super::{
    Action, ActionKind, Artifact, Invariant, ACTION_TAG, MIGRATIONS_DIR, PROJECT_ID_PLACEHOLDER,
};

/// Tag wrapping the rule list.
pub const RULES_TAG: &str = "action_protocol_rules";

const EXAMPLE_MIGRATION_SQL: &str = r#"/*
  # Create users table

  1. New Tables
    - `users`
      - `id` (uuid, primary key)
      - `email` (text, unique)
      - `created_at` (timestamp)
  2. Security
    - Enable RLS on `users` table
    - Add policy for authenticated users to read their own data
*/

CREATE TABLE IF NOT EXISTS users (
  id uuid PRIMARY KEY DEFAULT gen_random_uuid(),
  email text UNIQUE NOT NULL,
  created_at timestamptz DEFAULT now()
);

ALTER TABLE users ENABLE ROW LEVEL SECURITY;

CREATE POLICY "Users can read own data"
  ON users
  FOR SELECT
  TO authenticated
  USING (auth.uid() = id);"#;

/// Renders the `<action_protocol_rules>` block: one entry per [`Invariant`] with marker,
/// statement and rationale.
pub fn render_rules() -> String {
    let mut out = format!("<{RULES_TAG}>\n");
    out.push_str(
        "  Every response that creates files or changes the database MUST follow these rules. A response that breaks any of them is rejected by the executor.\n\n",
    );
    for rule in Invariant::all() {
        out.push_str(&format!(
            "  - [{}] {}\n    Why: {}\n",
            rule.marker(),
            rule.statement(),
            rule.rationale()
        ));
    }
    out.push_str(&format!("</{RULES_TAG}>"));
    out
}

/// Renders the allowed action types for the artifact instructions.
pub fn render_action_types() -> String {
    let mut out = format!(
        "For each `<{ACTION_TAG}>`, add a type to the `type` attribute of the opening `<{ACTION_TAG}>` tag:\n"
    );
    for kind in ActionKind::all() {
        let line = match kind {
            ActionKind::File => format!(
                "  - {}: For writing new files or updating existing files. For each file add a `filePath` attribute to specify the file path. All file paths MUST BE relative to the current working directory.",
                kind.type_attr()
            ),
            ActionKind::DatabaseMigration | ActionKind::DatabaseQuery => {
                let operation = kind.operation_attr().unwrap_or_default();
                let target = match kind {
                    ActionKind::DatabaseMigration => format!(
                        "persists SQL as a migration file; add a `filePath` attribute under `{MIGRATIONS_DIR}`"
                    ),
                    _ => format!(
                        "executes SQL immediately; add a `projectId` attribute set to `{PROJECT_ID_PLACEHOLDER}`"
                    ),
                };
                format!(
                    "  - {} with operation=\"{operation}\" ({}): {target}.",
                    kind.type_attr(),
                    kind.as_str()
                )
            }
        };
        out.push_str(&line);
        out.push('\n');
    }
    out
}

/// Renders the twin-write instructions with templates and a worked example artifact.
///
/// `working_directory` is used to show where migration files live.
pub fn render_migration_protocol(working_directory: &str) -> String {
    let template_migration = Action::migration("your_migration.sql", "/* SQL migration content */");
    let template_query = Action::query(PROJECT_ID_PLACEHOLDER, "/* Same SQL content as migration */");
    let example = Artifact::new("create-users-table", "Create Users Table").extend(
        Action::twin_write("create_users.sql", PROJECT_ID_PLACEHOLDER, EXAMPLE_MIGRATION_SQL),
    );
    let migrations_path = format!(
        "{}{}",
        working_directory.trim_end_matches('/'),
        MIGRATIONS_DIR
    );

    let mut out = String::new();
    out.push_str("Writing SQL Migrations:\n");
    out.push_str("CRITICAL: For EVERY database change, you MUST provide TWO actions:\n");
    out.push_str("  1. Migration File Creation:\n");
    out.push_str(&template_migration.render("    "));
    out.push_str("\n\n  2. Immediate Query Execution:\n");
    out.push_str(&template_query.render("    "));
    out.push_str("\n\n  Example:\n");
    out.push_str(&example.render("  "));
    out.push_str("\n\n");
    out.push_str("- IMPORTANT: The SQL content must be identical in both actions to ensure consistency between the migration file and the executed query.\n");
    out.push_str("- CRITICAL: NEVER use diffs for migration files, ALWAYS provide COMPLETE file content\n");
    out.push_str(&format!(
        "- For each database change, create a new SQL migration file in `{migrations_path}`\n"
    ));
    out.push_str("- NEVER update existing migration files, ALWAYS create a new migration file for any changes\n");
    out.push_str("- Name migration files descriptively and DO NOT include a number prefix (e.g., `create_users.sql`, `add_posts_table.sql`).\n");
    out.push_str("- DO NOT worry about ordering as the files will be renamed correctly!\n");
    out.push_str("- ALWAYS enable row level security (RLS) for new tables and add appropriate RLS policies for CRUD operations for each table\n");
    out.push_str("- Use `IF EXISTS` or `IF NOT EXISTS` to prevent errors when creating or altering database objects");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rules_block_lists_every_marker() {
        let s = render_rules();
        assert!(s.starts_with("<action_protocol_rules>"));
        assert!(s.ends_with("</action_protocol_rules>"));
        for rule in Invariant::all() {
            assert!(s.contains(&format!("[{}]", rule.marker())), "missing {}", rule);
            assert!(s.contains(rule.statement()));
        }
    }

    #[test]
    fn action_types_cover_every_kind() {
        let s = render_action_types();
        assert!(s.contains("- file:"));
        assert!(s.contains("operation=\"migration\" (database-migration)"));
        assert!(s.contains("operation=\"query\" (database-query)"));
        assert!(s.contains("${projectId}"));
    }

    /// **Scenario**: the worked example pairs migration and query with the same SQL.
    #[test]
    fn worked_example_obeys_twin_write_and_security() {
        let s = render_migration_protocol("/home/project");
        assert!(s.contains(r#"<boltArtifact id="create-users-table" title="Create Users Table">"#));
        assert!(s.contains(r#"operation="migration" filePath="/supabase/migrations/create_users.sql""#));
        assert_eq!(s.matches("CREATE TABLE IF NOT EXISTS users").count(), 2);
        assert_eq!(s.matches("ENABLE ROW LEVEL SECURITY").count(), 2);
        assert!(s.contains("`/home/project/supabase/migrations`"));
    }

    #[test]
    fn trailing_slash_in_working_directory_is_not_doubled() {
        let s = render_migration_protocol("/srv/copy/");
        assert!(s.contains("`/srv/copy/supabase/migrations`"));
    }
}
