//! Action protocol: the tag grammar a compliant agent response must follow.
//!
//! The protocol is a contract, not a parser. This module owns its vocabulary ([`Artifact`],
//! [`Action`], [`ActionKind`]), the rules every response must obey ([`Invariant`]), and the
//! text that teaches those rules inside the directive ([`render_rules`],
//! [`render_migration_protocol`], [`render_action_types`]). Enforcement belongs to the
//! downstream executor.
//!
//! ## Wire shape
//!
//! ```text
//! <boltArtifact id="create-users-table" title="Create Users Table">
//!   <boltAction type="supabase" operation="migration" filePath="/supabase/migrations/create_users.sql">
//!     ...sql...
//!   </boltAction>
//!   <boltAction type="supabase" operation="query" projectId="${projectId}">
//!     ...same sql...
//!   </boltAction>
//! </boltArtifact>
//! ```

mod invariant;
mod naming;
mod render;

pub use invariant::Invariant;
pub use naming::{is_descriptive_migration_name, is_kebab_case};
pub use render::{render_action_types, render_migration_protocol, render_rules, RULES_TAG};

use std::fmt;

/// Element wrapping one logical unit of work.
pub const ARTIFACT_TAG: &str = "boltArtifact";

/// Element describing one executable step inside an artifact.
pub const ACTION_TAG: &str = "boltAction";

/// Directory (relative to the working directory) that holds migration files.
pub const MIGRATIONS_DIR: &str = "/supabase/migrations";

/// Literal placeholder the executor substitutes with the selected project's id.
pub const PROJECT_ID_PLACEHOLDER: &str = "${projectId}";

/// What an action does when the executor materializes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    /// Write a file (create or fully replace) at `path`.
    File,
    /// Persist SQL as a migration file at `path` for version history.
    DatabaseMigration,
    /// Apply SQL immediately to the live database of `sql_project_id`.
    DatabaseQuery,
}

impl ActionKind {
    pub fn all() -> &'static [ActionKind] {
        &[
            ActionKind::File,
            ActionKind::DatabaseMigration,
            ActionKind::DatabaseQuery,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ActionKind::File => "file",
            ActionKind::DatabaseMigration => "database-migration",
            ActionKind::DatabaseQuery => "database-query",
        }
    }

    /// Value of the `type` attribute.
    pub fn type_attr(&self) -> &'static str {
        match self {
            ActionKind::File => "file",
            ActionKind::DatabaseMigration | ActionKind::DatabaseQuery => "supabase",
        }
    }

    /// Value of the `operation` attribute, when the kind has one.
    pub fn operation_attr(&self) -> Option<&'static str> {
        match self {
            ActionKind::File => None,
            ActionKind::DatabaseMigration => Some("migration"),
            ActionKind::DatabaseQuery => Some("query"),
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One step of an [`Artifact`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    pub kind: ActionKind,
    /// `filePath` attribute; set for [`ActionKind::File`] and [`ActionKind::DatabaseMigration`].
    pub path: Option<String>,
    /// `projectId` attribute; set for [`ActionKind::DatabaseQuery`].
    pub sql_project_id: Option<String>,
    /// Literal element body.
    pub content: String,
}

impl Action {
    /// File action. `path` is relative to the working directory.
    pub fn file(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            kind: ActionKind::File,
            path: Some(path.into()),
            sql_project_id: None,
            content: content.into(),
        }
    }

    /// Migration action for `file_name` under [`MIGRATIONS_DIR`].
    ///
    /// The name is not checked; use [`is_descriptive_migration_name`] to test it first.
    pub fn migration(file_name: &str, sql: impl Into<String>) -> Self {
        Self {
            kind: ActionKind::DatabaseMigration,
            path: Some(format!("{MIGRATIONS_DIR}/{file_name}")),
            sql_project_id: None,
            content: sql.into(),
        }
    }

    /// Query action executed against `project_id`.
    pub fn query(project_id: impl Into<String>, sql: impl Into<String>) -> Self {
        Self {
            kind: ActionKind::DatabaseQuery,
            path: None,
            sql_project_id: Some(project_id.into()),
            content: sql.into(),
        }
    }

    /// The migration + query pair for one database change, carrying the same SQL.
    pub fn twin_write(file_name: &str, project_id: impl Into<String>, sql: &str) -> [Action; 2] {
        [
            Action::migration(file_name, sql),
            Action::query(project_id, sql),
        ]
    }

    /// Renders the `<boltAction>` element; every line starts with `indent`.
    pub fn render(&self, indent: &str) -> String {
        let mut attrs = format!(r#"type="{}""#, self.kind.type_attr());
        if let Some(op) = self.kind.operation_attr() {
            attrs.push_str(&format!(r#" operation="{op}""#));
        }
        if let Some(path) = &self.path {
            attrs.push_str(&format!(r#" filePath="{}""#, escape_attr(path)));
        }
        if let Some(project) = &self.sql_project_id {
            attrs.push_str(&format!(r#" projectId="{}""#, escape_attr(project)));
        }

        let mut out = format!("{indent}<{ACTION_TAG} {attrs}>\n");
        for line in self.content.lines() {
            if line.is_empty() {
                out.push('\n');
            } else {
                out.push_str(&format!("{indent}  {line}\n"));
            }
        }
        out.push_str(&format!("{indent}</{ACTION_TAG}>"));
        out
    }
}

/// One logical unit of generated work: an id, a title and ordered actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// Kebab-case id, reused for later revisions of the same unit.
    pub id: String,
    pub title: String,
    pub actions: Vec<Action>,
}

impl Artifact {
    /// New artifact with no actions. The id is not checked; see [`is_kebab_case`].
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            actions: Vec::new(),
        }
    }

    pub fn push(mut self, action: Action) -> Self {
        self.actions.push(action);
        self
    }

    pub fn extend(mut self, actions: impl IntoIterator<Item = Action>) -> Self {
        self.actions.extend(actions);
        self
    }

    /// Renders the `<boltArtifact>` element with nested actions; every line starts with `indent`.
    pub fn render(&self, indent: &str) -> String {
        let inner = format!("{indent}  ");
        let mut out = format!(
            r#"{indent}<{ARTIFACT_TAG} id="{}" title="{}">"#,
            escape_attr(&self.id),
            escape_attr(&self.title)
        );
        out.push('\n');
        let actions: Vec<String> = self.actions.iter().map(|a| a.render(&inner)).collect();
        out.push_str(&actions.join("\n\n"));
        out.push_str(&format!("\n{indent}</{ARTIFACT_TAG}>"));
        out
    }
}

fn escape_attr(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_kind_attributes() {
        assert_eq!(ActionKind::File.type_attr(), "file");
        assert_eq!(ActionKind::File.operation_attr(), None);
        assert_eq!(ActionKind::DatabaseMigration.type_attr(), "supabase");
        assert_eq!(ActionKind::DatabaseMigration.operation_attr(), Some("migration"));
        assert_eq!(ActionKind::DatabaseQuery.operation_attr(), Some("query"));
        assert_eq!(ActionKind::DatabaseQuery.to_string(), "database-query");
    }

    #[test]
    fn migration_path_lives_under_migrations_dir() {
        let a = Action::migration("create_users.sql", "select 1;");
        assert_eq!(a.path.as_deref(), Some("/supabase/migrations/create_users.sql"));
        assert_eq!(a.kind, ActionKind::DatabaseMigration);
    }

    /// **Scenario**: twin_write yields a migration followed by a query with identical SQL.
    #[test]
    fn twin_write_pairs_identical_sql() {
        let sql = "CREATE TABLE IF NOT EXISTS posts (id uuid PRIMARY KEY);";
        let [migration, query] = Action::twin_write("add_posts_table.sql", PROJECT_ID_PLACEHOLDER, sql);
        assert_eq!(migration.kind, ActionKind::DatabaseMigration);
        assert_eq!(query.kind, ActionKind::DatabaseQuery);
        assert_eq!(migration.content, query.content);
        assert_eq!(query.sql_project_id.as_deref(), Some("${projectId}"));
    }

    #[test]
    fn action_render_emits_attributes_and_indented_body() {
        let a = Action::file("chapters/kapitel-01.md", "# Kapitel 1\n\nText");
        let s = a.render("  ");
        assert_eq!(
            s,
            "  <boltAction type=\"file\" filePath=\"chapters/kapitel-01.md\">\n    # Kapitel 1\n\n    Text\n  </boltAction>"
        );
    }

    #[test]
    fn artifact_render_wraps_actions_in_order() {
        let art = Artifact::new("sales-letter-coaching", "Sales Letter")
            .push(Action::file("sales-letters/a.md", "A"))
            .push(Action::file("sales-letters/b.md", "B"));
        let s = art.render("");
        assert!(s.starts_with(r#"<boltArtifact id="sales-letter-coaching" title="Sales Letter">"#));
        assert!(s.ends_with("</boltArtifact>"));
        let a = s.find("a.md").unwrap();
        let b = s.find("b.md").unwrap();
        assert!(a < b);
    }

    #[test]
    fn attribute_values_are_escaped() {
        let art = Artifact::new("quote-test", r#"Say "hi" & <go>"#);
        let s = art.render("");
        assert!(s.contains(r#"title="Say &quot;hi&quot; &amp; &lt;go>""#));
    }

    /// **Scenario**: constructors accept names the predicates flag; checking is left to callers.
    #[test]
    fn constructors_do_not_panic_on_flagged_names() {
        assert!(!is_descriptive_migration_name("001_init.sql"));
        let a = Action::migration("001_init.sql", "select 1;");
        assert_eq!(a.path.as_deref(), Some("/supabase/migrations/001_init.sql"));

        assert!(!is_kebab_case("Not Kebab"));
        let art = Artifact::new("Not Kebab", "t");
        assert_eq!(art.id, "Not Kebab");
    }
}
