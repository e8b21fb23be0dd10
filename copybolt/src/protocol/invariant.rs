//! Rules every agent response must satisfy for the executor to materialize it safely.

use std::fmt;

/// A protocol rule. Each has a stable [`marker`](Invariant::marker) that appears verbatim in
/// every rendered directive, so contract tests (and executors) can look for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Invariant {
    StructureBeforeContent,
    MigrationTwinWrite,
    DescriptiveMigrationNames,
    AppendOnlyMigrations,
    NoDestructiveOperations,
    SecurityByDefault,
    IdempotentDdl,
}

impl Invariant {
    /// All rules in the order they are rendered.
    pub fn all() -> &'static [Invariant] {
        &[
            Invariant::StructureBeforeContent,
            Invariant::MigrationTwinWrite,
            Invariant::DescriptiveMigrationNames,
            Invariant::AppendOnlyMigrations,
            Invariant::NoDestructiveOperations,
            Invariant::SecurityByDefault,
            Invariant::IdempotentDdl,
        ]
    }

    pub fn marker(&self) -> &'static str {
        match self {
            Invariant::StructureBeforeContent => "STRUCTURE-BEFORE-CONTENT",
            Invariant::MigrationTwinWrite => "MIGRATION-TWIN-WRITE",
            Invariant::DescriptiveMigrationNames => "NO-NUMERIC-PREFIX",
            Invariant::AppendOnlyMigrations => "APPEND-ONLY-MIGRATIONS",
            Invariant::NoDestructiveOperations => "NO-DESTRUCTIVE-OPERATIONS",
            Invariant::SecurityByDefault => "SECURITY-BY-DEFAULT",
            Invariant::IdempotentDdl => "IDEMPOTENT-DDL",
        }
    }

    /// The rule itself, phrased as an instruction to the agent.
    pub fn statement(&self) -> &'static str {
        match self {
            Invariant::StructureBeforeContent => {
                "The order of the actions is VERY IMPORTANT. Create folder structure first, then content files: inside one artifact, every action that establishes folders or files comes before any action that fills file content."
            }
            Invariant::MigrationTwinWrite => {
                "For EVERY database change, emit a `database-migration` action immediately followed by a `database-query` action. The SQL content of the two actions MUST be byte-identical."
            }
            Invariant::DescriptiveMigrationNames => {
                "Name migration files descriptively in lower case with words separated by underscores or hyphens, and DO NOT include a number prefix (e.g. `create_users.sql`, `add_posts_table.sql`)."
            }
            Invariant::AppendOnlyMigrations => {
                "NEVER update existing migration files. ALWAYS create a new migration file for any change, including corrections."
            }
            Invariant::NoDestructiveOperations => {
                "FORBIDDEN: destructive operations like `DROP` or `DELETE` that could discard existing rows or columns, and explicit transaction control statements (`BEGIN`, `COMMIT`, `ROLLBACK`, `END`). Exception: `DO $$ BEGIN ... END $$` anonymous PL/pgSQL blocks that only wrap conditional logic."
            }
            Invariant::SecurityByDefault => {
                "Every new table MUST get `ALTER TABLE ... ENABLE ROW LEVEL SECURITY` and at least one access policy in the same artifact."
            }
            Invariant::IdempotentDdl => {
                "Guard table and column creation with `IF NOT EXISTS` (or a conditional `DO $$` block for columns) so running the same migration twice is a no-op, not an error."
            }
        }
    }

    /// Why the executor depends on the rule.
    pub fn rationale(&self) -> &'static str {
        match self {
            Invariant::StructureBeforeContent => {
                "Actions are executed strictly in emission order with no dependency graph; content written to a path that does not exist yet fails."
            }
            Invariant::MigrationTwinWrite => {
                "The migration file is kept for version history while the query is applied to the live database right away; if they differ, history and live schema drift apart."
            }
            Invariant::DescriptiveMigrationNames => {
                "DO NOT worry about ordering: the files are renumbered by a later step, so file name order never decides execution order."
            }
            Invariant::AppendOnlyMigrations => {
                "Existing migrations are an immutable audit trail of the schema."
            }
            Invariant::NoDestructiveOperations => {
                "DATA INTEGRITY IS THE HIGHEST PRIORITY: leaving a schema problem unresolved is preferred over losing user data or breaking the executor's own transaction handling."
            }
            Invariant::SecurityByDefault => {
                "Security is non-negotiable; there is no opt-out for any table."
            }
            Invariant::IdempotentDdl => {
                "Migrations may be applied more than once, e.g. when the file and the query both reach the same database."
            }
        }
    }
}

impl fmt::Display for Invariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.marker())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn seven_rules_with_unique_markers() {
        let markers: HashSet<&str> = Invariant::all().iter().map(|i| i.marker()).collect();
        assert_eq!(Invariant::all().len(), 7);
        assert_eq!(markers.len(), 7);
    }

    #[test]
    fn statements_and_rationales_are_non_empty() {
        for rule in Invariant::all() {
            assert!(!rule.statement().trim().is_empty(), "{rule}");
            assert!(!rule.rationale().trim().is_empty(), "{rule}");
        }
    }
}
