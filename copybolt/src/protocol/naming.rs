//! Naming rules of the action protocol, stated as predicates an executor can apply.

/// `true` for ids such as `sales-letter-coaching-program`: lower-case ASCII letters and digits
/// separated by single hyphens, no leading or trailing hyphen.
pub fn is_kebab_case(id: &str) -> bool {
    !id.is_empty()
        && id
            .split('-')
            .all(|part| !part.is_empty() && part.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()))
}

/// `true` for migration file names such as `create_users.sql` or `add-posts-table.sql`.
///
/// The stem is lower-case, words are separated by `_` or `-`, and it starts with a letter, so
/// numeric ordering prefixes (`001_create_users.sql`, `20240101_x.sql`) are rejected.
pub fn is_descriptive_migration_name(file_name: &str) -> bool {
    let Some(stem) = file_name.strip_suffix(".sql") else {
        return false;
    };
    let Some(first) = stem.chars().next() else {
        return false;
    };
    first.is_ascii_lowercase()
        && !stem.ends_with(['_', '-'])
        && stem
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kebab_case_ids() {
        assert!(is_kebab_case("sales-letter-zeitmanagement"));
        assert!(is_kebab_case("buch-produktivitaet-kapitel1"));
        assert!(!is_kebab_case(""));
        assert!(!is_kebab_case("Sales-Letter"));
        assert!(!is_kebab_case("sales_letter"));
        assert!(!is_kebab_case("-leading"));
        assert!(!is_kebab_case("double--hyphen"));
    }

    #[test]
    fn descriptive_migration_names() {
        assert!(is_descriptive_migration_name("create_users.sql"));
        assert!(is_descriptive_migration_name("add_posts_table.sql"));
        assert!(is_descriptive_migration_name("add-last-login.sql"));
    }

    /// **Scenario**: numeric prefixes, upper case and non-sql files are rejected.
    #[test]
    fn non_descriptive_migration_names() {
        assert!(!is_descriptive_migration_name("001_create_users.sql"));
        assert!(!is_descriptive_migration_name("20240101120000_init.sql"));
        assert!(!is_descriptive_migration_name("CreateUsers.sql"));
        assert!(!is_descriptive_migration_name("create_users.txt"));
        assert!(!is_descriptive_migration_name(".sql"));
        assert!(!is_descriptive_migration_name("create_users_.sql"));
    }
}
