//! Resolves effective block text from loaded overrides and code defaults.

use super::text;
use super::{AuthoringPolicyFile, DatabasePolicyFile, FormattingPolicyFile, FrameworkPolicyFile};

/// Resolved policy set. Getters return the override when set, else the in-code default.
///
/// Build via [`load`](crate::policy::load), [`load_or_default`](crate::policy::load_or_default)
/// or `PolicyBlocks::default()`, and pass it to [`assemble`](fn@crate::assemble).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PolicyBlocks {
    pub framework: FrameworkPolicyFile,
    pub database: DatabasePolicyFile,
    pub formatting: FormattingPolicyFile,
    pub authoring: AuthoringPolicyFile,
}

fn pick<'a>(value: &'a Option<String>, default: &'static str) -> &'a str {
    value.as_deref().unwrap_or(default)
}

impl PolicyBlocks {
    /// Opening line that establishes the agent's role.
    pub fn persona(&self) -> &str {
        pick(&self.framework.persona, text::PERSONA)
    }

    pub fn copywriting_framework(&self) -> &str {
        pick(&self.framework.copywriting_framework, text::COPYWRITING_FRAMEWORK)
    }

    pub fn copywriting_best_practices(&self) -> &str {
        pick(
            &self.framework.copywriting_best_practices,
            text::COPYWRITING_BEST_PRACTICES,
        )
    }

    pub fn examples(&self) -> &str {
        pick(&self.framework.examples, text::EXAMPLES)
    }

    pub fn database_header(&self) -> &str {
        pick(&self.database.header, text::DATABASE_HEADER)
    }

    pub fn database_guidelines(&self) -> &str {
        pick(&self.database.guidelines, text::DATABASE_GUIDELINES)
    }

    pub fn code_formatting(&self) -> &str {
        pick(&self.formatting.code_formatting, text::CODE_FORMATTING)
    }

    pub fn chain_of_thought(&self) -> &str {
        pick(&self.formatting.chain_of_thought, text::CHAIN_OF_THOUGHT)
    }

    pub fn system_constraints(&self) -> &str {
        pick(&self.authoring.system_constraints, text::SYSTEM_CONSTRAINTS)
    }

    pub fn artifact_intro(&self) -> &str {
        pick(&self.authoring.artifact_intro, text::ARTIFACT_INTRO)
    }

    /// Artifact instruction template; contains `{cwd}` and `{action_types}`.
    pub fn artifact_instructions(&self) -> &str {
        pick(
            &self.authoring.artifact_instructions,
            text::ARTIFACT_INSTRUCTIONS,
        )
    }

    pub fn landing_page_design(&self) -> &str {
        pick(&self.authoring.landing_page_design, text::LANDING_PAGE_DESIGN)
    }

    pub fn closing_rules(&self) -> &str {
        pick(&self.authoring.closing_rules, text::CLOSING_RULES)
    }

    pub fn continue_prompt(&self) -> &str {
        pick(&self.authoring.continue_prompt, text::CONTINUE_PROMPT)
    }

    /// Number of blocks that carry an override.
    pub fn override_count(&self) -> usize {
        let f = &self.framework;
        let d = &self.database;
        let m = &self.formatting;
        let a = &self.authoring;
        [
            &f.persona,
            &f.copywriting_framework,
            &f.copywriting_best_practices,
            &f.examples,
            &d.header,
            &d.guidelines,
            &m.code_formatting,
            &m.chain_of_thought,
            &a.system_constraints,
            &a.artifact_intro,
            &a.artifact_instructions,
            &a.landing_page_design,
            &a.closing_rules,
            &a.continue_prompt,
        ]
        .iter()
        .filter(|v| v.is_some())
        .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_resolve_to_code_text() {
        let p = PolicyBlocks::default();
        assert_eq!(p.persona(), text::PERSONA);
        assert_eq!(p.code_formatting(), "Use 2 spaces for code indentation");
        assert!(p.artifact_instructions().contains("{cwd}"));
        assert!(p.artifact_instructions().contains("{action_types}"));
        assert_eq!(p.override_count(), 0);
    }

    #[test]
    fn override_wins_over_default() {
        let mut p = PolicyBlocks::default();
        p.framework.persona = Some("You are a test persona.".to_string());
        p.authoring.continue_prompt = Some("Go on.".to_string());
        assert_eq!(p.persona(), "You are a test persona.");
        assert_eq!(p.continue_prompt(), "Go on.");
        assert_eq!(p.copywriting_framework(), text::COPYWRITING_FRAMEWORK);
        assert_eq!(p.override_count(), 2);
    }
}
