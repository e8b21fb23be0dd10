//! The assembled directive and the follow-up prompt sent after a truncated response.

use std::fmt;

use crate::design::{parse_design_section, DESIGN_SECTION_TAG};
use crate::error::SectionError;
use crate::policy::PolicyBlocks;
use crate::snapshot::DesignScheme;

/// Immutable directive text, regenerated in full by every [`assemble`](fn@crate::assemble) call.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Directive(String);

impl Directive {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Text between the first `<tag>` and the following `</tag>`, or `None` when absent.
    pub fn section(&self, tag: &str) -> Option<&str> {
        let open = format!("<{tag}>");
        let close = format!("</{tag}>");
        let start = self.0.find(&open)? + open.len();
        let end = start + self.0[start..].find(&close)?;
        Some(&self.0[start..end])
    }

    /// Reads the design scheme back out of the `<user_provided_design>` section.
    ///
    /// Fields rendered as `undefined` come back as `None`.
    pub fn design_scheme(&self) -> Result<DesignScheme, SectionError> {
        let body = self
            .section(DESIGN_SECTION_TAG)
            .ok_or_else(|| SectionError::MissingSection(DESIGN_SECTION_TAG.to_string()))?;
        parse_design_section(body)
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Directive {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for Directive {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl From<Directive> for String {
    fn from(directive: Directive) -> Self {
        directive.0
    }
}

/// Message asking the agent to resume a truncated response without repeating any tags.
pub fn continue_prompt(policies: &PolicyBlocks) -> &str {
    policies.continue_prompt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_returns_inner_text() {
        let d = Directive::from("a <x>inner</x> b".to_string());
        assert_eq!(d.section("x"), Some("inner"));
        assert_eq!(d.section("y"), None);
    }

    #[test]
    fn section_without_close_tag_is_none() {
        let d = Directive::from("<x>dangling".to_string());
        assert_eq!(d.section("x"), None);
    }

    #[test]
    fn design_scheme_missing_section() {
        let d = Directive::from("no design here".to_string());
        assert_eq!(
            d.design_scheme().unwrap_err(),
            SectionError::MissingSection("user_provided_design".to_string())
        );
    }

    #[test]
    fn conversions_preserve_text() {
        let d = Directive::from("hello".to_string());
        assert_eq!(d.len(), 5);
        assert!(!d.is_empty());
        assert_eq!(d.to_string(), "hello");
        assert_eq!(d.as_ref(), "hello");
        assert_eq!(String::from(d.clone()), "hello");
        assert_eq!(d.into_string(), "hello");
    }

    #[test]
    fn continue_prompt_forbids_repeating_tags() {
        let p = PolicyBlocks::default();
        let s = continue_prompt(&p);
        assert!(s.starts_with("Continue your prior response."));
        assert!(s.contains("Do not repeat any content, including artifact and action tags."));
    }
}
