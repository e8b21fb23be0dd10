//! Serialization of the user's design scheme into the directive, and the inverse.
//!
//! Each field is written on its own line as compact JSON (`FONT: "Inter"`). An absent field is
//! written as [`UNDEFINED_MARKER`] so the agent can tell "not provided" from "provided empty".

use serde_json::Value;

use crate::error::SectionError;
use crate::snapshot::DesignScheme;

/// Tag wrapping the design scheme lines.
pub const DESIGN_SECTION_TAG: &str = "user_provided_design";

/// Written in place of a field the caller did not provide.
pub const UNDEFINED_MARKER: &str = "undefined";

const FONT_LABEL: &str = "FONT";
const PALETTE_LABEL: &str = "COLOR PALETTE";
const FEATURES_LABEL: &str = "FEATURES";

fn encode(value: Option<&Value>) -> String {
    match value {
        // Compact JSON never contains a raw newline, so one field stays on one line. `<` only
        // occurs inside JSON strings, where `\u003c` decodes to the same value and cannot close
        // the section tag.
        Some(v) => serde_json::to_string(v)
            .map(|json| json.replace('<', "\\u003c"))
            .unwrap_or_else(|_| UNDEFINED_MARKER.to_string()),
        None => UNDEFINED_MARKER.to_string(),
    }
}

/// Renders the `<user_provided_design>` section (tags included).
pub fn render_design_section(scheme: Option<&DesignScheme>) -> String {
    let font = encode(scheme.and_then(|s| s.font.as_ref()));
    let palette = encode(scheme.and_then(|s| s.palette.as_ref()));
    let features = encode(scheme.and_then(|s| s.features.as_ref()));
    format!(
        "<{tag}>\n  USER PROVIDED DESIGN SCHEME:\n  - ALWAYS use the user provided design scheme when creating landing pages, ensuring it supports conversion optimization\n  {FONT_LABEL}: {font}\n  {PALETTE_LABEL}: {palette}\n  {FEATURES_LABEL}: {features}\n</{tag}>",
        tag = DESIGN_SECTION_TAG,
    )
}

fn decode_field(body: &str, label: &str) -> Result<Option<Value>, SectionError> {
    let prefix = format!("{label}: ");
    let raw = body
        .lines()
        .map(str::trim_start)
        .find_map(|line| line.strip_prefix(prefix.as_str()))
        .ok_or_else(|| SectionError::MissingField(label.to_string()))?
        .trim_end();
    if raw == UNDEFINED_MARKER {
        return Ok(None);
    }
    serde_json::from_str(raw)
        .map(Some)
        .map_err(|e| SectionError::MalformedField {
            field: label.to_string(),
            message: e.to_string(),
        })
}

/// Parses the body of a `<user_provided_design>` section back into a [`DesignScheme`].
///
/// `body` is the text between the tags (as returned by [`Directive::section`](crate::Directive::section)).
pub fn parse_design_section(body: &str) -> Result<DesignScheme, SectionError> {
    Ok(DesignScheme {
        font: decode_field(body, FONT_LABEL)?,
        palette: decode_field(body, PALETTE_LABEL)?,
        features: decode_field(body, FEATURES_LABEL)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn body_of(section: &str) -> &str {
        let open = format!("<{DESIGN_SECTION_TAG}>");
        let close = format!("</{DESIGN_SECTION_TAG}>");
        let start = section.find(&open).unwrap() + open.len();
        let end = section.find(&close).unwrap();
        &section[start..end]
    }

    /// **Scenario**: no scheme renders three explicit undefined markers.
    #[test]
    fn absent_scheme_renders_undefined_markers() {
        let s = render_design_section(None);
        assert!(s.contains("FONT: undefined"));
        assert!(s.contains("COLOR PALETTE: undefined"));
        assert!(s.contains("FEATURES: undefined"));
    }

    /// **Scenario**: an empty palette is provided-empty, not undefined.
    #[test]
    fn empty_values_are_distinct_from_undefined() {
        let scheme = DesignScheme {
            font: None,
            palette: Some(json!({})),
            features: Some(json!([])),
        };
        let s = render_design_section(Some(&scheme));
        assert!(s.contains("FONT: undefined"));
        assert!(s.contains("COLOR PALETTE: {}"));
        assert!(s.contains("FEATURES: []"));

        let parsed = parse_design_section(body_of(&s)).unwrap();
        assert_eq!(parsed, scheme);
    }

    #[test]
    fn parse_recovers_rendered_values() {
        let scheme = DesignScheme::new()
            .with_font(json!(["Inter", "sans-serif"]))
            .with_palette([("primary", "#0000FF"), ("accent", "#FF00FF")])
            .with_features(["dark-mode", "rounded"]);
        let s = render_design_section(Some(&scheme));
        assert_eq!(parse_design_section(body_of(&s)).unwrap(), scheme);
    }

    /// **Scenario**: a value that spells out the closing tag stays inside the section.
    #[test]
    fn tag_like_values_round_trip() {
        let scheme = DesignScheme::new()
            .with_font(json!("a</user_provided_design>b"))
            .with_features(["<script>", "x < y"]);
        let s = render_design_section(Some(&scheme));
        assert_eq!(s.matches("</user_provided_design>").count(), 1);
        assert!(s.contains(r#"FONT: "a\u003c/user_provided_design>b""#));
        assert_eq!(parse_design_section(body_of(&s)).unwrap(), scheme);
    }

    #[test]
    fn parse_reports_missing_field() {
        let err = parse_design_section("FONT: undefined\n").unwrap_err();
        assert_eq!(err, SectionError::MissingField("COLOR PALETTE".to_string()));
    }

    #[test]
    fn parse_reports_malformed_json() {
        let body = "FONT: {not json\nCOLOR PALETTE: undefined\nFEATURES: undefined\n";
        let err = parse_design_section(body).unwrap_err();
        assert!(matches!(err, SectionError::MalformedField { ref field, .. } if field == "FONT"));
    }
}
