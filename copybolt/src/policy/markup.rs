//! Markup whitelist for chat messages.

/// HTML elements the agent may use to format chat messages.
pub const ALLOWED_HTML_ELEMENTS: &[&str] = &[
    "a", "b", "blockquote", "br", "code", "dd", "del", "details", "div", "dl", "dt", "em", "h1",
    "h2", "h3", "h4", "h5", "h6", "hr", "i", "ins", "kbd", "li", "ol", "p", "pre", "q", "rp", "rt",
    "ruby", "s", "samp", "source", "span", "strike", "strong", "sub", "summary", "sup", "table",
    "tbody", "td", "tfoot", "th", "thead", "tr", "ul", "var", "think",
];

/// `<a>, <b>, <blockquote>, ...` in whitelist order.
pub fn render_allowed_elements() -> String {
    ALLOWED_HTML_ELEMENTS
        .iter()
        .map(|tag| format!("<{tag}>"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Body of the `<message_formatting_info>` section.
pub fn render_message_formatting() -> String {
    format!(
        "You can make the output pretty by using only the following available HTML elements: {}",
        render_allowed_elements()
    )
}
