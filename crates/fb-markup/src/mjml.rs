//! Shared MJML building blocks.
//!
//! Every expanded component is one `<mj-section>` holding one `<mj-column>`,
//! which keeps components legal siblings of each other inside `<mj-body>`.

use std::borrow::Cow;
use std::fmt::Write;

pub(crate) const HEADING_FONT: &str = "Unbounded, Arial, sans-serif";

/// Padding shared by component sections.
pub(crate) const SECTION_PADDING: &str = "12px 24px";

/// Open `<mj-section><mj-column ...>`.
///
/// `column_attrs` is inserted verbatim after `mj-column` and must start
/// with a space when non-empty.
pub(crate) fn open_block(out: &mut String, padding: &str, column_attrs: &str) {
    write!(
        out,
        "<mj-section padding=\"{padding}\">\n  <mj-column{column_attrs}>\n"
    )
    .unwrap();
}

/// Close a block opened with [`open_block`].
pub(crate) fn close_block(out: &mut String) {
    out.push_str("  </mj-column>\n</mj-section>\n");
}

/// Emit one `<mj-text>` line.
pub(crate) fn text(out: &mut String, attrs: &str, content: &str) {
    writeln!(out, "    <mj-text {attrs}>{content}</mj-text>").unwrap();
}

/// Rounded inline badge.
pub(crate) fn pill_span(out: &mut String, css: &str, extra_css: &str, content: &str) {
    write!(
        out,
        "<span style=\"{css}display:inline-block;border-radius:999px;{extra_css}\">{content}</span>"
    )
    .unwrap();
}

/// Escape a value placed inside a double-quoted markup attribute.
pub(crate) fn escape_attr(value: &str) -> Cow<'_, str> {
    if !value.contains(['&', '"', '<', '>']) {
        return Cow::Borrowed(value);
    }
    let mut escaped = String::with_capacity(value.len() + 8);
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_block_shape() {
        let mut out = String::new();
        open_block(&mut out, "0", " border-radius=\"14px\"");
        text(&mut out, "padding=\"0\"", "hi");
        close_block(&mut out);
        assert_eq!(
            out,
            "<mj-section padding=\"0\">\n  <mj-column border-radius=\"14px\">\n    <mj-text padding=\"0\">hi</mj-text>\n  </mj-column>\n</mj-section>\n"
        );
    }

    #[test]
    fn test_escape_attr_passthrough() {
        assert!(matches!(
            escape_attr("https://example.com/a.png?w=1"),
            Cow::Borrowed(_)
        ));
    }

    #[test]
    fn test_escape_attr() {
        assert_eq!(
            escape_attr(r#"a&b "c" <d>"#),
            "a&amp;b &quot;c&quot; &lt;d&gt;"
        );
    }
}
