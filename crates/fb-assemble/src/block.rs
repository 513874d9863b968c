//! Delimited block extraction.

/// A named content block and the template placeholder it fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block {
    /// Name used in the `<!--NAME-->` delimiters.
    pub name: &'static str,
    /// Placeholder replaced in the template, including braces.
    pub placeholder: &'static str,
}

/// Blocks required for assembly, in template order.
pub const BLOCKS: [Block; 4] = [
    Block {
        name: "ISSUE_INFO",
        placeholder: "{{ISSUE_INFO}}",
    },
    Block {
        name: "TICKER",
        placeholder: "{{TICKER_CONTENT}}",
    },
    Block {
        name: "SECTIONS",
        placeholder: "{{SECTIONS}}",
    },
    Block {
        name: "FOOTER_EXCEPT",
        placeholder: "{{FOOTER_EXCEPT}}",
    },
];

/// Content between `<!--NAME-->` and the next `<!--/NAME-->`, trimmed.
///
/// Returns `None` when either delimiter is missing.
///
/// ```
/// use fb_assemble::extract_block;
///
/// let raw = "junk <!--TICKER-->\n  breaking news\n<!--/TICKER--> junk";
/// assert_eq!(extract_block(raw, "TICKER"), Some("breaking news"));
/// assert_eq!(extract_block(raw, "SECTIONS"), None);
/// ```
#[must_use]
pub fn extract_block<'a>(raw: &'a str, name: &str) -> Option<&'a str> {
    let open = format!("<!--{name}-->");
    let close = format!("<!--/{name}-->");

    let start = raw.find(&open)? + open.len();
    let len = raw[start..].find(&close)?;
    Some(raw[start..start + len].trim())
}

/// Remove a Markdown code fence wrapped around generated output.
///
/// Strips a leading ```` ``` ```` line (optionally tagged `html`) and a
/// trailing ```` ``` ```` line. Text without fences is returned unchanged.
#[must_use]
pub fn strip_code_fences(text: &str) -> &str {
    let mut body = text;

    if let Some(rest) = body.strip_prefix("```")
        && let Some(newline) = rest.find('\n')
    {
        let info = rest[..newline].trim();
        if info.is_empty()
            || info.eq_ignore_ascii_case("html")
            || info.eq_ignore_ascii_case("htm")
        {
            body = &rest[newline + 1..];
        }
    }

    if let Some(before) = body.trim_end().strip_suffix("```")
        && let Some(content) = before.strip_suffix('\n')
    {
        body = content.strip_suffix('\r').unwrap_or(content);
    }

    body
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_extract_block_multiline() {
        let raw = "<!--SECTIONS-->\n<fb-zigzag/>\n<p>x</p>\n<!--/SECTIONS-->";
        assert_eq!(extract_block(raw, "SECTIONS"), Some("<fb-zigzag/>\n<p>x</p>"));
    }

    #[test]
    fn test_extract_block_missing_close() {
        assert_eq!(extract_block("<!--TICKER-->news", "TICKER"), None);
    }

    #[test]
    fn test_extract_block_first_occurrence() {
        let raw = "<!--TICKER-->one<!--/TICKER--><!--TICKER-->two<!--/TICKER-->";
        assert_eq!(extract_block(raw, "TICKER"), Some("one"));
    }

    #[test]
    fn test_extract_block_empty() {
        assert_eq!(
            extract_block("<!--FOOTER_EXCEPT--> <!--/FOOTER_EXCEPT-->", "FOOTER_EXCEPT"),
            Some("")
        );
    }

    #[test]
    fn test_extract_block_name_is_exact() {
        let raw = "<!--SECTIONS_OLD-->old<!--/SECTIONS_OLD-->";
        assert_eq!(extract_block(raw, "SECTIONS"), None);
    }

    #[test]
    fn test_strip_html_fence() {
        assert_eq!(strip_code_fences("```html\n<p>hi</p>\n```"), "<p>hi</p>");
        assert_eq!(strip_code_fences("```\n<p>hi</p>\n```\n"), "<p>hi</p>");
    }

    #[test]
    fn test_strip_fence_crlf() {
        assert_eq!(strip_code_fences("```html\r\n<p>hi</p>\r\n```"), "<p>hi</p>");
    }

    #[test]
    fn test_no_fence_unchanged() {
        let text = "<p>```inline``` code</p>\n";
        assert_eq!(strip_code_fences(text), text);
    }

    #[test]
    fn test_other_language_fence_kept() {
        let text = "```rust\nfn main() {}";
        assert_eq!(strip_code_fences(text), text);
    }
}
