//! Attribute extraction from shorthand opening tags.
//!
//! Parses the `key="value"` pairs of an opening tag such as
//! `<fb-section color="blue" label="Drama">`.
//!
//! Only double-quoted values are recognized. Attribute names are matched as
//! whole tokens, so `color` never matches inside `data-color`. When a name
//! appears more than once, the first occurrence wins.

use std::collections::HashMap;

/// Look up a single attribute in raw opening-tag text.
///
/// `tag_source` may include the leading `<name` and the trailing `>`/`/>`.
/// Returns the value of the first `name="..."` pair, or `default` when the
/// attribute is absent.
///
/// # Example
///
/// ```
/// use fb_markup::attrs::resolve;
///
/// let tag = r#"<fb-section data-color="pink" color="blue">"#;
/// assert_eq!(resolve(tag, "color", "pink"), "blue");
/// assert_eq!(resolve(tag, "label", "Section"), "Section");
/// ```
#[must_use]
pub fn resolve<'a>(tag_source: &'a str, name: &str, default: &'a str) -> &'a str {
    AttrScanner::new(tag_source)
        .find(|(key, _)| *key == name)
        .map_or(default, |(_, value)| value)
}

/// Parsed attributes of one tag occurrence.
///
/// # Example
///
/// ```
/// use fb_markup::attrs::Attributes;
///
/// let attrs = Attributes::parse(r#"<fb-quote attribution="Overheard">"#);
/// assert_eq!(attrs.get("attribution"), Some("Overheard"));
/// assert_eq!(attrs.get_or("missing", "fallback"), "fallback");
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Attributes {
    values: HashMap<String, String>,
}

impl Attributes {
    /// Parse every `key="value"` pair of an opening tag.
    #[must_use]
    pub fn parse(tag_source: &str) -> Self {
        let mut values = HashMap::new();
        for (key, value) in AttrScanner::new(tag_source) {
            values
                .entry(key.to_owned())
                .or_insert_with(|| value.to_owned());
        }
        Self { values }
    }

    /// Get an attribute value by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Get an attribute value, falling back to `default` when absent.
    #[must_use]
    pub fn get_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get(key).unwrap_or(default)
    }

    /// Number of distinct attribute names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the tag carried no attributes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Iterator over `(name, value)` pairs in source order.
struct AttrScanner<'a> {
    rest: &'a str,
}

impl<'a> AttrScanner<'a> {
    fn new(tag_source: &'a str) -> Self {
        // Skip `<name` so the tag name itself is never read as an attribute
        let rest = match tag_source.strip_prefix('<') {
            Some(after) => after
                .find(|c: char| c.is_whitespace() || c == '/' || c == '>')
                .map_or("", |i| &after[i..]),
            None => tag_source,
        };
        Self { rest }
    }
}

impl<'a> Iterator for AttrScanner<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            self.rest = self.rest.trim_start();
            if self.rest.is_empty() {
                return None;
            }

            let name_len = self
                .rest
                .find(|c: char| !is_name_char(c))
                .unwrap_or(self.rest.len());
            if name_len == 0 {
                // Skip unrecognized character (`/`, `>`, stray quotes)
                let skip = self.rest.chars().next().map_or(1, char::len_utf8);
                self.rest = &self.rest[skip..];
                continue;
            }

            let name = &self.rest[..name_len];
            let after_name = self.rest[name_len..].trim_start();
            let Some(after_eq) = after_name.strip_prefix('=') else {
                // Bare attribute without a value
                self.rest = after_name;
                continue;
            };
            let after_eq = after_eq.trim_start();
            let Some(quoted) = after_eq.strip_prefix('"') else {
                self.rest = after_eq;
                continue;
            };
            let Some(end_quote) = quoted.find('"') else {
                self.rest = "";
                return None;
            };

            self.rest = &quoted[end_quote + 1..];
            return Some((name, &quoted[..end_quote]));
        }
    }
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | ':' | '.')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_present() {
        let tag = r#"<fb-camp name="Pierson" color="orange">"#;
        assert_eq!(resolve(tag, "name", "Camp"), "Pierson");
        assert_eq!(resolve(tag, "color", "lime"), "orange");
    }

    #[test]
    fn test_resolve_absent_uses_default() {
        assert_eq!(resolve("<fb-camp>", "name", "Camp"), "Camp");
    }

    #[test]
    fn test_resolve_does_not_match_suffix_of_longer_name() {
        let tag = r#"<fb-section data-color="pink" color="blue">"#;
        assert_eq!(resolve(tag, "color", ""), "blue");

        let tag = r#"<fb-section bgcolor="pink">"#;
        assert_eq!(resolve(tag, "color", "none"), "none");
    }

    #[test]
    fn test_resolve_does_not_match_prefix_of_longer_name() {
        let tag = r#"<fb-image caption-color="pink" caption="Sunset">"#;
        assert_eq!(resolve(tag, "caption", ""), "Sunset");
    }

    #[test]
    fn test_resolve_first_duplicate_wins() {
        let tag = r#"<fb-quote attribution="first" attribution="second">"#;
        assert_eq!(resolve(tag, "attribution", ""), "first");
    }

    #[test]
    fn test_resolve_ignores_tag_name() {
        assert_eq!(resolve("<color>", "color", "x"), "x");
    }

    #[test]
    fn test_resolve_without_tag_prefix() {
        assert_eq!(resolve(r#"likes="42""#, "likes", ""), "42");
    }

    #[test]
    fn test_whitespace_around_equals() {
        let tag = r#"<fb-stat color = "blue">"#;
        assert_eq!(resolve(tag, "color", ""), "blue");
    }

    #[test]
    fn test_value_may_contain_gt_and_single_quotes() {
        let tag = r#"<fb-potd annotation="it's > everything" likes="88">"#;
        assert_eq!(resolve(tag, "annotation", ""), "it's > everything");
        assert_eq!(resolve(tag, "likes", ""), "88");
    }

    #[test]
    fn test_single_quoted_value_not_recognized() {
        let tag = "<fb-quote attribution='Overheard'>";
        assert_eq!(resolve(tag, "attribution", "none"), "none");
    }

    #[test]
    fn test_unterminated_quote() {
        let tag = r#"<fb-quote attribution="oops>"#;
        assert_eq!(resolve(tag, "attribution", "none"), "none");
    }

    #[test]
    fn test_self_closing_tag() {
        let tag = r#"<fb-image src="https://example.com/a.png" alt="A"/>"#;
        assert_eq!(resolve(tag, "src", ""), "https://example.com/a.png");
        assert_eq!(resolve(tag, "alt", "image"), "A");
    }

    #[test]
    fn test_empty_value() {
        let tag = r#"<fb-image caption="">"#;
        assert_eq!(resolve(tag, "caption", "default"), "");
    }

    #[test]
    fn test_attributes_parse() {
        let attrs = Attributes::parse(r#"<fb-section color="blue" label="Drama">"#);
        assert_eq!(attrs.len(), 2);
        assert_eq!(attrs.get("color"), Some("blue"));
        assert_eq!(attrs.get("label"), Some("Drama"));
        assert_eq!(attrs.get("title"), None);
    }

    #[test]
    fn test_attributes_first_duplicate_wins() {
        let attrs = Attributes::parse(r#"<fb-stat color="pink" color="blue">"#);
        assert_eq!(attrs.len(), 1);
        assert_eq!(attrs.get("color"), Some("pink"));
    }

    #[test]
    fn test_attributes_empty() {
        let attrs = Attributes::parse("<fb-weather>");
        assert!(attrs.is_empty());
        assert_eq!(attrs.get_or("color", "lime"), "lime");
    }

    #[test]
    fn test_bare_attribute_skipped() {
        let attrs = Attributes::parse(r#"<fb-image hidden src="a.png">"#);
        assert_eq!(attrs.get("hidden"), None);
        assert_eq!(attrs.get("src"), Some("a.png"));
    }
}
