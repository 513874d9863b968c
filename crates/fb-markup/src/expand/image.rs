//! `<fb-image src alt caption color>`: captioned image.

use std::borrow::Cow;
use std::fmt::Write;

use crate::context::RenderContext;
use crate::mjml;
use crate::parser::Element;
use crate::tag::TagKind;

use super::ShorthandExpander;

/// Alt text used when the `alt` attribute is absent.
pub const DEFAULT_ALT: &str = "image";

/// File suffixes mail clients recognize as images.
const IMAGE_SUFFIXES: [&str; 6] = [".jpg", ".jpeg", ".png", ".gif", ".webp", ".svg"];

/// Fragment appended to URLs without a recognized suffix.
const SYNTHETIC_FRAGMENT: &str = "#image.jpg";

/// Image block with an optional caption badge underneath.
///
/// Accepts `<fb-image .../>`, a bare `<fb-image ...>` and
/// `<fb-image ...></fb-image>`. The caption badge is only emitted for a
/// non-empty `caption`; its colors come from the caption table.
#[derive(Debug, Default, Clone, Copy)]
pub struct ImageExpander;

impl ShorthandExpander for ImageExpander {
    fn kind(&self) -> TagKind {
        TagKind::Image
    }

    fn expand(&self, tag: &Element<'_>, cx: &mut RenderContext<'_>, out: &mut String) {
        let src = ensure_image_suffix(tag.attr_or("src", "").trim());
        let alt = tag.attr_or("alt", DEFAULT_ALT);
        let caption = tag.attr_or("caption", "").trim();
        let style = cx.palette().caption.lookup(tag.attr_or("color", ""));

        mjml::open_block(out, mjml::SECTION_PADDING, "");
        writeln!(
            out,
            "    <mj-image padding=\"0\" src=\"{}\" alt=\"{}\" border-radius=\"14px\" />",
            mjml::escape_attr(&src),
            mjml::escape_attr(alt)
        )
        .unwrap();
        if !caption.is_empty() {
            let mut badge = String::new();
            mjml::pill_span(
                &mut badge,
                &style.css(),
                "padding:4px 10px;font-size:12px;",
                caption,
            );
            mjml::text(out, "padding=\"8px 0 0\" align=\"center\"", &badge);
        }
        mjml::close_block(out);
    }
}

/// Make sure an image URL carries a file-type hint.
///
/// Some mail clients refuse to render images whose URL does not look like an
/// image file. When neither the path (before `?` or `#`) nor the whole URL
/// ends in a known image suffix, a fragment ending in `.jpg` is appended.
/// Fragments are never sent to the server, so the fetched resource does not
/// change.
///
/// # Example
///
/// ```
/// use fb_markup::expand::ensure_image_suffix;
///
/// assert_eq!(
///     ensure_image_suffix("https://example.com/photo"),
///     "https://example.com/photo#image.jpg"
/// );
/// assert_eq!(
///     ensure_image_suffix("https://example.com/a.PNG?w=300"),
///     "https://example.com/a.PNG?w=300"
/// );
/// ```
#[must_use]
pub fn ensure_image_suffix(url: &str) -> Cow<'_, str> {
    if url.is_empty() || has_image_suffix(url) {
        return Cow::Borrowed(url);
    }
    if url.contains('#') {
        // Extend the existing fragment instead of starting a second one
        Cow::Owned(format!("{url}.jpg"))
    } else {
        Cow::Owned(format!("{url}{SYNTHETIC_FRAGMENT}"))
    }
}

fn has_image_suffix(url: &str) -> bool {
    let path_end = url.find(['?', '#']).unwrap_or(url.len());
    let ends_with_suffix = |s: &str| {
        let lower = s.to_ascii_lowercase();
        IMAGE_SUFFIXES.iter().any(|suffix| lower.ends_with(suffix))
    };
    ends_with_suffix(&url[..path_end]) || ends_with_suffix(url)
}
