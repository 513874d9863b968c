//! `<fb-quote attribution>`: pull-quote.

use crate::context::RenderContext;
use crate::mjml;
use crate::palette::ColorToken;
use crate::parser::Element;
use crate::tag::TagKind;

use super::ShorthandExpander;

/// Dark block with the body wrapped in curly quotes.
///
/// A non-empty `attribution` adds a second, smaller line holding exactly
/// the attribution text; otherwise that line is left out entirely.
#[derive(Debug, Default, Clone, Copy)]
pub struct QuoteExpander;

impl ShorthandExpander for QuoteExpander {
    fn kind(&self) -> TagKind {
        TagKind::Quote
    }

    fn expand(&self, tag: &Element<'_>, cx: &mut RenderContext<'_>, out: &mut String) {
        let dark = cx.palette().pill.get(ColorToken::Dark);
        let attribution = tag.attr_or("attribution", "").trim();
        let body = super::render_body(tag, cx);

        mjml::open_block(
            out,
            mjml::SECTION_PADDING,
            &format!(
                " background-color=\"{}\" border-radius=\"14px\" padding=\"20px\"",
                dark.background
            ),
        );
        mjml::text(
            out,
            &format!(
                "padding=\"0\" color=\"{}\" font-family=\"{}\" font-size=\"18px\" font-weight=\"700\" line-height=\"1.4\"",
                dark.color,
                mjml::HEADING_FONT
            ),
            &format!("“{body}”"),
        );
        if !attribution.is_empty() {
            mjml::text(
                out,
                "padding=\"8px 0 0\" color=\"#aaaaaa\" font-size=\"12px\"",
                attribution,
            );
        }
        mjml::close_block(out);
    }
}
