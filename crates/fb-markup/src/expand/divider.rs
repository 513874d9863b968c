//! `<fb-zigzag/>`: decorative divider.

use std::fmt::Write;

use crate::context::RenderContext;
use crate::mjml;
use crate::palette::ColorToken;
use crate::parser::Element;
use crate::tag::TagKind;

use super::ShorthandExpander;

/// Stripe colors, taken from the pill table in this order.
const STRIPE: [ColorToken; 4] = [
    ColorToken::Lime,
    ColorToken::Pink,
    ColorToken::Blue,
    ColorToken::Yellow,
];

/// Width of one stripe band in pixels.
const BAND_PX: usize = 10;

/// Emits a thin repeating multi-color stripe. Takes no attributes.
#[derive(Debug, Default, Clone, Copy)]
pub struct DividerExpander;

impl ShorthandExpander for DividerExpander {
    fn kind(&self) -> TagKind {
        TagKind::Divider
    }

    fn expand(&self, _tag: &Element<'_>, cx: &mut RenderContext<'_>, out: &mut String) {
        let pills = &cx.palette().pill;

        let mut gradient = String::from("repeating-linear-gradient(135deg");
        for (i, token) in STRIPE.into_iter().enumerate() {
            let color = &pills.get(token).background;
            write!(gradient, ",{color} {}px {}px", i * BAND_PX, (i + 1) * BAND_PX).unwrap();
        }
        gradient.push(')');

        mjml::open_block(out, "8px 24px", "");
        mjml::text(
            out,
            "padding=\"0\"",
            &format!(
                "<div style=\"height:6px;line-height:6px;font-size:0;border-radius:3px;background:{gradient};\">&nbsp;</div>"
            ),
        );
        mjml::close_block(out);
    }
}
