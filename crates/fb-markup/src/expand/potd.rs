//! `<fb-potd likes annotation>`: featured reader post.

use crate::context::RenderContext;
use crate::mjml;
use crate::palette::ColorToken;
use crate::parser::Element;
use crate::tag::TagKind;

use super::ShorthandExpander;

pub const POTD_LABEL: &str = "Post of the Day";

/// Quoted post in a yellow panel with a likes line underneath.
///
/// The footer reads `"{likes} — {annotation}"`, or just the annotation when
/// `likes` is empty, and is left out entirely when both are empty.
#[derive(Debug, Default, Clone, Copy)]
pub struct PostOfTheDayExpander;

impl ShorthandExpander for PostOfTheDayExpander {
    fn kind(&self) -> TagKind {
        TagKind::PostOfTheDay
    }

    fn expand(&self, tag: &Element<'_>, cx: &mut RenderContext<'_>, out: &mut String) {
        let style = cx.palette().panel.get(ColorToken::Yellow);
        let body = super::render_body(tag, cx);
        let footer = footer_line(
            tag.attr_or("likes", "").trim(),
            tag.attr_or("annotation", "").trim(),
        );

        mjml::open_block(
            out,
            mjml::SECTION_PADDING,
            &format!(
                " background-color=\"{}\" border=\"{}\" border-radius=\"14px\" padding=\"16px\"",
                style.background, style.border
            ),
        );
        mjml::text(
            out,
            &format!(
                "padding=\"0 0 6px\" color=\"{}\" font-size=\"11px\" font-weight=\"700\" letter-spacing=\"1.5px\" text-transform=\"uppercase\"",
                style.accent
            ),
            POTD_LABEL,
        );
        mjml::text(
            out,
            "padding=\"0\" font-size=\"16px\" font-style=\"italic\" line-height=\"1.5\"",
            &format!("“{body}”"),
        );
        if !footer.is_empty() {
            mjml::text(
                out,
                "padding=\"8px 0 0\" color=\"#555555\" font-size=\"12px\"",
                &footer,
            );
        }
        mjml::close_block(out);
    }
}

fn footer_line(likes: &str, annotation: &str) -> String {
    match (likes.is_empty(), annotation.is_empty()) {
        (true, _) => annotation.to_owned(),
        (false, true) => likes.to_owned(),
        (false, false) => format!("{likes} — {annotation}"),
    }
}
