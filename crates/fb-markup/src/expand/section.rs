//! `<fb-section color label>`: titled section with badge, title and prose.

use crate::context::RenderContext;
use crate::hoist::split_section_body;
use crate::mjml;
use crate::parser::Element;
use crate::tag::TagKind;

use super::ShorthandExpander;

/// Label used when the `label` attribute is absent.
pub const DEFAULT_SECTION_LABEL: &str = "Section";

/// Expands a section into badge, title and prose blocks.
///
/// The first `<fb-title>` child becomes the title (empty when missing).
/// Component tags found directly in the body are removed from the prose
/// and rendered as sibling blocks right after the section, in the order
/// they appeared.
#[derive(Debug, Default, Clone, Copy)]
pub struct SectionExpander;

impl ShorthandExpander for SectionExpander {
    fn kind(&self) -> TagKind {
        TagKind::Section
    }

    fn expand(&self, tag: &Element<'_>, cx: &mut RenderContext<'_>, out: &mut String) {
        let pill = cx.palette().pill.lookup(tag.attr_or("color", ""));
        let label = tag.attr_or("label", DEFAULT_SECTION_LABEL);

        let body = split_section_body(&tag.children);
        let title = match body.title {
            Some(title) => super::render_body(title, cx),
            None => String::new(),
        };
        let prose = cx.render_to_string(body.prose);

        let mut badge = String::new();
        mjml::pill_span(
            &mut badge,
            &pill.css(),
            &format!(
                "padding:4px 12px;font-family:{};font-size:11px;font-weight:700;letter-spacing:1px;text-transform:uppercase;",
                mjml::HEADING_FONT
            ),
            label,
        );

        mjml::open_block(out, "24px 24px 8px", "");
        mjml::text(out, "padding=\"0 0 10px\"", &badge);
        mjml::text(
            out,
            &format!(
                "padding=\"0 0 8px\" font-family=\"{}\" font-size=\"22px\" font-weight=\"900\" line-height=\"1.25\"",
                mjml::HEADING_FONT
            ),
            &title,
        );
        mjml::text(
            out,
            "padding=\"0\" font-size=\"15px\" line-height=\"1.6\"",
            prose.trim(),
        );
        mjml::close_block(out);

        for component in body.hoisted {
            cx.render_element(component, out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::expand_clean;
    use crate::Pipeline;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_section_full_shape() {
        let output = expand_clean(
            r#"<fb-section color="blue" label="Drama"><fb-title>Campus Feud</fb-title>Some text <fb-weather>Rainy, 40°F</fb-weather> more text</fb-section>"#,
        );

        let badge = output.find(">Drama</span>").expect("badge");
        let title = output.find(">Campus Feud</mj-text>").expect("title");
        let prose = output.find(">Some text  more text</mj-text>").expect("prose");
        let section_end = output.find("</mj-section>").expect("section end");
        let weather = output.find("Rainy, 40°F").expect("weather");

        assert!(badge < title && title < prose && prose < section_end);
        assert!(section_end < weather, "weather must follow the section");
        assert!(output.contains("background:#1a6bff;color:#ffffff;"));
        assert!(output.contains("border=\"2px dashed"));
        assert!(!output.contains("fb-"));
    }

    #[test]
    fn test_section_defaults() {
        let output = expand_clean("<fb-section>Body only</fb-section>");
        assert!(output.contains(">Section</span>"));
        // pink pill is the fallback
        assert!(output.contains("background:#ff3d9a;color:#ffffff;"));
        assert!(output.contains("line-height=\"1.25\"></mj-text>"));
        assert!(output.contains(">Body only</mj-text>"));
    }

    #[test]
    fn test_section_unknown_color_falls_back() {
        assert_eq!(
            expand_clean(r#"<fb-section color="teal">x</fb-section>"#),
            expand_clean(r#"<fb-section color="pink">x</fb-section>"#)
        );
    }

    #[test]
    fn test_quote_hoisted_after_prose() {
        let output = expand_clean(
            r#"<fb-section label="Tea"><fb-title>T</fb-title>Before <fb-quote attribution="Overheard">wow</fb-quote> after</fb-section>"#,
        );
        let prose = output.find(">Before  after</mj-text>").expect("prose");
        let quote = output.find("“wow”").expect("quote");
        assert!(prose < quote);
        assert_eq!(output.matches("<mj-section").count(), 2);
    }

    #[test]
    fn test_hoisted_components_keep_order() {
        let output = expand_clean(
            r#"<fb-section><fb-potd>post</fb-potd>x<fb-camp name="Yard">camp</fb-camp><fb-image src="a.png"/></fb-section>"#,
        );
        let potd = output.find("“post”").expect("potd");
        let camp = output.find(">camp</mj-text>").expect("camp");
        let image = output.find("<mj-image").expect("image");
        assert!(potd < camp && camp < image);
        assert_eq!(output.matches("<mj-section").count(), 4);
    }

    #[test]
    fn test_divider_in_section_stays_inline() {
        let output = expand_clean("<fb-section>a<fb-zigzag/>b</fb-section>");
        assert_eq!(output.matches("<mj-section").count(), 2);
        assert!(!output.contains("fb-zigzag"));
    }

    #[test]
    fn test_inline_markup_kept_in_prose() {
        let output = expand_clean("<fb-section><b>bold</b> and <i>italic</i></fb-section>");
        assert!(output.contains("><b>bold</b> and <i>italic</i></mj-text>"));
    }

    #[test]
    fn test_title_outside_section_is_verbatim() {
        let rendered = Pipeline::new().render("<fb-title>Loose</fb-title>");
        assert_eq!(rendered.markup, "<fb-title>Loose</fb-title>");
        assert!(rendered.warnings.is_empty());
    }
}
