//! `<fb-camp name color>`: highlighted panel.

use crate::context::RenderContext;
use crate::mjml;
use crate::parser::Element;
use crate::tag::TagKind;

use super::ShorthandExpander;

/// Label used when the `name` attribute is absent.
pub const DEFAULT_PANEL_NAME: &str = "Camp";

/// Bordered, tinted block with a small uppercase label above the body.
///
/// `color` resolves through the panel table; unknown tokens get the
/// lime entry.
#[derive(Debug, Default, Clone, Copy)]
pub struct PanelExpander;

impl ShorthandExpander for PanelExpander {
    fn kind(&self) -> TagKind {
        TagKind::Panel
    }

    fn expand(&self, tag: &Element<'_>, cx: &mut RenderContext<'_>, out: &mut String) {
        let style = cx.palette().panel.lookup(tag.attr_or("color", ""));
        let name = tag.attr_or("name", DEFAULT_PANEL_NAME);
        let body = super::render_body(tag, cx);

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
            name,
        );
        mjml::text(
            out,
            "padding=\"0\" font-size=\"15px\" line-height=\"1.6\"",
            &body,
        );
        mjml::close_block(out);
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::expand_clean;
    use crate::Pipeline;
    use crate::palette::{ColorToken, Palette, PanelStyle};

    #[test]
    fn test_panel_shape() {
        let output = expand_clean(
            r#"<fb-camp name="Cross Campus" color="orange">Frisbee at <b>4pm</b></fb-camp>"#,
        );
        assert!(output.contains("background-color=\"#fff4e6\" border=\"2px solid #ff8a00\""));
        assert!(output.contains(">Cross Campus</mj-text>"));
        assert!(output.contains(">Frisbee at <b>4pm</b></mj-text>"));
        assert!(output.contains("text-transform=\"uppercase\""));
    }

    #[test]
    fn test_panel_defaults() {
        let output = expand_clean("<fb-camp>Line up early</fb-camp>");
        assert!(output.contains(">Camp</mj-text>"));
        assert!(output.contains("border=\"2px solid #c8f135\""));
    }

    #[test]
    fn test_panel_unknown_color_uses_lime_entry() {
        let unknown = expand_clean(r#"<fb-camp color="ultraviolet">x</fb-camp>"#);
        let lime = expand_clean(r#"<fb-camp color="lime">x</fb-camp>"#);
        let green = expand_clean(r#"<fb-camp color="green">x</fb-camp>"#);
        assert_eq!(unknown, lime);
        assert_eq!(green, lime);
        assert!(unknown.contains("background-color=\"#f6fde0\""));
    }

    #[test]
    fn test_panel_uses_injected_palette() {
        let mut palette = Palette::default();
        palette.panel.insert(
            ColorToken::Blue,
            PanelStyle::new("#000010", "1px solid #000080", "#0000ff"),
        );
        let output = Pipeline::with_palette(palette).expand(r#"<fb-camp color="blue">x</fb-camp>"#);
        assert!(output.contains("background-color=\"#000010\" border=\"1px solid #000080\""));
        assert!(output.contains("color=\"#0000ff\""));
    }

    #[test]
    fn test_panel_body_trimmed() {
        let output = expand_clean("<fb-camp>\n  spaced  \n</fb-camp>");
        assert!(output.contains(">spaced</mj-text>"));
    }
}
