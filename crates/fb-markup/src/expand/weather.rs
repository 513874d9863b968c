//! `<fb-weather>`: bordered weather callout.

use crate::context::RenderContext;
use crate::mjml;
use crate::palette::ColorToken;
use crate::parser::Element;
use crate::tag::TagKind;

use super::ShorthandExpander;

/// Dashed informational box around the body text. Takes no attributes.
#[derive(Debug, Default, Clone, Copy)]
pub struct WeatherExpander;

impl ShorthandExpander for WeatherExpander {
    fn kind(&self) -> TagKind {
        TagKind::Weather
    }

    fn expand(&self, tag: &Element<'_>, cx: &mut RenderContext<'_>, out: &mut String) {
        let accent = &cx.palette().panel.get(ColorToken::Blue).accent;
        let body = super::render_body(tag, cx);

        mjml::open_block(
            out,
            mjml::SECTION_PADDING,
            &format!(" border=\"2px dashed {accent}\" border-radius=\"14px\" padding=\"14px\""),
        );
        mjml::text(
            out,
            "padding=\"0\" font-size=\"14px\" line-height=\"1.5\"",
            &body,
        );
        mjml::close_block(out);
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::expand_clean;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_weather_block() {
        let output = expand_clean("<fb-weather>Rainy, 40°F</fb-weather>");
        assert_eq!(
            output,
            "<mj-section padding=\"12px 24px\">\n  <mj-column border=\"2px dashed #1a6bff\" border-radius=\"14px\" padding=\"14px\">\n    <mj-text padding=\"0\" font-size=\"14px\" line-height=\"1.5\">Rainy, 40°F</mj-text>\n  </mj-column>\n</mj-section>\n"
        );
    }

    #[test]
    fn test_weather_self_closing_is_empty() {
        let output = expand_clean("<fb-weather/>");
        assert!(output.contains("line-height=\"1.5\"></mj-text>"));
    }
}
