//! `<fb-stats>` with `<fb-stat color>` children: statistic strip.

use crate::context::RenderContext;
use crate::mjml;
use crate::parser::{Element, Node};
use crate::tag::TagKind;

use super::ShorthandExpander;

/// Separator placed between badges.
const BADGE_SEPARATOR: &str = "&nbsp;";

/// A centered row of pill badges, one per `<fb-stat>`.
///
/// Each stat resolves its `color` through the pill table on its own. An
/// empty strip still yields the enclosing block. Anything other than
/// `<fb-stat>` inside the strip is dropped with a warning.
#[derive(Debug, Default, Clone, Copy)]
pub struct StatsExpander;

impl ShorthandExpander for StatsExpander {
    fn kind(&self) -> TagKind {
        TagKind::Stats
    }

    fn expand(&self, tag: &Element<'_>, cx: &mut RenderContext<'_>, out: &mut String) {
        let pills = &cx.palette().pill;
        let mut badges = Vec::new();

        for node in &tag.children {
            match node {
                Node::Element(stat) if stat.kind == TagKind::Stat => {
                    let style = pills.lookup(stat.attr_or("color", ""));
                    let text = super::render_body(stat, cx);
                    let mut badge = String::new();
                    mjml::pill_span(
                        &mut badge,
                        &style.css(),
                        "padding:6px 12px;font-size:12px;font-weight:700;",
                        &text,
                    );
                    badges.push(badge);
                }
                node if node.is_blank() => {}
                Node::Element(other) => {
                    cx.warn(other, &format!("<{}> inside <fb-stats> was dropped", other.kind));
                }
                Node::Text(_) => {
                    cx.warn(tag, "text inside <fb-stats> outside <fb-stat> was dropped");
                }
            }
        }

        mjml::open_block(out, mjml::SECTION_PADDING, "");
        mjml::text(
            out,
            "padding=\"0\" align=\"center\" line-height=\"2\"",
            &badges.join(BADGE_SEPARATOR),
        );
        mjml::close_block(out);
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::expand_clean;
    use crate::Pipeline;

    #[test]
    fn test_stats_badges() {
        let output = expand_clean(
            r#"<fb-stats>
  <fb-stat color="blue">3 parties</fb-stat>
  <fb-stat color="lime">1 fire alarm</fb-stat>
</fb-stats>"#,
        );
        assert_eq!(output.matches("<span").count(), 2);
        assert!(output.contains("background:#1a6bff;color:#ffffff;"));
        assert!(output.contains("background:#c8f135;color:#0e0e14;"));
        assert!(output.contains("3 parties</span>&nbsp;<span"));
        assert!(output.contains(">1 fire alarm</span>"));
    }

    #[test]
    fn test_empty_stats() {
        let output = expand_clean("<fb-stats></fb-stats>");
        assert_eq!(output.matches("<mj-section").count(), 1);
        assert!(!output.contains("<span"));
        assert!(output.contains("line-height=\"2\"></mj-text>"));
    }

    #[test]
    fn test_stat_unknown_color_uses_pill_fallback() {
        let output = expand_clean(r#"<fb-stats><fb-stat color="gold">x</fb-stat></fb-stats>"#);
        assert!(output.contains("background:#ff3d9a;color:#ffffff;"));
    }

    #[test]
    fn test_stray_content_dropped_with_warning() {
        let rendered = Pipeline::new()
            .render(r#"<fb-stats>junk<fb-stat>ok</fb-stat><fb-quote>q</fb-quote></fb-stats>"#);
        assert!(!rendered.markup.contains("junk"));
        assert!(!rendered.markup.contains("“q”"));
        assert!(rendered.markup.contains(">ok</span>"));
        assert_eq!(rendered.warnings.len(), 2);
        assert!(rendered.warnings[1].contains("<fb-quote> inside <fb-stats> was dropped"));
    }

    #[test]
    fn test_stat_outside_stats_is_verbatim() {
        let output = expand_clean(r#"<fb-stat color="blue">lonely</fb-stat>"#);
        assert_eq!(output, r#"<fb-stat color="blue">lonely</fb-stat>"#);
    }
}
