//! Per-tag expanders.
//!
//! Each shorthand kind has one [`ShorthandExpander`] that turns a matched
//! occurrence into a fixed-shape MJML block. The default set is registered
//! in this order:
//!
//! 1. [`DividerExpander`] (`fb-zigzag`)
//! 2. [`SectionExpander`] (`fb-section`, hoists nested components)
//! 3. [`PanelExpander`] (`fb-camp`)
//! 4. [`StatsExpander`] (`fb-stats`)
//! 5. [`QuoteExpander`] (`fb-quote`)
//! 6. [`ImageExpander`] (`fb-image`)
//! 7. [`WeatherExpander`] (`fb-weather`)
//! 8. [`PostOfTheDayExpander`] (`fb-potd`)

mod divider;
mod image;
mod panel;
mod potd;
mod quote;
mod section;
mod stats;
mod weather;

pub use divider::DividerExpander;
pub use image::{ImageExpander, ensure_image_suffix};
pub use panel::PanelExpander;
pub use potd::PostOfTheDayExpander;
pub use quote::QuoteExpander;
pub use section::SectionExpander;
pub use stats::StatsExpander;
pub use weather::WeatherExpander;

use crate::context::RenderContext;
use crate::parser::Element;
use crate::tag::TagKind;

/// Expansion rule for one shorthand tag kind.
///
/// Implementations must be pure: the same element and palette always
/// produce the same markup.
///
/// # Example
///
/// ```
/// use fb_markup::{Element, Pipeline, RenderContext, ShorthandExpander, TagKind};
///
/// struct PlainWeather;
///
/// impl ShorthandExpander for PlainWeather {
///     fn kind(&self) -> TagKind { TagKind::Weather }
///
///     fn expand(&self, tag: &Element<'_>, cx: &mut RenderContext<'_>, out: &mut String) {
///         out.push_str("<mj-text>");
///         cx.render(&tag.children, out);
///         out.push_str("</mj-text>");
///     }
/// }
///
/// let pipeline = Pipeline::new().with_expander(PlainWeather);
/// assert_eq!(
///     pipeline.expand("<fb-weather>Sunny</fb-weather>"),
///     "<mj-text>Sunny</mj-text>"
/// );
/// ```
pub trait ShorthandExpander: Send + Sync {
    /// Tag kind this expander handles.
    fn kind(&self) -> TagKind;

    /// Append the expansion of `tag` to `out`.
    fn expand(&self, tag: &Element<'_>, cx: &mut RenderContext<'_>, out: &mut String);
}

/// The default expanders in registration order.
pub(crate) fn default_expanders() -> Vec<Box<dyn ShorthandExpander>> {
    vec![
        Box::new(DividerExpander),
        Box::new(SectionExpander),
        Box::new(PanelExpander),
        Box::new(StatsExpander),
        Box::new(QuoteExpander),
        Box::new(ImageExpander),
        Box::new(WeatherExpander),
        Box::new(PostOfTheDayExpander),
    ]
}

/// Render an element's children and trim surrounding whitespace.
pub(crate) fn render_body(tag: &Element<'_>, cx: &mut RenderContext<'_>) -> String {
    let body = cx.render_to_string(&tag.children);
    let trimmed = body.trim();
    if trimmed.len() == body.len() {
        body
    } else {
        trimmed.to_owned()
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::Pipeline;

    /// Expand with the default pipeline, asserting no warnings were raised.
    pub(crate) fn expand_clean(input: &str) -> String {
        let rendered = Pipeline::new().render(input);
        assert!(
            rendered.warnings.is_empty(),
            "unexpected warnings: {:?}",
            rendered.warnings
        );
        rendered.markup
    }
}
