//! Expansion pipeline.

use std::fmt;

use crate::context::RenderContext;
use crate::expand::{ShorthandExpander, default_expanders};
use crate::palette::Palette;
use crate::parser::parse;
use crate::tag::TAG_PREFIX;

/// Expansion output together with non-fatal diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    /// Expanded document.
    pub markup: String,
    /// Warnings about malformed or discarded input, formatted `line N: ...`.
    pub warnings: Vec<String>,
}

/// Shorthand expander set plus the palette it renders with.
///
/// The default pipeline registers one expander per tag kind. Individual
/// kinds can be replaced with [`with_expander`](Self::with_expander).
/// Expansion takes `&self`, so one pipeline can serve any number of threads.
///
/// # Example
///
/// ```
/// use fb_markup::Pipeline;
///
/// let pipeline = Pipeline::new();
/// let rendered = pipeline.render("<fb-quote>hi");
/// assert_eq!(rendered.markup, "<fb-quote>hi");
/// assert_eq!(rendered.warnings, vec!["line 1: unclosed tag <fb-quote> (missing </fb-quote>)"]);
/// ```
pub struct Pipeline {
    palette: Palette,
    expanders: Vec<Box<dyn ShorthandExpander>>,
}

impl Pipeline {
    /// Create a pipeline with the default palette and expanders.
    #[must_use]
    pub fn new() -> Self {
        Self::with_palette(Palette::default())
    }

    /// Create a pipeline with the default expanders and a custom palette.
    #[must_use]
    pub fn with_palette(palette: Palette) -> Self {
        Self {
            palette,
            expanders: default_expanders(),
        }
    }

    /// Register an expander, replacing any existing one for the same kind.
    #[must_use]
    pub fn with_expander(mut self, expander: impl ShorthandExpander + 'static) -> Self {
        let kind = expander.kind();
        let expander: Box<dyn ShorthandExpander> = Box::new(expander);
        match self.expanders.iter_mut().find(|e| e.kind() == kind) {
            Some(slot) => *slot = expander,
            None => self.expanders.push(expander),
        }
        self
    }

    /// Palette used by this pipeline.
    #[must_use]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Expand all shorthand tags in `input`.
    ///
    /// Never fails. Malformed and unknown tags are left in place.
    #[must_use]
    pub fn expand(&self, input: &str) -> String {
        self.render(input).markup
    }

    /// Expand all shorthand tags in `input` and collect warnings.
    #[must_use]
    pub fn render(&self, input: &str) -> Rendered {
        if !may_contain_tags(input) {
            return Rendered {
                markup: input.to_owned(),
                warnings: Vec::new(),
            };
        }

        let document = parse(input);
        let mut cx = RenderContext::new(input, &self.palette, &self.expanders);
        let mut markup = String::with_capacity(input.len() * 2);
        cx.render(&document.nodes, &mut markup);

        let mut warnings = document.warnings;
        warnings.extend(cx.into_warnings());

        tracing::debug!(
            input_len = input.len(),
            output_len = markup.len(),
            warnings = warnings.len(),
            "Expanded shorthand"
        );

        Rendered { markup, warnings }
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline")
            .field("palette", &self.palette)
            .field(
                "expanders",
                &self.expanders.iter().map(|e| e.kind()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

fn may_contain_tags(input: &str) -> bool {
    input.match_indices('<').any(|(i, _)| {
        let rest = &input[i + 1..];
        rest.strip_prefix('/').unwrap_or(rest).starts_with(TAG_PREFIX)
    })
}
