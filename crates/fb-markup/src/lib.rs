//! Shorthand tag expansion for the FizzBuzz newsletter.
//!
//! Content arrives with compact `fb-*` tags standing in for reusable visual
//! components (dividers, titled sections, panels, stat strips, quotes,
//! images, weather and post-of-the-day callouts). This crate rewrites each
//! tag into a fixed-shape MJML block and leaves everything else untouched.
//!
//! # Architecture
//!
//! - [`parse`] tokenizes the document once into a tree of tag occurrences.
//!   Literal text is borrowed from the input, so untouched regions are
//!   reproduced byte for byte.
//! - [`Pipeline`] walks the tree and hands each element to the
//!   [`ShorthandExpander`] registered for its kind.
//! - [`Palette`] holds the color tables expanders style with; it is injected
//!   into the pipeline rather than read from globals.
//!
//! Expansion is total. Unknown and malformed tags pass through verbatim;
//! [`Pipeline::render`] additionally reports them as warnings.
//!
//! # Example
//!
//! ```
//! let output = fb_markup::expand(r#"<fb-quote attribution="Overheard">it's giving midterms</fb-quote>"#);
//! assert!(output.contains("“it's giving midterms”"));
//! assert!(!output.contains("fb-quote"));
//! ```

pub mod attrs;
mod context;
pub mod expand;
mod hoist;
mod mjml;
pub mod palette;
mod parser;
mod pipeline;
mod tag;

pub use context::RenderContext;
pub use expand::ShorthandExpander;
pub use palette::Palette;
pub use parser::{Document, Element, MAX_DEPTH, Node, parse};
pub use pipeline::{Pipeline, Rendered};
pub use tag::{TAG_PREFIX, TagKind};

/// Expand shorthand tags with the default pipeline.
#[must_use]
pub fn expand(document: &str) -> String {
    Pipeline::new().expand(document)
}
