//! Rendering context handed to expanders.

use crate::expand::ShorthandExpander;
use crate::palette::Palette;
use crate::parser::{Element, LineIndex, Node};

/// Walks the tag tree and dispatches each element to its expander.
///
/// Expanders receive the context so they can render their own children
/// (with nested tags expanded) and look up palette styles.
pub struct RenderContext<'p> {
    input: &'p str,
    palette: &'p Palette,
    expanders: &'p [Box<dyn ShorthandExpander>],
    lines: Option<LineIndex>,
    warnings: Vec<String>,
}

impl<'p> RenderContext<'p> {
    pub(crate) fn new(
        input: &'p str,
        palette: &'p Palette,
        expanders: &'p [Box<dyn ShorthandExpander>],
    ) -> Self {
        Self {
            input,
            palette,
            expanders,
            lines: None,
            warnings: Vec::new(),
        }
    }

    /// Palette tables in effect for this document.
    #[must_use]
    pub fn palette(&self) -> &'p Palette {
        self.palette
    }

    /// Render a node sequence into `out`.
    pub fn render(&mut self, nodes: &[Node<'_>], out: &mut String) {
        for node in nodes {
            self.render_node(node, out);
        }
    }

    /// Render a single node into `out`.
    pub fn render_node(&mut self, node: &Node<'_>, out: &mut String) {
        match node {
            Node::Text(text) => out.push_str(text),
            Node::Element(element) => self.render_element(element, out),
        }
    }

    /// Render an element with the expander registered for its kind.
    ///
    /// Kinds without an expander (for example `fb-title` outside a section)
    /// are written back verbatim around their rendered children.
    pub fn render_element(&mut self, element: &Element<'_>, out: &mut String) {
        let expanders = self.expanders;
        match expanders.iter().find(|e| e.kind() == element.kind) {
            Some(expander) => expander.expand(element, self, out),
            None => self.render_verbatim(element, out),
        }
    }

    /// Write an element's own tags back unchanged, rendering its children.
    pub fn render_verbatim(&mut self, element: &Element<'_>, out: &mut String) {
        out.push_str(element.open);
        self.render(&element.children, out);
        out.push_str(element.close);
    }

    /// Render nodes into a fresh string.
    pub fn render_to_string<'n, 'a: 'n, I>(&mut self, nodes: I) -> String
    where
        I: IntoIterator<Item = &'n Node<'a>>,
    {
        let mut out = String::new();
        for node in nodes {
            self.render_node(node, &mut out);
        }
        out
    }

    /// Record a non-fatal warning about `element`.
    pub fn warn(&mut self, element: &Element<'_>, message: &str) {
        let input = self.input;
        let line = self
            .lines
            .get_or_insert_with(|| LineIndex::new(input))
            .line(element.offset);
        self.warnings.push(format!("line {line}: {message}"));
    }

    pub(crate) fn into_warnings(self) -> Vec<String> {
        self.warnings
    }
}
