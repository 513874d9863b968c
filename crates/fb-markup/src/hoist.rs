//! Relocation of component tags nested in a section body.
//!
//! A section's prose ends up inside a single `<mj-text>`, which cannot hold
//! structural children. Component tags found directly in the body are
//! pulled out and rendered as sibling blocks right after the section.

use crate::parser::{Element, Node};
use crate::tag::TagKind;

/// A section body split into its parts.
#[derive(Debug, Default)]
pub(crate) struct SectionBody<'n, 'a> {
    /// First `fb-title` child, if any.
    pub(crate) title: Option<&'n Element<'a>>,
    /// Everything that stays in the prose block, in order.
    pub(crate) prose: Vec<&'n Node<'a>>,
    /// Component tags to emit after the section, in encounter order.
    pub(crate) hoisted: Vec<&'n Element<'a>>,
}

/// Split a section's children into title, prose and hoisted components.
///
/// Only the first title is extracted; later ones stay in the prose.
pub(crate) fn split_section_body<'n, 'a>(children: &'n [Node<'a>]) -> SectionBody<'n, 'a> {
    let mut body = SectionBody::default();

    for node in children {
        match node {
            Node::Element(el) if el.kind == TagKind::Title && body.title.is_none() => {
                body.title = Some(el);
            }
            Node::Element(el) if el.kind.is_hoistable() => body.hoisted.push(el),
            _ => body.prose.push(node),
        }
    }

    body
}
