//! Shorthand tag parsing.
//!
//! Tokenizes a document in a single pass and builds a tree of tag
//! occurrences that respects nesting. Everything that is not a recognized
//! shorthand tag stays as borrowed text, so untouched input is reproduced
//! byte for byte when the tree is rendered.
//!
//! Malformed input is never an error:
//!
//! - an opening tag without its closing tag is kept as literal text, while
//!   its content is still parsed (nested well-formed tags survive);
//! - a closing tag without an opening tag is kept as literal text;
//! - void tags (`fb-zigzag`, `fb-image`) only ever consume their own closing
//!   tag, and only when it follows immediately (whitespace aside).
//!
//! Each of these cases records a warning with the line number.
//!
//! Paired tags nest at most [`MAX_DEPTH`] levels deep; deeper opening tags
//! and their matching closing tags are kept as literal text.

use crate::attrs::Attributes;
use crate::tag::{TAG_PREFIX, TagKind};

/// Deepest nesting of paired tags built into the tree.
pub const MAX_DEPTH: usize = 128;

/// A parsed document: top-level nodes plus non-fatal warnings.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Document<'a> {
    pub nodes: Vec<Node<'a>>,
    pub warnings: Vec<String>,
}

/// A node of the tag tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node<'a> {
    /// Literal text (including any markup that is not a shorthand tag).
    Text(&'a str),
    /// A well-formed shorthand tag occurrence.
    Element(Element<'a>),
}

impl Node<'_> {
    /// Check if this node is text made only of whitespace.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        matches!(self, Node::Text(text) if text.trim().is_empty())
    }
}

/// A matched tag occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element<'a> {
    pub kind: TagKind,
    /// Byte offset of the opening tag in the source document.
    pub offset: usize,
    /// Opening tag source, e.g. `<fb-quote attribution="x">`.
    pub open: &'a str,
    pub attrs: Attributes,
    pub children: Vec<Node<'a>>,
    /// Closing tag source; empty for self-closing and bare void tags.
    pub close: &'a str,
    /// Written as `<fb-name .../>`.
    pub self_closing: bool,
}

impl Element<'_> {
    /// Get an attribute value by name.
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name)
    }

    /// Get an attribute value, falling back to `default` when absent.
    #[must_use]
    pub fn attr_or<'s>(&'s self, name: &str, default: &'s str) -> &'s str {
        self.attrs.get_or(name, default)
    }
}

/// Parse a shorthand document into a tag tree.
///
/// # Example
///
/// ```
/// use fb_markup::{Node, TagKind, parse};
///
/// let doc = parse(r#"Hi <fb-quote attribution="Me">yo</fb-quote>"#);
/// assert_eq!(doc.nodes.len(), 2);
/// assert!(matches!(&doc.nodes[1], Node::Element(el) if el.kind == TagKind::Quote));
/// assert!(doc.warnings.is_empty());
/// ```
#[must_use]
pub fn parse(input: &str) -> Document<'_> {
    let mut builder = TreeBuilder::new(input);
    let mut pos = 0;
    let mut text_start = 0;

    while let Some(rel) = input[pos..].find('<') {
        let at = pos + rel;
        if let Some((token, end)) = scan_tag(input, at) {
            builder.text(&input[text_start..at]);
            let end = builder.token(token, at, end);
            pos = end;
            text_start = end;
        } else {
            pos = at + 1;
        }
    }

    builder.text(&input[text_start..]);
    builder.finish()
}

/// Byte offsets of every newline, for line lookups by binary search.
#[derive(Debug, Clone)]
pub(crate) struct LineIndex {
    newlines: Vec<usize>,
}

impl LineIndex {
    pub(crate) fn new(input: &str) -> Self {
        Self {
            newlines: input.match_indices('\n').map(|(i, _)| i).collect(),
        }
    }

    /// 1-indexed line number of a byte offset.
    pub(crate) fn line(&self, offset: usize) -> usize {
        self.newlines.partition_point(|&nl| nl < offset) + 1
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token<'a> {
    Open {
        kind: TagKind,
        src: &'a str,
        self_closing: bool,
    },
    Close {
        kind: TagKind,
        src: &'a str,
    },
}

/// Try to read a shorthand tag starting at `at`.
///
/// Returns the token and the byte offset just past it.
fn scan_tag(input: &str, at: usize) -> Option<(Token<'_>, usize)> {
    let rest = input[at..].strip_prefix('<')?;

    if let Some(after_slash) = rest.strip_prefix('/') {
        let name_len = tag_name_len(after_slash);
        let kind = TagKind::from_name(&after_slash[..name_len])?;
        let tail = &after_slash[name_len..];
        let ws = tail.len() - tail.trim_start().len();
        if !tail[ws..].starts_with('>') {
            return None;
        }
        let end = at + 2 + name_len + ws + 1;
        return Some((
            Token::Close {
                kind,
                src: &input[at..end],
            },
            end,
        ));
    }

    let name_len = tag_name_len(rest);
    let kind = TagKind::from_name(&rest[..name_len])?;
    let tail = &rest[name_len..];
    match tail.chars().next() {
        Some(c) if c.is_whitespace() || c == '/' || c == '>' => {}
        _ => return None,
    }

    let gt = find_tag_end(tail)?;
    let end = at + 1 + name_len + gt + 1;
    let src = &input[at..end];
    let self_closing = src[..src.len() - 1].trim_end().ends_with('/');

    Some((
        Token::Open {
            kind,
            src,
            self_closing,
        },
        end,
    ))
}

fn tag_name_len(s: &str) -> usize {
    if !s.starts_with(TAG_PREFIX) {
        return 0;
    }
    s.find(|c: char| !(c.is_ascii_alphanumeric() || c == '-'))
        .unwrap_or(s.len())
}

/// Find the `>` that ends an opening tag, skipping double-quoted values.
///
/// A quote only opens a value right after `=` (whitespace aside); any other
/// quote is an ordinary character.
fn find_tag_end(s: &str) -> Option<usize> {
    let mut in_value = false;
    let mut after_eq = false;
    for (i, c) in s.char_indices() {
        if in_value {
            in_value = c != '"';
            continue;
        }
        match c {
            '>' => return Some(i),
            '=' => after_eq = true,
            '"' if after_eq => {
                in_value = true;
                after_eq = false;
            }
            c if c.is_whitespace() => {}
            _ => after_eq = false,
        }
    }
    None
}

/// An opening tag still waiting for its closing tag.
struct Frame<'a> {
    kind: TagKind,
    offset: usize,
    open: &'a str,
    children: Vec<Node<'a>>,
}

struct TreeBuilder<'a> {
    input: &'a str,
    lines: LineIndex,
    nodes: Vec<Node<'a>>,
    stack: Vec<Frame<'a>>,
    /// Kinds of opening tags kept as text past [`MAX_DEPTH`], innermost last.
    overflow: Vec<TagKind>,
    warnings: Vec<String>,
}

impl<'a> TreeBuilder<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            lines: LineIndex::new(input),
            nodes: Vec::new(),
            stack: Vec::new(),
            overflow: Vec::new(),
            warnings: Vec::new(),
        }
    }

    fn push(&mut self, node: Node<'a>) {
        match self.stack.last_mut() {
            Some(frame) => frame.children.push(node),
            None => self.nodes.push(node),
        }
    }

    fn text(&mut self, text: &'a str) {
        if !text.is_empty() {
            self.push(Node::Text(text));
        }
    }

    fn warn(&mut self, offset: usize, message: &str) {
        let line = self.lines.line(offset);
        self.warnings.push(format!("line {line}: {message}"));
    }

    /// Handle one token; returns the offset where scanning resumes.
    fn token(&mut self, token: Token<'a>, at: usize, end: usize) -> usize {
        match token {
            Token::Open {
                kind,
                src,
                self_closing,
            } => {
                if self_closing {
                    self.push(Node::Element(leaf(kind, at, src, "", true)));
                    end
                } else if kind.is_void() {
                    let (close, end) = self.own_close(kind, end);
                    self.push(Node::Element(leaf(kind, at, src, close, false)));
                    end
                } else if self.stack.len() >= MAX_DEPTH {
                    self.warn(
                        at,
                        &format!("<{kind}> nested deeper than {MAX_DEPTH} levels was kept as text"),
                    );
                    self.overflow.push(kind);
                    self.push(Node::Text(src));
                    end
                } else {
                    self.stack.push(Frame {
                        kind,
                        offset: at,
                        open: src,
                        children: Vec::new(),
                    });
                    end
                }
            }
            Token::Close { kind, src } => {
                self.close(kind, src, at);
                end
            }
        }
    }

    /// Consume `</kind>` if it directly follows a bare void opening tag.
    fn own_close(&self, kind: TagKind, end: usize) -> (&'a str, usize) {
        let rest = &self.input[end..];
        let ws = rest.len() - rest.trim_start().len();
        match scan_tag(self.input, end + ws) {
            Some((Token::Close { kind: found, .. }, close_end)) if found == kind => {
                (&self.input[end..close_end], close_end)
            }
            _ => ("", end),
        }
    }

    fn close(&mut self, kind: TagKind, src: &'a str, at: usize) {
        if self.overflow.last() == Some(&kind) {
            self.overflow.pop();
            self.push(Node::Text(src));
            return;
        }

        let Some(idx) = self.stack.iter().rposition(|frame| frame.kind == kind) else {
            self.warn(at, &format!("stray closing tag </{kind}> has no opening tag"));
            self.push(Node::Text(src));
            return;
        };

        self.overflow.clear();
        let unclosed = self.stack.split_off(idx + 1);
        self.flatten(unclosed);

        if let Some(frame) = self.stack.pop() {
            let element = Element {
                kind,
                offset: frame.offset,
                open: frame.open,
                attrs: Attributes::parse(frame.open),
                children: frame.children,
                close: src,
                self_closing: false,
            };
            self.push(Node::Element(element));
        }
    }

    /// Flatten unclosed tags, outermost first, into literal text plus their
    /// content, appended to the current top of the stack.
    fn flatten(&mut self, frames: Vec<Frame<'a>>) {
        for frame in frames {
            self.warn(
                frame.offset,
                &format!("unclosed tag <{}> (missing </{}>)", frame.kind, frame.kind),
            );
            self.push(Node::Text(frame.open));
            match self.stack.last_mut() {
                Some(parent) => parent.children.extend(frame.children),
                None => self.nodes.extend(frame.children),
            }
        }
    }

    fn finish(mut self) -> Document<'a> {
        let unclosed = std::mem::take(&mut self.stack);
        self.flatten(unclosed);
        Document {
            nodes: self.nodes,
            warnings: self.warnings,
        }
    }
}

fn leaf<'a>(
    kind: TagKind,
    offset: usize,
    open: &'a str,
    close: &'a str,
    self_closing: bool,
) -> Element<'a> {
    Element {
        kind,
        offset,
        open,
        attrs: Attributes::parse(open),
        children: Vec::new(),
        close,
        self_closing,
    }
}
