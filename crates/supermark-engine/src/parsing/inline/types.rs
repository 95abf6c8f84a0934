use std::{
    fmt,
    hash::{Hash, Hasher},
};

use crate::parsing::rope::span::Span;

/// Identity behind a [`NodeKind`]. Declare exactly one `static` per
/// construct and derive its kind with [`NodeKind::of`].
#[derive(Debug)]
pub struct KindTag {
    name: &'static str,
}

impl KindTag {
    pub const fn new(name: &'static str) -> Self {
        Self { name }
    }
}

static TEXT_TAG: KindTag = KindTag::new("Text");
static CODE_SPAN_TAG: KindTag = KindTag::new("CodeSpan");
static WIKI_LINK_TAG: KindTag = KindTag::new("WikiLink");

/// Tag distinguishing one inline node variant from every other.
///
/// Kinds compare by the address of their [`KindTag`], so two constructs
/// that happen to share a display name stay distinct. The render registry
/// is keyed by this tag.
#[derive(Clone, Copy)]
pub struct NodeKind(&'static KindTag);

impl NodeKind {
    pub const TEXT: NodeKind = NodeKind::of(&TEXT_TAG);
    pub const CODE_SPAN: NodeKind = NodeKind::of(&CODE_SPAN_TAG);
    pub const WIKI_LINK: NodeKind = NodeKind::of(&WIKI_LINK_TAG);

    pub const fn of(tag: &'static KindTag) -> Self {
        Self(tag)
    }

    pub fn name(self) -> &'static str {
        self.0.name
    }
}

impl PartialEq for NodeKind {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.0, other.0)
    }
}

impl Eq for NodeKind {}

impl Hash for NodeKind {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::ptr::hash(self.0, state);
    }
}

impl fmt::Debug for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeKind({})", self.0.name)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.name)
    }
}

/// Ordered `name="value"` pairs attached to a node by later passes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes(Vec<(String, String)>);

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `name`, replacing an existing value in place.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.0.iter_mut().find(|(n, _)| *n == name) {
            Some((_, v)) => *v = value,
            None => self.0.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut attrs = Attributes::new();
        for (n, v) in iter {
            attrs.set(n, v);
        }
        attrs
    }
}

/// An inline span delimited by a start/end marker pair, tagged with the
/// kind of the construct that produced it (e.g. superscript).
#[derive(Debug, Clone, PartialEq)]
pub struct DelimitedNode {
    pub kind: NodeKind,
    /// Full span including both delimiters.
    pub full: Span,
    pub children: Vec<InlineNode>,
    pub attributes: Option<Attributes>,
}

impl DelimitedNode {
    /// A node whose content is a single literal text run.
    pub fn with_text(kind: NodeKind, full: Span, content: Span) -> Self {
        Self {
            kind,
            full,
            children: vec![InlineNode::Text(content)],
            attributes: None,
        }
    }
}

/// A parsed inline node with byte spans into the rope.
///
/// All variants store spans rather than text, enabling lossless round-trip.
#[derive(Debug, Clone, PartialEq)]
pub enum InlineNode {
    /// Plain text that isn't part of any special construct.
    Text(Span),
    /// A code span (backtick-delimited). This is a raw zone: no parsing inside.
    CodeSpan {
        /// Full span including backticks.
        full: Span,
        /// Inner span (content between backticks).
        inner: Span,
    },
    /// A wiki-style link `[[target]]` or `[[target|alias]]`.
    WikiLink {
        full: Span,
        target: Span,
        alias: Option<Span>,
    },
    /// A delimited span contributed by an extension.
    Delimited(DelimitedNode),
}

impl InlineNode {
    pub fn kind(&self) -> NodeKind {
        match self {
            InlineNode::Text(_) => NodeKind::TEXT,
            InlineNode::CodeSpan { .. } => NodeKind::CODE_SPAN,
            InlineNode::WikiLink { .. } => NodeKind::WIKI_LINK,
            InlineNode::Delimited(d) => d.kind,
        }
    }

    /// The full source span covered by this node.
    pub fn span(&self) -> Span {
        match self {
            InlineNode::Text(sp) => *sp,
            InlineNode::CodeSpan { full, .. } => *full,
            InlineNode::WikiLink { full, .. } => *full,
            InlineNode::Delimited(d) => d.full,
        }
    }

    pub fn children(&self) -> &[InlineNode] {
        match self {
            InlineNode::Delimited(d) => &d.children,
            _ => &[],
        }
    }

    pub fn attributes(&self) -> Option<&Attributes> {
        match self {
            InlineNode::Delimited(d) => d.attributes.as_ref(),
            _ => None,
        }
    }

    /// Attribute list of a node that can carry one, created on first use.
    /// Returns `None` for leaf nodes.
    pub fn attributes_mut(&mut self) -> Option<&mut Attributes> {
        match self {
            InlineNode::Delimited(d) => Some(d.attributes.get_or_insert_with(Attributes::new)),
            _ => None,
        }
    }

    /// Visits this node and all descendants depth-first, parents first.
    pub fn walk_mut(&mut self, f: &mut dyn FnMut(&mut InlineNode)) {
        f(self);
        if let InlineNode::Delimited(d) = self {
            for child in &mut d.children {
                child.walk_mut(f);
            }
        }
    }
}
