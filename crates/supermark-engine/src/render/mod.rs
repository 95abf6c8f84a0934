//! # Rendering
//!
//! A depth-first walk over each block's inline nodes. Every node is handed
//! to the [`NodeRenderer`] registered for its [`NodeKind`] twice: once on
//! entry and once on exit. The entry call decides whether the walker
//! descends into the node's children.

pub mod attributes;
pub mod html;

use std::{collections::HashMap, fmt, sync::Arc};

use xi_rope::Rope;

use crate::{
    parsing::inline::{InlineNode, NodeKind},
    prioritized::Prioritized,
};

pub use attributes::{AttributeFilter, GLOBAL_ATTRIBUTE_FILTER, render_attributes};
pub use html::HtmlRenderer;

/// Tells the walker how to proceed after a render call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkStatus {
    /// Descend into children, then continue with siblings.
    Continue,
    /// Skip the children; the exit call still happens.
    SkipChildren,
    /// Abort the walk.
    Stop,
}

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("failed to write rendered output: {0}")]
    Fmt(#[from] fmt::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// HTML output switches shared by all renderers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HtmlOptions {
    /// Render soft line breaks inside paragraphs as `<br>`.
    pub hard_wraps: bool,
    /// Emit XHTML-style void elements (`<br />`).
    pub xhtml: bool,
}

impl HtmlOptions {
    pub fn line_break(&self) -> &'static str {
        if self.xhtml { "<br />\n" } else { "<br>\n" }
    }
}

/// What every render call can see besides the node itself.
#[derive(Clone, Copy)]
pub struct RenderContext<'a> {
    /// The buffer all node spans point into.
    pub source: &'a Rope,
    pub options: &'a HtmlOptions,
}

/// Renders the node kinds it declares.
pub trait NodeRenderer: Send + Sync {
    fn kinds(&self) -> Vec<NodeKind>;

    fn render(
        &self,
        out: &mut dyn fmt::Write,
        cx: &RenderContext<'_>,
        node: &InlineNode,
        entering: bool,
    ) -> Result<WalkStatus, RenderError>;
}

/// Maps each node kind to its highest-priority renderer.
#[derive(Clone, Default)]
pub struct RendererRegistry {
    by_kind: HashMap<NodeKind, Prioritized<Arc<dyn NodeRenderer>>>,
}

impl RendererRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `renderer` for each of its kinds. An existing entry is
    /// replaced only by a strictly higher priority.
    pub fn add(&mut self, renderer: Arc<dyn NodeRenderer>, priority: i32) {
        for kind in renderer.kinds() {
            if self
                .by_kind
                .keys()
                .any(|k| *k != kind && k.name() == kind.name())
            {
                log::warn!(
                    "two distinct node kinds are named {kind}; output naming them is ambiguous"
                );
            }
            let replace = self
                .by_kind
                .get(&kind)
                .is_none_or(|existing| priority > existing.priority);
            if replace {
                self.by_kind
                    .insert(kind, Prioritized::new(Arc::clone(&renderer), priority));
            }
        }
    }

    pub fn get(&self, kind: NodeKind) -> Option<&dyn NodeRenderer> {
        self.by_kind.get(&kind).map(|p| p.value.as_ref())
    }
}

impl fmt::Debug for RendererRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut kinds: Vec<_> = self
            .by_kind
            .iter()
            .map(|(k, p)| (k.name(), p.priority))
            .collect();
        kinds.sort();
        f.debug_map().entries(kinds).finish()
    }
}

/// Walks `node` depth-first, dispatching to the registry.
///
/// Kinds without a renderer are transparent: only their children render.
pub fn walk(
    registry: &RendererRegistry,
    out: &mut dyn fmt::Write,
    cx: &RenderContext<'_>,
    node: &InlineNode,
) -> Result<WalkStatus, RenderError> {
    let renderer = registry.get(node.kind());
    if renderer.is_none() {
        log::debug!("no renderer for {}; rendering children only", node.kind());
    }

    let status = match renderer {
        Some(r) => r.render(out, cx, node, true)?,
        None => WalkStatus::Continue,
    };

    match status {
        WalkStatus::Stop => return Ok(WalkStatus::Stop),
        WalkStatus::SkipChildren => {}
        WalkStatus::Continue => {
            for child in node.children() {
                if walk(registry, out, cx, child)? == WalkStatus::Stop {
                    return Ok(WalkStatus::Stop);
                }
            }
        }
    }

    if let Some(r) = renderer
        && r.render(out, cx, node, false)? == WalkStatus::Stop
    {
        return Ok(WalkStatus::Stop);
    }
    Ok(WalkStatus::Continue)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::{
        inline::{DelimitedNode, KindTag},
        rope::span::Span,
    };

    static BOX_TAG: KindTag = KindTag::new("Box");
    const BOX: NodeKind = NodeKind::of(&BOX_TAG);

    struct Tag(&'static str, WalkStatus);

    impl NodeRenderer for Tag {
        fn kinds(&self) -> Vec<NodeKind> {
            vec![BOX, NodeKind::TEXT]
        }

        fn render(
            &self,
            out: &mut dyn fmt::Write,
            _cx: &RenderContext<'_>,
            node: &InlineNode,
            entering: bool,
        ) -> Result<WalkStatus, RenderError> {
            let slash = if entering { "" } else { "/" };
            write!(out, "<{slash}{}:{}>", self.0, node.kind())?;
            Ok(self.1)
        }
    }

    fn boxed() -> InlineNode {
        InlineNode::Delimited(DelimitedNode::with_text(
            BOX,
            Span::new(0, 3),
            Span::new(1, 2),
        ))
    }

    fn render(registry: &RendererRegistry, node: &InlineNode) -> String {
        let rope = Rope::from("^x^");
        let options = HtmlOptions::default();
        let cx = RenderContext {
            source: &rope,
            options: &options,
        };
        let mut out = String::new();
        walk(registry, &mut out, &cx, node).unwrap();
        out
    }

    #[test]
    fn enter_children_exit() {
        let mut registry = RendererRegistry::new();
        registry.add(Arc::new(Tag("a", WalkStatus::Continue)), 10);
        assert_eq!(
            render(&registry, &boxed()),
            "<a:Box><a:Text></a:Text></a:Box>"
        );
    }

    #[test]
    fn skip_children_still_exits() {
        let mut registry = RendererRegistry::new();
        registry.add(Arc::new(Tag("a", WalkStatus::SkipChildren)), 10);
        assert_eq!(render(&registry, &boxed()), "<a:Box></a:Box>");
    }

    #[test]
    fn stop_aborts_walk() {
        let mut registry = RendererRegistry::new();
        registry.add(Arc::new(Tag("a", WalkStatus::Stop)), 10);
        assert_eq!(render(&registry, &boxed()), "<a:Box>");
    }

    #[test]
    fn higher_priority_wins_ties_keep_first() {
        let mut registry = RendererRegistry::new();
        registry.add(Arc::new(Tag("low", WalkStatus::SkipChildren)), 10);
        registry.add(Arc::new(Tag("tie", WalkStatus::SkipChildren)), 10);
        assert_eq!(render(&registry, &boxed()), "<low:Box></low:Box>");

        registry.add(Arc::new(Tag("high", WalkStatus::SkipChildren)), 20);
        assert_eq!(render(&registry, &boxed()), "<high:Box></high:Box>");
    }

    #[test]
    fn kinds_sharing_a_name_keep_their_own_renderers() {
        static OTHER_BOX_TAG: KindTag = KindTag::new("Box");
        const OTHER_BOX: NodeKind = NodeKind::of(&OTHER_BOX_TAG);

        struct OtherTag;
        impl NodeRenderer for OtherTag {
            fn kinds(&self) -> Vec<NodeKind> {
                vec![OTHER_BOX]
            }
            fn render(
                &self,
                out: &mut dyn fmt::Write,
                _cx: &RenderContext<'_>,
                _node: &InlineNode,
                entering: bool,
            ) -> Result<WalkStatus, RenderError> {
                out.write_str(if entering { "[" } else { "]" })?;
                Ok(WalkStatus::SkipChildren)
            }
        }

        let mut registry = RendererRegistry::new();
        registry.add(Arc::new(Tag("a", WalkStatus::SkipChildren)), 10);
        registry.add(Arc::new(OtherTag), 20);
        assert_eq!(render(&registry, &boxed()), "<a:Box></a:Box>");

        let other = InlineNode::Delimited(DelimitedNode::with_text(
            OTHER_BOX,
            Span::new(0, 3),
            Span::new(1, 2),
        ));
        assert_eq!(render(&registry, &other), "[]");
    }

    #[test]
    fn unknown_kind_renders_children_only() {
        struct TextOnly;
        impl NodeRenderer for TextOnly {
            fn kinds(&self) -> Vec<NodeKind> {
                vec![NodeKind::TEXT]
            }
            fn render(
                &self,
                out: &mut dyn fmt::Write,
                _cx: &RenderContext<'_>,
                _node: &InlineNode,
                entering: bool,
            ) -> Result<WalkStatus, RenderError> {
                if entering {
                    out.write_str("t")?;
                }
                Ok(WalkStatus::Continue)
            }
        }
        let mut registry = RendererRegistry::new();
        registry.add(Arc::new(TextOnly), 0);
        assert_eq!(render(&registry, &boxed()), "t");
    }
}
