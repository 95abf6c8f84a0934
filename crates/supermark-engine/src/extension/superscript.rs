//! Single-caret superscript: `x^2^` renders as `x<sup>2</sup>`.
//!
//! Spans must not open at line start or after whitespace, must not contain
//! whitespace, and must not be empty. The content is literal text.

use std::{fmt, sync::Arc};

use once_cell::sync::Lazy;

use crate::{
    markdown::MarkdownBuilder,
    parsing::inline::{
        InlineNode, NodeKind,
        kinds::{Superscript, SuperscriptParser},
    },
    render::{
        AttributeFilter, GLOBAL_ATTRIBUTE_FILTER, NodeRenderer, RenderContext, RenderError,
        WalkStatus, render_attributes,
    },
};

use super::Extension;

/// Attribute names `<sup>` may carry.
pub static SUPERSCRIPT_ATTRIBUTE_FILTER: &AttributeFilter = &GLOBAL_ATTRIBUTE_FILTER;

/// Ready-made instance with the default priorities.
pub static SUPERSCRIPT: Lazy<SuperscriptExtension> = Lazy::new(SuperscriptExtension::new);

/// Renders superscript nodes as `<sup>` elements.
pub struct SuperscriptHtmlRenderer;

impl NodeRenderer for SuperscriptHtmlRenderer {
    fn kinds(&self) -> Vec<NodeKind> {
        vec![Superscript::KIND]
    }

    fn render(
        &self,
        out: &mut dyn fmt::Write,
        _cx: &RenderContext<'_>,
        node: &InlineNode,
        entering: bool,
    ) -> Result<WalkStatus, RenderError> {
        if entering {
            match node.attributes() {
                Some(attrs) => {
                    out.write_str("<sup")?;
                    render_attributes(out, attrs, SUPERSCRIPT_ATTRIBUTE_FILTER)?;
                    out.write_char('>')?;
                }
                None => out.write_str("<sup>")?,
            }
        } else {
            out.write_str("</sup>")?;
        }
        Ok(WalkStatus::Continue)
    }
}

/// Registers the superscript parser and renderer.
#[derive(Debug, Clone, Copy)]
pub struct SuperscriptExtension {
    parser_priority: i32,
    renderer_priority: i32,
}

impl SuperscriptExtension {
    /// Below any rule that owns the doubled `^^` token.
    pub const PRIORITY: i32 = 100;

    pub fn new() -> Self {
        Self {
            parser_priority: Self::PRIORITY,
            renderer_priority: Self::PRIORITY,
        }
    }

    pub fn with_parser_priority(self, priority: i32) -> Self {
        Self {
            parser_priority: priority,
            ..self
        }
    }

    pub fn with_renderer_priority(self, priority: i32) -> Self {
        Self {
            renderer_priority: priority,
            ..self
        }
    }
}

impl Default for SuperscriptExtension {
    fn default() -> Self {
        Self::new()
    }
}

impl Extension for SuperscriptExtension {
    fn extend(&self, md: &mut MarkdownBuilder) {
        md.add_inline_parser(Arc::new(SuperscriptParser), self.parser_priority);
        md.add_node_renderer(Arc::new(SuperscriptHtmlRenderer), self.renderer_priority);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use xi_rope::Rope;

    use super::*;
    use crate::{
        parsing::{
            inline::{Attributes, DelimitedNode},
            rope::span::Span,
        },
        render::HtmlOptions,
    };

    fn render_both(node: &InlineNode) -> (String, String) {
        let rope = Rope::from("x^2^");
        let options = HtmlOptions::default();
        let cx = RenderContext {
            source: &rope,
            options: &options,
        };
        let mut open = String::new();
        let mut close = String::new();
        let r = SuperscriptHtmlRenderer;
        assert_eq!(r.render(&mut open, &cx, node, true).unwrap(), WalkStatus::Continue);
        assert_eq!(r.render(&mut close, &cx, node, false).unwrap(), WalkStatus::Continue);
        (open, close)
    }

    fn node(attributes: Option<Attributes>) -> InlineNode {
        InlineNode::Delimited(DelimitedNode {
            attributes,
            ..DelimitedNode::with_text(Superscript::KIND, Span::new(1, 4), Span::new(2, 3))
        })
    }

    #[test]
    fn bare_tags() {
        assert_eq!(render_both(&node(None)), ("<sup>".into(), "</sup>".into()));
    }

    #[test]
    fn filtered_attributes() {
        let attrs: Attributes = [("class", "exp"), ("onmouseover", "x()")].into_iter().collect();
        assert_eq!(
            render_both(&node(Some(attrs))),
            (r#"<sup class="exp">"#.into(), "</sup>".into())
        );
    }

    #[test]
    fn empty_attribute_list_still_uses_attribute_form() {
        assert_eq!(render_both(&node(Some(Attributes::new()))).0, "<sup>");
    }

    #[test]
    fn singleton_uses_default_priority() {
        assert_eq!(SUPERSCRIPT.parser_priority, SuperscriptExtension::PRIORITY);
        assert_eq!(SUPERSCRIPT.renderer_priority, SuperscriptExtension::PRIORITY);
    }

    #[test]
    fn singleton_is_shareable() {
        fn assert_sync<T: Send + Sync>(_: &T) {}
        assert_sync(&*SUPERSCRIPT);
    }
}
