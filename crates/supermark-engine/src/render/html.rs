use std::fmt;

use xi_rope::Rope;

use crate::parsing::{
    Document,
    blocks::BlockKind,
    inline::{InlineNode, NodeKind},
    rope::slice::slice,
};

use super::{
    HtmlOptions, NodeRenderer, RenderContext, RenderError, RendererRegistry, WalkStatus, walk,
};

/// Renders a parsed [`Document`] to HTML.
///
/// Blocks are handled here; inline nodes go through the registry.
pub struct HtmlRenderer<'r> {
    registry: &'r RendererRegistry,
    options: HtmlOptions,
}

impl<'r> HtmlRenderer<'r> {
    pub fn new(registry: &'r RendererRegistry, options: HtmlOptions) -> Self {
        Self { registry, options }
    }

    pub fn render_document(
        &self,
        out: &mut dyn fmt::Write,
        source: &Rope,
        doc: &Document,
    ) -> Result<(), RenderError> {
        let cx = RenderContext {
            source,
            options: &self.options,
        };

        for block in &doc.blocks {
            match &block.node.kind {
                BlockKind::Paragraph => {
                    out.write_str("<p>")?;
                    for node in &block.inlines {
                        if walk(self.registry, out, &cx, node)? == WalkStatus::Stop {
                            return Ok(());
                        }
                    }
                    out.write_str("</p>\n")?;
                }
                BlockKind::FencedCode { info, .. } => {
                    out.write_str("<pre><code")?;
                    if let Some(info) = info {
                        let info = slice(source, *info);
                        if let Some(lang) = info.split_whitespace().next() {
                            write!(
                                out,
                                " class=\"language-{}\"",
                                html_escape::encode_double_quoted_attribute(lang)
                            )?;
                        }
                    }
                    out.write_char('>')?;
                    let body = slice(source, block.node.content_span);
                    out.write_str(&html_escape::encode_text(&body))?;
                    out.write_str("</code></pre>\n")?;
                }
            }
        }
        Ok(())
    }

    /// Renders a single inline sequence without block wrapping.
    pub fn render_inlines(
        &self,
        out: &mut dyn fmt::Write,
        source: &Rope,
        inlines: &[InlineNode],
    ) -> Result<(), RenderError> {
        let cx = RenderContext {
            source,
            options: &self.options,
        };
        for node in inlines {
            if walk(self.registry, out, &cx, node)? == WalkStatus::Stop {
                break;
            }
        }
        Ok(())
    }
}

/// Resolves entity references in literal text, then escapes it.
pub fn write_text(out: &mut dyn fmt::Write, raw: &str) -> fmt::Result {
    let decoded = html_escape::decode_html_entities(raw);
    out.write_str(&html_escape::encode_text(&decoded))
}

/// Literal text runs. Line breaks inside a run are soft breaks.
pub struct TextRenderer;

impl NodeRenderer for TextRenderer {
    fn kinds(&self) -> Vec<NodeKind> {
        vec![NodeKind::TEXT]
    }

    fn render(
        &self,
        out: &mut dyn fmt::Write,
        cx: &RenderContext<'_>,
        node: &InlineNode,
        entering: bool,
    ) -> Result<WalkStatus, RenderError> {
        if !entering {
            return Ok(WalkStatus::Continue);
        }
        let raw = slice(cx.source, node.span());
        let mut lines = raw.split('\n').peekable();
        while let Some(line) = lines.next() {
            if lines.peek().is_none() {
                write_text(out, line)?;
                break;
            }
            write_text(out, line.strip_suffix('\r').unwrap_or(line))?;
            if cx.options.hard_wraps {
                out.write_str(cx.options.line_break())?;
            } else {
                out.write_char('\n')?;
            }
        }
        Ok(WalkStatus::Continue)
    }
}

pub struct CodeSpanRenderer;

impl NodeRenderer for CodeSpanRenderer {
    fn kinds(&self) -> Vec<NodeKind> {
        vec![NodeKind::CODE_SPAN]
    }

    fn render(
        &self,
        out: &mut dyn fmt::Write,
        cx: &RenderContext<'_>,
        node: &InlineNode,
        entering: bool,
    ) -> Result<WalkStatus, RenderError> {
        let InlineNode::CodeSpan { inner, .. } = node else {
            return Ok(WalkStatus::Continue);
        };
        if entering {
            out.write_str("<code>")?;
            out.write_str(&html_escape::encode_text(&slice(cx.source, *inner)))?;
        } else {
            out.write_str("</code>")?;
        }
        Ok(WalkStatus::SkipChildren)
    }
}

pub struct WikiLinkRenderer;

impl NodeRenderer for WikiLinkRenderer {
    fn kinds(&self) -> Vec<NodeKind> {
        vec![NodeKind::WIKI_LINK]
    }

    fn render(
        &self,
        out: &mut dyn fmt::Write,
        cx: &RenderContext<'_>,
        node: &InlineNode,
        entering: bool,
    ) -> Result<WalkStatus, RenderError> {
        let InlineNode::WikiLink { target, alias, .. } = node else {
            return Ok(WalkStatus::Continue);
        };
        if entering {
            let target_text = slice(cx.source, *target);
            write!(
                out,
                "<a class=\"wikilink\" href=\"{}\">",
                html_escape::encode_double_quoted_attribute(target_text.trim())
            )?;
            let label = slice(cx.source, alias.unwrap_or(*target));
            write_text(out, label.trim())?;
        } else {
            out.write_str("</a>")?;
        }
        Ok(WalkStatus::SkipChildren)
    }
}
