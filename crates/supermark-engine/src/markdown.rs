use std::{fmt, io, sync::Arc};

use xi_rope::Rope;

use crate::{
    extension::{Extension, SUPERSCRIPT, WikiLinks},
    parsing::{
        Document,
        inline::{InlineParser, InlineRules, kinds::CodeSpan},
        parse_with_rules,
    },
    render::{
        HtmlOptions, HtmlRenderer, NodeRenderer, RenderError, RendererRegistry,
        html::{CodeSpanRenderer, TextRenderer},
    },
};

/// Priority of the built-in text renderers.
const BASE_RENDERER_PRIORITY: i32 = 1000;

/// A pass over the parsed document before rendering, e.g. to attach
/// attributes to nodes.
pub trait DocumentTransformer: Send + Sync {
    fn transform(&self, doc: &mut Document, source: &Rope);
}

/// Collects rules, renderers and transformers for a [`Markdown`] pipeline.
pub struct MarkdownBuilder {
    rules: InlineRules,
    renderers: RendererRegistry,
    transformers: Vec<Arc<dyn DocumentTransformer>>,
    options: HtmlOptions,
}

impl MarkdownBuilder {
    /// A builder with only code spans and the base renderers installed.
    pub fn new() -> Self {
        let mut builder = Self::empty();
        builder.add_inline_parser(Arc::new(CodeSpan), CodeSpan::PRIORITY);
        builder.add_node_renderer(Arc::new(TextRenderer), BASE_RENDERER_PRIORITY);
        builder.add_node_renderer(Arc::new(CodeSpanRenderer), BASE_RENDERER_PRIORITY);
        builder
    }

    /// A builder with nothing registered at all.
    pub fn empty() -> Self {
        Self {
            rules: InlineRules::new(),
            renderers: RendererRegistry::new(),
            transformers: vec![],
            options: HtmlOptions::default(),
        }
    }

    pub fn with_extension(mut self, extension: &dyn Extension) -> Self {
        extension.extend(&mut self);
        self
    }

    pub fn with_options(mut self, options: HtmlOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_transformer(mut self, transformer: Arc<dyn DocumentTransformer>) -> Self {
        self.add_transformer(transformer);
        self
    }

    /// Installs an inline parser. Higher priorities are tried first.
    pub fn add_inline_parser(&mut self, parser: Arc<dyn InlineParser>, priority: i32) {
        self.rules.add(parser, priority);
    }

    /// Installs a renderer for the kinds it declares.
    pub fn add_node_renderer(&mut self, renderer: Arc<dyn NodeRenderer>, priority: i32) {
        self.renderers.add(renderer, priority);
    }

    pub fn add_transformer(&mut self, transformer: Arc<dyn DocumentTransformer>) {
        self.transformers.push(transformer);
    }

    pub fn build(self) -> Markdown {
        log::debug!(
            "markdown pipeline: {} inline rules, renderers {:?}",
            self.rules.len(),
            self.renderers
        );
        Markdown {
            rules: self.rules,
            renderers: self.renderers,
            transformers: self.transformers,
            options: self.options,
        }
    }
}

impl Default for MarkdownBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// An immutable parse-and-render pipeline.
///
/// Shareable across threads; each call works on its own document.
pub struct Markdown {
    rules: InlineRules,
    renderers: RendererRegistry,
    transformers: Vec<Arc<dyn DocumentTransformer>>,
    options: HtmlOptions,
}

impl Markdown {
    /// Code spans and plain text only.
    pub fn new() -> Self {
        MarkdownBuilder::new().build()
    }

    /// Code spans, wiki links and superscripts.
    pub fn with_defaults() -> Self {
        Self::builder()
            .with_extension(&*SUPERSCRIPT)
            .with_extension(&WikiLinks)
            .build()
    }

    pub fn builder() -> MarkdownBuilder {
        MarkdownBuilder::new()
    }

    pub fn options(&self) -> HtmlOptions {
        self.options
    }

    /// Parses the source and runs the transformers over the result.
    pub fn parse(&self, source: &Rope) -> Document {
        let mut doc = parse_with_rules(source, &self.rules);
        for transformer in &self.transformers {
            transformer.transform(&mut doc, source);
        }
        doc
    }

    pub fn render(
        &self,
        out: &mut dyn fmt::Write,
        source: &Rope,
        doc: &Document,
    ) -> Result<(), RenderError> {
        HtmlRenderer::new(&self.renderers, self.options).render_document(out, source, doc)
    }

    /// Parses and renders `source` to an HTML string.
    pub fn convert(&self, source: &str) -> Result<String, RenderError> {
        let rope = Rope::from(source);
        let doc = self.parse(&rope);
        let mut out = String::new();
        self.render(&mut out, &rope, &doc)?;
        Ok(out)
    }

    /// Parses and renders `source` into an `io::Write` sink.
    pub fn convert_to_writer(
        &self,
        source: &str,
        writer: &mut dyn io::Write,
    ) -> Result<(), RenderError> {
        let html = self.convert(source)?;
        writer.write_all(html.as_bytes())?;
        Ok(())
    }
}

impl Default for Markdown {
    fn default() -> Self {
        Self::new()
    }
}
