//! # Extensions
//!
//! An extension wires inline parsers and node renderers into a
//! [`MarkdownBuilder`]. It owns no state of its own beyond the priorities
//! it registers with.

pub mod superscript;

use std::sync::Arc;

use crate::{
    markdown::MarkdownBuilder,
    parsing::inline::kinds::WikiLink,
    render::html::WikiLinkRenderer,
};

pub use superscript::{SUPERSCRIPT, SuperscriptExtension, SuperscriptHtmlRenderer};

pub trait Extension: Send + Sync {
    fn extend(&self, md: &mut MarkdownBuilder);
}

/// `[[target]]` and `[[target|alias]]` links.
#[derive(Debug, Clone, Copy, Default)]
pub struct WikiLinks;

impl Extension for WikiLinks {
    fn extend(&self, md: &mut MarkdownBuilder) {
        md.add_inline_parser(Arc::new(WikiLink), WikiLink::PRIORITY);
        md.add_node_renderer(Arc::new(WikiLinkRenderer), WikiLink::PRIORITY);
    }
}
