use crate::parsing::rope::span::Span;

use super::kinds::FenceKind;

/// The kind of a leaf block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockKind {
    /// A paragraph block (default when no other block opener matches).
    Paragraph,
    /// A fenced code block (``` or ~~~).
    FencedCode {
        kind: FenceKind,
        /// Info string after the opening fence, if any.
        info: Option<Span>,
    },
}

/// A parsed block node with its kind and spans.
#[derive(Debug, Clone)]
pub struct BlockNode {
    pub kind: BlockKind,
    /// Full byte span of the block including fences and line terminators.
    pub span: Span,
    /// Span handed to the next stage: trimmed paragraph text for inline
    /// parsing, or the raw lines between the fences of a code block.
    pub content_span: Span,
}
