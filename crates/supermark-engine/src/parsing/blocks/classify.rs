use crate::parsing::rope::{lines::LineRef, span::Span};

use super::kinds::{CodeFence, FenceSig, Paragraph};

/// Classification of a single line containing only local facts.
///
/// Phase 1 of block parsing: each line is classified independently
/// without reference to surrounding context.
#[derive(Debug, Clone)]
pub struct LineClass {
    /// Full byte span of this line in the rope, terminator included.
    pub line: Span,
    /// Whether the line is blank (whitespace only).
    pub is_blank: bool,
    /// Line content after indentation, terminator excluded.
    pub remainder_span: Span,
    pub remainder_text: String,
    /// If the remainder looks like a fence opener/closer.
    pub fence_sig: Option<FenceSig>,
}

/// Classifies individual lines for the block parsing phase.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    pub fn classify(&self, lr: &LineRef) -> LineClass {
        let content = lr.content_span();
        let trimmed = &lr.text[..content.len()];
        let is_blank = trimmed.trim().is_empty();

        let idx = Paragraph::indent(trimmed);
        let remainder = &trimmed[idx..];

        LineClass {
            line: lr.span,
            is_blank,
            remainder_span: Span {
                start: content.start + idx,
                end: content.end,
            },
            remainder_text: remainder.to_string(),
            fence_sig: CodeFence::sig(remainder),
        }
    }
}
