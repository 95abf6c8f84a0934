use std::ops::Range;

use crate::parsing::{
    inline::{
        rules::{InlineContext, InlineParser, ScanResult},
        types::{DelimitedNode, InlineNode, KindTag, NodeKind},
    },
    rope::span::Span,
};

static SUPERSCRIPT_TAG: KindTag = KindTag::new("Superscript");

/// Single-caret superscript: `x^2^`.
///
/// A span opens only after a non-whitespace char on the same line, holds
/// at least one char, contains no whitespace and ends at the first closing
/// caret. `^^` is left for rules that own the doubled delimiter, and
/// footnote references (`[^id]`) never close so they stay literal.
pub struct Superscript;

/// Where a superscript matched, relative to the scanned line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaretSpan {
    /// Content between the carets.
    pub content: Range<usize>,
    /// Bytes from the opening caret through the closing caret.
    pub consumed: usize,
}

impl Superscript {
    pub const CARET: char = '^';
    pub const KIND: NodeKind = NodeKind::of(&SUPERSCRIPT_TAG);

    /// Decides whether `line` (starting at a caret) opens a superscript.
    ///
    /// `preceding` is the char before the caret, `None` at line start.
    /// Total over all inputs; every rejection is `None`.
    pub fn scan(preceding: Option<char>, line: &str) -> Option<CaretSpan> {
        if line.chars().nth(1).is_none() {
            return None;
        }
        match preceding {
            None => return None,
            Some(c) if c.is_whitespace() => return None,
            Some(_) => {}
        }

        let rest = line.strip_prefix(Self::CARET)?;
        // `^^` belongs to the doubled-delimiter grammar
        if rest.starts_with(Self::CARET) {
            return None;
        }

        let close = 1 + rest.find(Self::CARET)?;
        if close <= 1 {
            return None;
        }

        let content = &line[1..close];
        if content.chars().any(char::is_whitespace) || content.starts_with(Self::CARET) {
            return None;
        }

        Some(CaretSpan {
            content: 1..close,
            consumed: close + 1,
        })
    }
}

/// Inline rule wrapping [`Superscript::scan`].
pub struct SuperscriptParser;

impl InlineParser for SuperscriptParser {
    fn trigger(&self) -> &[char] {
        &[Superscript::CARET]
    }

    fn parse(&self, cx: &InlineContext<'_>) -> Option<ScanResult> {
        let CaretSpan { content, consumed } = Superscript::scan(cx.preceding, cx.line)?;
        let full = Span::new(cx.base, cx.base + consumed);
        let content = Span::new(cx.base + content.start, cx.base + content.end);
        log::trace!("superscript at {full:?}, content {content:?}");

        Some(ScanResult {
            node: InlineNode::Delimited(DelimitedNode::with_text(Superscript::KIND, full, content)),
            consumed,
        })
    }
}
