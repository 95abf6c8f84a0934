use crate::parsing::{
    inline::{
        rules::{InlineContext, InlineParser, ScanResult},
        types::InlineNode,
    },
    rope::span::Span,
};

/// Wiki-style links: `[[target]]` and `[[target|alias]]`.
pub struct WikiLink;

impl WikiLink {
    pub const OPEN: &'static str = "[[";
    pub const CLOSE: &'static str = "]]";
    pub const ALIAS: char = '|';
    pub const PRIORITY: i32 = 200;
}

impl InlineParser for WikiLink {
    fn trigger(&self) -> &[char] {
        &['[']
    }

    fn parse(&self, cx: &InlineContext<'_>) -> Option<ScanResult> {
        let body = cx.line.strip_prefix(Self::OPEN)?;
        let close = body.find(Self::CLOSE)?;
        let inner = &body[..close];
        let inner_start = cx.base + Self::OPEN.len();

        let (target, alias) = match inner.find(Self::ALIAS) {
            Some(bar) => (
                Span::new(inner_start, inner_start + bar),
                Some(Span::new(inner_start + bar + 1, inner_start + close)),
            ),
            None => (Span::new(inner_start, inner_start + close), None),
        };

        let consumed = Self::OPEN.len() + close + Self::CLOSE.len();
        Some(ScanResult {
            node: InlineNode::WikiLink {
                full: Span::new(cx.base, cx.base + consumed),
                target,
                alias,
            },
            consumed,
        })
    }
}
