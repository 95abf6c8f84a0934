use crate::parsing::{
    inline::{
        rules::{InlineContext, InlineParser, ScanResult},
        types::InlineNode,
    },
    rope::span::Span,
};

/// Code span inline type with owned delimiter constant.
///
/// Code spans are raw zones: no other inline parsing occurs inside them.
/// They are registered above every other rule so a backtick run always
/// claims its content first.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick character that delimits code spans.
    pub const TICK: char = '`';
    pub const PRIORITY: i32 = 1000;
}

impl InlineParser for CodeSpan {
    fn trigger(&self) -> &[char] {
        &[Self::TICK]
    }

    fn parse(&self, cx: &InlineContext<'_>) -> Option<ScanResult> {
        let rest = cx.line.strip_prefix(Self::TICK)?;
        let close = rest.find(Self::TICK)?;
        let consumed = close + 2;
        Some(ScanResult {
            node: InlineNode::CodeSpan {
                full: Span::new(cx.base, cx.base + consumed),
                inner: Span::new(cx.base + 1, cx.base + 1 + close),
            },
            consumed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cx(line: &str) -> InlineContext<'_> {
        InlineContext {
            preceding: None,
            line,
            base: 10,
        }
    }

    #[test]
    fn closed_code_span() {
        let res = CodeSpan.parse(&cx("`x^2^` tail")).unwrap();
        assert_eq!(res.consumed, 6);
        assert_eq!(
            res.node,
            InlineNode::CodeSpan {
                full: Span::new(10, 16),
                inner: Span::new(11, 15),
            }
        );
    }

    #[test]
    fn unclosed_code_span() {
        assert!(CodeSpan.parse(&cx("`never closed")).is_none());
    }
}
