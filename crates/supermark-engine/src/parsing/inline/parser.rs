use crate::parsing::rope::span::Span;

use super::{
    cursor::Cursor,
    rules::{InlineContext, InlineRules, ScanResult},
    types::InlineNode,
};

/// Parses inline content into a sequence of [`InlineNode`]s.
///
/// # Arguments
/// - `base`: Byte offset in the rope where `s` begins (for absolute span positions)
/// - `s`: The content to parse, possibly spanning several lines
/// - `rules`: Registered inline parsers
///
/// At each trigger char the parsers for that char are tried highest
/// priority first; the first match is kept and the cursor skips what it
/// consumed. Parsers only ever see the rest of the current line, so no
/// node crosses a line break. A claim that overruns the line, splits a
/// char, or disagrees with its node's span is discarded and the next
/// parser is tried.
///
/// # Returns
/// Nodes covering the entire input. Runs of literal text, including line
/// breaks, are merged into single `InlineNode::Text` nodes.
pub fn parse_inline(base: usize, s: &str, rules: &InlineRules) -> Vec<InlineNode> {
    let mut cur = Cursor::new(s, base);
    let mut out = vec![];
    let mut text_start = cur.pos();

    // Helper to flush accumulated text as a Text node
    fn flush_text(out: &mut Vec<InlineNode>, start: usize, end: usize) {
        if end > start {
            out.push(InlineNode::Text(Span { start, end }));
        }
    }

    'scan: while let Some(c) = cur.peek() {
        if rules.is_trigger(c) {
            let cx = InlineContext {
                preceding: cur.preceding(),
                line: cur.rest_of_line(),
                base: cur.pos(),
            };
            for parser in rules.for_trigger(c) {
                let Some(res) = parser.parse(&cx) else {
                    continue;
                };
                if !claim_fits(&cx, &res) {
                    log::debug!(
                        "rejecting {} claim at {}: {} bytes, node span {:?}, line has {}",
                        res.node.kind(),
                        cx.base,
                        res.consumed,
                        res.node.span(),
                        cx.line.len()
                    );
                    continue;
                }
                flush_text(&mut out, text_start, cx.base);
                cur.bump_line(res.consumed);
                out.push(res.node);
                text_start = cur.pos();
                continue 'scan;
            }
        }
        cur.bump();
    }

    flush_text(&mut out, text_start, cur.pos());
    out
}

/// A claim must be non-empty, end on a char boundary within the current
/// line, and match the span of the node it produced.
fn claim_fits(cx: &InlineContext<'_>, res: &ScanResult) -> bool {
    res.consumed > 0
        && cx.line.is_char_boundary(res.consumed)
        && res.node.span() == Span::new(cx.base, cx.base + res.consumed)
}
