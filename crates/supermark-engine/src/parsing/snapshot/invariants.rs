use xi_rope::Rope;

use crate::parsing::{
    Document,
    inline::{InlineNode, kinds::Superscript},
    rope::span::Span,
};

/// Validates parser output invariants.
///
/// Asserts that:
/// - All block and content spans are within rope bounds
/// - Content spans are contained within their block spans
/// - Inline nodes are in order, inside the block content, and do not overlap
/// - Children are contained in their parent
/// - A superscript has one text child covering everything between its carets
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(rope: &Rope, doc: &Document) {
    let n = rope.len();
    for b in &doc.blocks {
        let (span, content) = (b.node.span, b.node.content_span);
        assert!(
            span.start <= span.end && span.end <= n,
            "block span out of bounds: {span:?} (rope len: {n})"
        );
        assert!(
            content.start <= content.end && content.end <= n,
            "content span out of bounds: {content:?} (rope len: {n})"
        );
        assert!(
            span.contains(content),
            "content span not contained in block span: content {content:?}, block {span:?}"
        );
        check_siblings(rope, content, &b.inlines);
    }
}

fn check_siblings(rope: &Rope, parent: Span, nodes: &[InlineNode]) {
    let mut prev_end = parent.start;
    for node in nodes {
        let sp = node.span();
        assert!(
            parent.contains(sp),
            "{} span {sp:?} escapes parent {parent:?}",
            node.kind()
        );
        assert!(
            sp.start >= prev_end,
            "{} span {sp:?} overlaps previous sibling ending at {prev_end}",
            node.kind()
        );
        prev_end = sp.end;

        if node.kind() == Superscript::KIND {
            check_superscript(rope, node);
        }
        check_siblings(rope, sp, node.children());
    }
}

fn check_superscript(rope: &Rope, node: &InlineNode) {
    let full = node.span();
    let caret = Superscript::CARET.len_utf8();
    let text = rope.slice_to_cow(full.start..full.end);
    assert!(
        text.starts_with(Superscript::CARET) && text.ends_with(Superscript::CARET),
        "superscript {full:?} is not delimited by carets: {text:?}"
    );
    assert_eq!(
        node.children(),
        &[InlineNode::Text(full.inset(caret, caret))],
        "superscript {full:?} must own exactly its content"
    );
}
