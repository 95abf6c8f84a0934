//! Block + inline parsing tests over whole documents.

use std::sync::Arc;

use rstest::rstest;
use xi_rope::Rope;

use crate::parsing::{
    blocks::{BlockKind, kinds::FenceKind},
    inline::{
        InlineNode, InlineRules,
        kinds::{CodeSpan, Superscript, SuperscriptParser, WikiLink},
    },
    parse_document, parse_inline_for_block, parse_with_rules,
    rope::span::Span,
    snapshot,
};

fn rules() -> InlineRules {
    let mut rules = InlineRules::new();
    rules.add(Arc::new(CodeSpan), CodeSpan::PRIORITY);
    rules.add(Arc::new(WikiLink), WikiLink::PRIORITY);
    rules.add(Arc::new(SuperscriptParser), 100);
    rules
}

fn superscript_contents(src: &str) -> Vec<String> {
    let rope = Rope::from(src);
    let doc = parse_with_rules(&rope, &rules());
    snapshot::invariants(&rope, &doc);

    let mut out = vec![];
    for block in &doc.blocks {
        for node in &block.inlines {
            if node.kind() == Superscript::KIND {
                let child = node.children()[0].span();
                out.push(rope.slice_to_cow(child.start..child.end).into_owned());
            }
        }
    }
    out
}

#[rstest]
#[case("x^2^", &["2"])]
#[case("a^2^ + b^2^ = c^2^", &["2", "2", "2"])]
#[case("x = y^6^ + z^n+1^", &["6", "n+1"])]
#[case("a^2!^, b^2,1^, c^n+1^", &["2!", "2,1", "n+1"])]
#[case("a^2&times;n^, b^2&#x1f604;^", &["2&times;n", "2&#x1f604;"])]
#[case("a^2 + b^2 = c^2", &[])]
#[case("a^2 ^ + b^ 2^ = c^ 2 ^", &[])]
#[case("a^2 a^ + b^b2^ = c^2 foo^", &["b2"])]
#[case("a^2^2^^ + b^2^ = c^2^", &["2", "2", "2"])]
#[case("a^2^^2^ + b^2^ = c^2^", &["2", "2", "2", "2"])]
#[case("Hi, Albert![^1^]", &["1"])]
#[case("Hi, Bob![^1]\n[^1]: Close the airlock!", &[])]
#[case("[^1]: E=mc^2^ is a famous equation.", &["2"])]
#[case("^2^ at line start", &[])]
#[case("x ^2^", &[])]
#[case("x^^2^", &["2"])]
#[case("a^2~2~^", &["2~2~"])]
#[case("`x^2^` but y^3^", &["3"])]
fn superscripts_in_paragraphs(#[case] src: &str, #[case] expected: &[&str]) {
    assert_eq!(superscript_contents(src), expected);
}

#[test]
fn paragraph_lines_are_scanned_independently() {
    assert_eq!(superscript_contents("a^2\nb^3^\n^4^"), vec!["3"]);
}

#[test]
fn fenced_code_is_a_raw_zone() {
    let src = "```\nx^2^\n```\ny^3^\n";
    let rope = Rope::from(src);
    let doc = parse_with_rules(&rope, &rules());
    snapshot::invariants(&rope, &doc);

    assert_eq!(doc.blocks.len(), 2);
    assert!(matches!(
        doc.blocks[0].node.kind,
        BlockKind::FencedCode {
            kind: FenceKind::Backticks,
            info: None
        }
    ));
    assert_eq!(doc.blocks[0].node.content_span, Span::new(4, 9));
    assert!(doc.blocks[0].inlines.is_empty());
    assert_eq!(superscript_contents(src), vec!["3"]);
}

#[test]
fn fence_info_string_span() {
    let rope = Rope::from("~~~ math\na^2^\n");
    let doc = parse_document(&rope);
    assert_eq!(
        doc.blocks[0].kind,
        BlockKind::FencedCode {
            kind: FenceKind::Tildes,
            info: Some(Span::new(4, 8)),
        }
    );
    // Unterminated: body runs to EOF
    assert_eq!(doc.blocks[0].span.end, 14);
    assert_eq!(doc.blocks[0].content_span, Span::new(9, 14));
}

#[test]
fn paragraph_content_excludes_indent_and_terminator() {
    let rope = Rope::from("  x^2^\n\n");
    let doc = parse_document(&rope);
    assert_eq!(doc.blocks.len(), 1);
    assert_eq!(doc.blocks[0].span, Span::new(0, 7));
    assert_eq!(doc.blocks[0].content_span, Span::new(2, 6));
}

/// Slicing any inline span reproduces the source exactly.
#[test]
fn lossless_span_invariant() {
    let src = "Hello [[world]], e=mc^2^ and `code`!";
    let rope = Rope::from(src);
    let doc = parse_with_rules(&rope, &rules());

    let rebuilt: String = doc.blocks[0]
        .inlines
        .iter()
        .map(|n| rope.slice_to_cow(n.span().start..n.span().end).into_owned())
        .collect();
    assert_eq!(rebuilt, src);
}

#[test]
fn raw_zones_suppress_inline_parsing() {
    let rope = Rope::from("`[[not a link]] x^2^`");
    let doc = parse_document(&rope);
    let inlines = parse_inline_for_block(&rope, &doc.blocks[0], &rules());
    assert_eq!(inlines.len(), 1);
    assert!(matches!(inlines[0], InlineNode::CodeSpan { .. }));
}

#[test]
fn empty_document() {
    let rope = Rope::from("");
    assert!(parse_document(&rope).blocks.is_empty());
}

#[test]
fn blank_lines_only() {
    let rope = Rope::from("\n\n\n");
    assert!(parse_document(&rope).blocks.is_empty());
}
