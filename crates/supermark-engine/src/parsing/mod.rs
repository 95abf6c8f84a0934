pub mod blocks;
pub mod inline;
pub mod rope;
pub mod snapshot;

#[cfg(test)]
mod tests;

use xi_rope::Rope;

use blocks::{BlockBuilder, BlockKind, BlockNode, MarkdownLineClassifier};
use inline::{InlineNode, InlineRules};
use rope::{lines_with_spans, slice::slice};

/// Block structure only; inline content is parsed on demand.
#[derive(Debug)]
pub struct ParsedDoc {
    pub blocks: Vec<BlockNode>,
}

/// A block with its parsed inline content.
#[derive(Debug, Clone)]
pub struct Block {
    pub node: BlockNode,
    /// Empty for raw blocks such as fenced code.
    pub inlines: Vec<InlineNode>,
}

/// A fully parsed document. Spans refer to the rope it was parsed from.
#[derive(Debug, Clone, Default)]
pub struct Document {
    pub blocks: Vec<Block>,
}

impl Document {
    /// Visits every inline node in document order, parents first.
    pub fn walk_inlines_mut(&mut self, f: &mut dyn FnMut(&mut InlineNode)) {
        for block in &mut self.blocks {
            for node in &mut block.inlines {
                node.walk_mut(f);
            }
        }
    }
}

pub fn parse_document(rope: &Rope) -> ParsedDoc {
    let classifier = MarkdownLineClassifier;
    let mut builder = BlockBuilder::new();

    for lr in lines_with_spans(rope) {
        let lc = classifier.classify(&lr);
        builder.push(&lc);
    }

    ParsedDoc {
        blocks: builder.finish(),
    }
}

/// Inline parse for a block node; raw blocks yield no inline nodes.
pub fn parse_inline_for_block(rope: &Rope, b: &BlockNode, rules: &InlineRules) -> Vec<InlineNode> {
    if !matches!(b.kind, BlockKind::Paragraph) {
        return vec![];
    }
    let s = slice(rope, b.content_span);
    inline::parse_inline(b.content_span.start, &s, rules)
}

/// Block and inline parse in one pass.
pub fn parse_with_rules(rope: &Rope, rules: &InlineRules) -> Document {
    let blocks = parse_document(rope)
        .blocks
        .into_iter()
        .map(|node| Block {
            inlines: parse_inline_for_block(rope, &node, rules),
            node,
        })
        .collect();
    Document { blocks }
}
