use crate::parsing::rope::span::Span;

use super::{
    classify::LineClass,
    kinds::{CodeFence, FenceKind},
    open::{BlockOpen, try_open_leaf},
    types::{BlockKind, BlockNode},
};

#[derive(Debug, Clone, Copy)]
enum LeafState {
    None,
    Paragraph {
        start: usize,
        content_start: usize,
        content_end: usize,
        last_line_end: usize,
    },
    Fence {
        kind: FenceKind,
        info: Option<Span>,
        start: usize,
        body_start: usize,
        last_line_end: usize,
    },
}

/// Line-driven state machine that groups classified lines into blocks.
pub struct BlockBuilder {
    leaf: LeafState,
    out: Vec<BlockNode>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self {
            leaf: LeafState::None,
            out: vec![],
        }
    }

    pub fn push(&mut self, c: &LineClass) {
        if self.in_fence() {
            self.consume_fence_line(c);
            return;
        }

        if c.is_blank {
            self.flush_paragraph();
            return;
        }

        if let Some(open) = try_open_leaf(&c.remainder_text) {
            self.flush_paragraph();
            self.open_leaf(open, c);
            return;
        }

        self.extend_paragraph(c);
    }

    pub fn finish(mut self) -> Vec<BlockNode> {
        // EOF flush
        self.flush_paragraph();
        self.flush_fence();
        self.out
    }

    fn in_fence(&self) -> bool {
        matches!(self.leaf, LeafState::Fence { .. })
    }

    fn open_leaf(&mut self, open: BlockOpen, c: &LineClass) {
        match open {
            BlockOpen::FencedCode { kind, info } => {
                let base = c.remainder_span.start;
                self.leaf = LeafState::Fence {
                    kind,
                    info: info.map(|(s, e)| Span::new(base + s, base + e)),
                    start: c.line.start,
                    body_start: c.line.end,
                    last_line_end: c.line.end,
                }
            }
        }
    }

    fn consume_fence_line(&mut self, c: &LineClass) {
        let LeafState::Fence {
            kind,
            info,
            start,
            body_start,
            ..
        } = self.leaf
        else {
            return;
        };

        if CodeFence::closes(kind, c.fence_sig) {
            self.out.push(BlockNode {
                kind: BlockKind::FencedCode { kind, info },
                span: Span::new(start, c.line.end),
                content_span: Span::new(body_start, c.line.start),
            });
            self.leaf = LeafState::None;
            return;
        }

        self.leaf = LeafState::Fence {
            kind,
            info,
            start,
            body_start,
            last_line_end: c.line.end,
        };
    }

    fn extend_paragraph(&mut self, c: &LineClass) {
        self.leaf = match self.leaf {
            LeafState::Paragraph {
                start,
                content_start,
                ..
            } => LeafState::Paragraph {
                start,
                content_start,
                content_end: c.remainder_span.end,
                last_line_end: c.line.end,
            },
            _ => LeafState::Paragraph {
                start: c.line.start,
                content_start: c.remainder_span.start,
                content_end: c.remainder_span.end,
                last_line_end: c.line.end,
            },
        };
    }

    fn flush_paragraph(&mut self) {
        let prev = std::mem::replace(&mut self.leaf, LeafState::None);
        if let LeafState::Paragraph {
            start,
            content_start,
            content_end,
            last_line_end,
        } = prev
        {
            self.out.push(BlockNode {
                kind: BlockKind::Paragraph,
                span: Span::new(start, last_line_end),
                content_span: Span::new(content_start, content_end),
            });
        } else {
            self.leaf = prev; // put back non-paragraph leaf (e.g. fence)
        }
    }

    fn flush_fence(&mut self) {
        let prev = std::mem::replace(&mut self.leaf, LeafState::None);
        if let LeafState::Fence {
            kind,
            info,
            start,
            body_start,
            last_line_end,
        } = prev
        {
            // Unterminated fence: the body runs to EOF
            self.out.push(BlockNode {
                kind: BlockKind::FencedCode { kind, info },
                span: Span::new(start, last_line_end),
                content_span: Span::new(body_start, last_line_end),
            });
        }
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}
