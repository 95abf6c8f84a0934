use super::kinds::{CodeFence, FenceKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockOpen {
    /// Fence opener; `info` is relative to the line remainder.
    FencedCode {
        kind: FenceKind,
        info: Option<(usize, usize)>,
    },
}

pub fn try_open_leaf(remainder: &str) -> Option<BlockOpen> {
    let sig = CodeFence::sig(remainder)?;
    Some(BlockOpen::FencedCode {
        kind: CodeFence::kind(sig),
        info: CodeFence::info_range(remainder),
    })
}
