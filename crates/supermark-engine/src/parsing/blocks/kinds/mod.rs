pub mod code_fence;
pub mod paragraph;

pub use code_fence::{CodeFence, FenceKind, FenceSig};
pub use paragraph::Paragraph;
