pub mod extension;
pub mod markdown;
pub mod parsing;
pub mod prioritized;
pub mod render;

// Re-export key types for easier usage
pub use extension::{Extension, SUPERSCRIPT, SuperscriptExtension, WikiLinks};
pub use markdown::{DocumentTransformer, Markdown, MarkdownBuilder};
pub use parsing::{Block, Document};
pub use render::{HtmlOptions, RenderError, WalkStatus};
