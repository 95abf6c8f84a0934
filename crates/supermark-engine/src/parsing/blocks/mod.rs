//! # Block Parsing
//!
//! Two-phase block parsing.
//!
//! 1. **Line Classification** (`classify`): each line becomes a `LineClass`
//!    holding local facts (indentation, blank status, fence signature).
//! 2. **Block Construction** (`builder`): a `BlockBuilder` groups lines into
//!    paragraphs and fenced code blocks and emits `BlockNode`s.
//!
//! Fenced code blocks are raw zones: their content never reaches the inline
//! parser, so `^` inside a fence is always literal.

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod open;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{LineClass, MarkdownLineClassifier};
pub use types::{BlockKind, BlockNode};
