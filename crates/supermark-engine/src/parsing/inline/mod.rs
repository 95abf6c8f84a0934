//! # Inline Parsing
//!
//! Cursor-based inline parsing driven by a registry of trigger-character
//! rules.
//!
//! ## Modules
//!
//! - **`types`**: `InlineNode`, `NodeKind`, `DelimitedNode`, `Attributes`
//! - **`rules`**: `InlineParser` trait, `InlineContext`, `ScanResult`, `InlineRules`
//! - **`kinds`**: the built-in rules (code span, wiki link, superscript)
//! - **`cursor`**: `Cursor` with line-local lookbehind and lookahead
//! - **`parser`**: `parse_inline()` driver
//!
//! ## Precedence
//!
//! Rules sharing a trigger are tried highest priority first. Code spans sit
//! at the top and act as raw zones: `` `x^2^` `` is a single CodeSpan.
//! Rules that claim a doubled `^^` must be registered above superscript.

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod rules;
pub mod types;

pub use parser::parse_inline;
pub use rules::{InlineContext, InlineParser, InlineRules, ScanResult};
pub use types::{Attributes, DelimitedNode, InlineNode, KindTag, NodeKind};
