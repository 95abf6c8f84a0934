//! # Inline Kinds
//!
//! Each inline construct owns its delimiter constants and its rule here;
//! the driver in `parser` never hardcodes `` ` ``, `[[` or `^`.
//!
//! - **`CodeSpan`**: `` ` `` raw zone, highest priority
//! - **`WikiLink`**: `[[target]]` / `[[target|alias]]`
//! - **`Superscript`**: `^content^`, see [`Superscript::scan`]

pub mod code_span;
pub mod superscript;
pub mod wikilink;

pub use code_span::CodeSpan;
pub use superscript::{CaretSpan, Superscript, SuperscriptParser};
pub use wikilink::WikiLink;
