//! # Snapshot Testing Support
//!
//! - **`normalize`**: converts a parsed [`Document`](crate::parsing::Document)
//!   to a stable, serializable `Snap`
//! - **`invariants`**: runtime checks for parser correctness (spans in bounds,
//!   children contained in parents, superscript content inside its carets)

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::{Snap, normalize};
