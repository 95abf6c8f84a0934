use std::sync::Arc;

use crate::prioritized::{Prioritized, sort_by_priority};

use super::types::InlineNode;

/// What an inline parser sees when its trigger character is reached.
#[derive(Debug, Clone, Copy)]
pub struct InlineContext<'a> {
    /// The char before the trigger on the same line; `None` at line start.
    pub preceding: Option<char>,
    /// The current line from the trigger char to the end of the line.
    pub line: &'a str,
    /// Absolute rope offset of the trigger char.
    pub base: usize,
}

/// A successful match: the node plus how many bytes of `line` it covers.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanResult {
    pub node: InlineNode,
    pub consumed: usize,
}

/// An inline construct recognizer invoked at its trigger characters.
///
/// Implementations are pure: `None` means "no match here" and the driver
/// keeps the trigger as literal text.
pub trait InlineParser: Send + Sync {
    fn trigger(&self) -> &[char];

    fn parse(&self, cx: &InlineContext<'_>) -> Option<ScanResult>;
}

/// Priority-ordered set of inline parsers.
#[derive(Clone, Default)]
pub struct InlineRules {
    parsers: Vec<Prioritized<Arc<dyn InlineParser>>>,
}

impl InlineRules {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, parser: Arc<dyn InlineParser>, priority: i32) {
        self.parsers.push(Prioritized::new(parser, priority));
        sort_by_priority(&mut self.parsers);
    }

    pub fn is_trigger(&self, c: char) -> bool {
        self.parsers.iter().any(|p| p.value.trigger().contains(&c))
    }

    /// Parsers triggered by `c`, highest priority first.
    pub fn for_trigger(&self, c: char) -> impl Iterator<Item = &dyn InlineParser> {
        self.parsers
            .iter()
            .filter(move |p| p.value.trigger().contains(&c))
            .map(|p| p.value.as_ref())
    }

    pub fn len(&self) -> usize {
        self.parsers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parsers.is_empty()
    }
}

impl std::fmt::Debug for InlineRules {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(
                self.parsers
                    .iter()
                    .map(|p| (p.value.trigger().to_vec(), p.priority)),
            )
            .finish()
    }
}
