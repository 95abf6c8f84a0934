/// A byte range `[start, end)` into the source rope.
///
/// Nodes hold spans instead of copied text. Slicing the rope with a span
/// reproduces the exact source, so the rope must outlive every parsed node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Span {
    /// Inclusive start byte offset.
    pub start: usize,
    /// Exclusive end byte offset.
    pub end: usize,
}

impl Span {
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Length in bytes; zero for inverted spans.
    #[must_use]
    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// True if `other` lies entirely inside `self`.
    #[must_use]
    pub fn contains(self, other: Span) -> bool {
        other.start >= self.start && other.end <= self.end
    }

    /// Shrinks the span by `head` bytes at the front and `tail` at the back.
    #[must_use]
    pub fn inset(self, head: usize, tail: usize) -> Span {
        let start = (self.start + head).min(self.end);
        let end = self.end.saturating_sub(tail).max(start);
        Span { start, end }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn len_and_empty() {
        assert_eq!(Span::new(3, 7).len(), 4);
        assert!(Span::new(5, 5).is_empty());
        assert!(Span::new(6, 2).is_empty());
    }

    #[test]
    fn contains_inner_span() {
        let outer = Span::new(10, 20);
        assert!(outer.contains(Span::new(10, 20)));
        assert!(outer.contains(Span::new(12, 15)));
        assert!(!outer.contains(Span::new(9, 15)));
        assert!(!outer.contains(Span::new(15, 21)));
    }

    #[test]
    fn inset_strips_delimiters() {
        assert_eq!(Span::new(1, 4).inset(1, 1), Span::new(2, 3));
    }

    #[test]
    fn inset_never_inverts() {
        assert_eq!(Span::new(0, 1).inset(1, 1), Span::new(1, 1));
    }
}
