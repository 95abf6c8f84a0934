use std::borrow::Cow;

use xi_rope::Rope;

use super::span::Span;

/// Borrows the text of a span when it lives in a single rope leaf.
pub fn slice(rope: &Rope, sp: Span) -> Cow<'_, str> {
    rope.slice_to_cow(sp.start..sp.end)
}

/// Extracts the text for a span as an owned String.
pub fn slice_to_string(rope: &Rope, sp: Span) -> String {
    slice(rope, sp).into_owned()
}

/// Extracts text for a span, truncated to `max` bytes with a "..." suffix.
///
/// Truncation backs off to a char boundary so multi-byte text never splits.
pub fn preview(rope: &Rope, sp: Span, max: usize) -> String {
    let mut s = slice_to_string(rope, sp);
    if s.len() > max {
        let mut cut = max;
        while !s.is_char_boundary(cut) {
            cut -= 1;
        }
        s.truncate(cut);
        s.push_str("...");
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_short_text_unchanged() {
        let rope = Rope::from("x^2^");
        assert_eq!(preview(&rope, Span::new(0, 4), 10), "x^2^");
    }

    #[test]
    fn preview_truncates_long_text() {
        let rope = Rope::from("a^2^ + b^2^");
        assert_eq!(preview(&rope, Span::new(0, 11), 4), "a^2^...");
    }

    #[test]
    fn preview_respects_char_boundaries() {
        let rope = Rope::from("x^é^");
        // 'é' is two bytes starting at offset 2
        assert_eq!(preview(&rope, Span::new(0, 5), 3), "x^...");
    }

    #[test]
    fn slice_partial_span() {
        let rope = Rope::from("e=mc^2^");
        assert_eq!(slice_to_string(&rope, Span::new(5, 6)), "2");
    }
}
