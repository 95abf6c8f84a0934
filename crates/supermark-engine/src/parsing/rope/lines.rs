use xi_rope::Rope;

use super::span::Span;

/// One source line with its byte span in the rope.
#[derive(Debug, Clone)]
pub struct LineRef {
    /// Byte span of the line, including the trailing newline if present.
    pub span: Span,
    pub text: String,
}

impl LineRef {
    /// Span of the line without its `\n` / `\r\n` terminator.
    pub fn content_span(&self) -> Span {
        let trimmed = self.text.trim_end_matches(['\r', '\n']);
        Span {
            start: self.span.start,
            end: self.span.start + trimmed.len(),
        }
    }
}

/// Iterates over the rope's lines with their byte spans.
///
/// Uses `lines_raw` so newline bytes stay inside the spans and consecutive
/// spans tile the whole rope.
pub fn lines_with_spans(rope: &Rope) -> impl Iterator<Item = LineRef> + '_ {
    let mut offset = 0usize;
    rope.lines_raw(..).map(move |line| {
        let start = offset;
        offset += line.len();
        LineRef {
            span: Span { start, end: offset },
            text: line.into_owned(),
        }
    })
}
