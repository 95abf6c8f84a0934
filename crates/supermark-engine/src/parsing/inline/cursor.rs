/// A cursor for char-by-char inline parsing with position tracking.
///
/// Operates over a string slice while tracking the absolute byte position
/// in the original rope (via `base` offset) and the start of the current
/// line, which bounds every lookbehind and lookahead.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The string being parsed.
    pub s: &'a str,
    /// Base offset in the rope (added to local index for absolute positions).
    pub base: usize,
    /// Current local byte index into `s`; always on a char boundary.
    pub i: usize,
    /// Local index where the current line starts.
    line_start: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(s: &'a str, base: usize) -> Self {
        Self {
            s,
            base,
            i: 0,
            line_start: 0,
        }
    }

    /// Returns the current absolute byte position (base + local index).
    pub fn pos(&self) -> usize {
        self.base + self.i
    }

    /// Peeks at the current char without advancing.
    pub fn peek(&self) -> Option<char> {
        self.s.get(self.i..)?.chars().next()
    }

    /// The char before the cursor on the current line; `None` at line start.
    pub fn preceding(&self) -> Option<char> {
        if self.i == self.line_start {
            return None;
        }
        self.s[self.line_start..self.i].chars().next_back()
    }

    /// The rest of the current line from the cursor, terminator excluded.
    pub fn rest_of_line(&self) -> &'a str {
        let rest = self.s.get(self.i..).unwrap_or("");
        let end = rest.find('\n').unwrap_or(rest.len());
        rest[..end].strip_suffix('\r').unwrap_or(&rest[..end])
    }

    /// Advances by one char, returning it.
    pub fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.i += c.len_utf8();
        if c == '\n' {
            self.line_start = self.i;
        }
        Some(c)
    }

    /// Advances by `n` bytes without crossing the end of the current line.
    ///
    /// Returns the number of bytes actually consumed.
    pub fn bump_line(&mut self, n: usize) -> usize {
        let line = self.rest_of_line();
        let mut n = n.min(line.len());
        while !line.is_char_boundary(n) {
            n -= 1;
        }
        self.i += n;
        n
    }
}
