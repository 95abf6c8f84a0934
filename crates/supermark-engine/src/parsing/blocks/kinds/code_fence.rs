#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenceSig {
    Backticks,
    Tildes,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenceKind {
    Backticks,
    Tildes,
}

/// Fenced code block delimiters. Fences are raw zones: no inline parsing.
pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";
    pub const TILDES: &'static str = "~~~";

    pub fn sig(remainder: &str) -> Option<FenceSig> {
        let t = remainder.trim_end_matches(['\r', '\n']);
        if t.starts_with(Self::BACKTICKS) {
            Some(FenceSig::Backticks)
        } else if t.starts_with(Self::TILDES) {
            Some(FenceSig::Tildes)
        } else {
            None
        }
    }

    pub fn kind(sig: FenceSig) -> FenceKind {
        match sig {
            FenceSig::Backticks => FenceKind::Backticks,
            FenceSig::Tildes => FenceKind::Tildes,
        }
    }

    /// Byte range of the info string (e.g. `rust` in ```` ```rust ````),
    /// relative to `remainder`. `None` when the opener has no info string.
    pub fn info_range(remainder: &str) -> Option<(usize, usize)> {
        let t = remainder.trim_end_matches(['\r', '\n']);
        let fence_len = t
            .bytes()
            .take_while(|&b| b == b'`' || b == b'~')
            .count();
        let rest = &t[fence_len..];
        let info = rest.trim();
        if info.is_empty() {
            return None;
        }
        let lead = rest.len() - rest.trim_start().len();
        let start = fence_len + lead;
        Some((start, start + info.len()))
    }

    pub fn closes(kind: FenceKind, sig: Option<FenceSig>) -> bool {
        matches!(
            (kind, sig),
            (FenceKind::Backticks, Some(FenceSig::Backticks))
                | (FenceKind::Tildes, Some(FenceSig::Tildes))
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_backtick_fence() {
        assert_eq!(CodeFence::sig("```rust"), Some(FenceSig::Backticks));
    }

    #[test]
    fn detect_tilde_fence() {
        assert_eq!(CodeFence::sig("~~~\n"), Some(FenceSig::Tildes));
    }

    #[test]
    fn caret_line_is_not_a_fence() {
        assert_eq!(CodeFence::sig("x^2^"), None);
    }

    #[test]
    fn info_string_range() {
        assert_eq!(CodeFence::info_range("```rust\n"), Some((3, 7)));
        assert_eq!(CodeFence::info_range("~~~  text  "), Some((5, 9)));
        assert_eq!(CodeFence::info_range("```\n"), None);
    }

    #[test]
    fn does_not_close_mismatched_fence() {
        assert!(CodeFence::closes(FenceKind::Tildes, Some(FenceSig::Tildes)));
        assert!(!CodeFence::closes(
            FenceKind::Backticks,
            Some(FenceSig::Tildes)
        ));
        assert!(!CodeFence::closes(FenceKind::Tildes, None));
    }
}
