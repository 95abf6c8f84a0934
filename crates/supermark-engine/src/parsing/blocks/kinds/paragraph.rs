/// Paragraph block type.
///
/// The default leaf block when no other opener matches. Inline parsing runs
/// over paragraph content one line at a time.
pub struct Paragraph;

impl Paragraph {
    /// Leading spaces stripped from each paragraph line.
    pub const MAX_INDENT: usize = 3;

    /// Number of leading indentation bytes to skip on a paragraph line.
    pub fn indent(line: &str) -> usize {
        line.bytes()
            .take(Self::MAX_INDENT)
            .take_while(|&b| b == b' ')
            .count()
    }
}
