use std::sync::Arc;

/// Opaque source position, carried through every AST node for downstream error
/// pretty-printing. Nothing in this crate inspects `file_content` except
/// [`Location::line_and_column`].
///
/// `file_content` is `Arc<str>` rather than `String` so that every node parsed
/// from the same file can clone its `Location` for free.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Location {
    pub file_path: Arc<str>,
    pub file_content: Arc<str>,
    /// Offset into `file_content`, counted in `char`s (not bytes).
    pub position: u32,
}

impl Location {
    pub fn new(file_path: impl Into<Arc<str>>, file_content: impl Into<Arc<str>>, position: u32) -> Self {
        Self { file_path: file_path.into(), file_content: file_content.into(), position }
    }

    /// 1-based line and column of `position`, computed by counting newlines
    /// up to (but not past) the offset.
    pub fn line_and_column(&self) -> (usize, usize) {
        let mut line = 1;
        let mut column = 1;
        let end = self.position as usize;
        for ch in self.file_content.chars().take(end) {
            if ch == '\n' {
                line += 1;
                column = 1;
            } else {
                column += 1;
            }
        }
        (line, column)
    }

    #[cfg(test)]
    pub fn dummy() -> Self {
        Self::new("<test>", "", 0)
    }

    /// A placeholder used where no single source position applies, such as
    /// an import cycle spanning several modules' files.
    pub fn synthetic() -> Self {
        Self::new("<generated>", "", 0)
    }
}

#[cfg(test)]
mod tests {
    use super::Location;

    #[test]
    fn line_and_column_counts_newlines() {
        let loc = Location::new("f.lang", "abc\ndef\nghi", 8);
        assert_eq!(loc.line_and_column(), (3, 1));
    }

    #[test]
    fn line_and_column_first_line() {
        let loc = Location::new("f.lang", "abc\ndef", 1);
        assert_eq!(loc.line_and_column(), (1, 2));
    }
}
