//! Byte offset ↔ line/column conversion for annotated text.

use serde::Serialize;

/// 1-based line and column. Columns count characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

/// Line start offsets of a text, for O(log n) position lookups.
pub struct LineIndex<'t> {
    text: &'t str,
    line_starts: Vec<usize>,
}

impl<'t> LineIndex<'t> {
    pub fn new(text: &'t str) -> Self {
        let mut line_starts = vec![0]; // Line 1 starts at offset 0
        line_starts.extend(
            text.char_indices()
                .filter(|(_, c)| *c == '\n')
                .map(|(i, _)| i + 1),
        );
        Self { text, line_starts }
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Position of a byte offset. Offsets past the end clamp to the end.
    pub fn position(&self, offset: usize) -> Position {
        let offset = offset.min(self.text.len());
        let line = match self.line_starts.binary_search(&offset) {
            Ok(line) => line + 1, // Exact match at line start
            Err(line) => line,    // Falls within this line
        };
        let line_start = self.line_starts[line - 1];
        let column = self
            .text
            .get(line_start..offset)
            .map_or(0, |prefix| prefix.chars().count())
            + 1;
        Position { line, column }
    }

    /// Byte offset of a 1-based line/column, or `None` when it lies outside
    /// the text. The column just past the last character of a line is valid.
    pub fn offset(&self, line: usize, column: usize) -> Option<usize> {
        if line == 0 || column == 0 {
            return None;
        }
        let line_start = *self.line_starts.get(line - 1)?;
        let line_text = self.line_text(line)?;

        if column == 1 {
            return Some(line_start);
        }
        match line_text.char_indices().nth(column - 1) {
            Some((i, _)) => Some(line_start + i),
            None if line_text.chars().count() == column - 1 => Some(line_start + line_text.len()),
            None => None,
        }
    }

    /// Text of a 1-based line without its line terminator.
    pub fn line_text(&self, line: usize) -> Option<&'t str> {
        let start = *self.line_starts.get(line.checked_sub(1)?)?;
        let end = self
            .line_starts
            .get(line)
            .map_or(self.text.len(), |next| next - 1);
        let text = &self.text[start..end];
        Some(text.strip_suffix('\r').unwrap_or(text))
    }
}
