//! Position and location tracking for Go source files
//!
//! The lexer hands out `(Token, std::ops::Range<usize>)` pairs. Everything the
//! classifier compares is a byte offset, but log lines and CLI reports want
//! line:column values, so comments carry both.
//!
//! ## Types
//!
//! - [`Position`] - A zero-based line:column position
//! - [`Range`] - A byte span together with its start/end positions
//! - [`SourceLocation`] - Converts byte offsets to positions
//!
//! Conversion is a binary search over the byte offsets at which lines start.

use std::fmt;
use std::ops::Range as ByteRange;

/// A position in source code (zero-based line and byte column)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Editors count from one
        write!(f, "{}:{}", self.line + 1, self.column + 1)
    }
}

/// A location in source code: the byte span plus its line/column endpoints
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Range {
    pub span: ByteRange<usize>,
    pub start: Position,
    pub end: Position,
}

impl Range {
    pub fn new(span: ByteRange<usize>, start: Position, end: Position) -> Self {
        Self { span, start, end }
    }

    /// Byte offset the range starts at. This is what scope checks compare.
    pub fn offset(&self) -> usize {
        self.span.start
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// Provides fast conversion from byte offsets to line/column positions
#[derive(Debug, Clone)]
pub struct SourceLocation {
    /// Byte offsets where each line starts
    line_starts: Vec<usize>,
}

impl SourceLocation {
    pub fn new(source: &str) -> Self {
        let mut line_starts = vec![0];
        line_starts.extend(
            source
                .bytes()
                .enumerate()
                .filter(|(_, b)| *b == b'\n')
                .map(|(pos, _)| pos + 1),
        );
        Self { line_starts }
    }

    /// Convert a byte offset to a line/column position
    pub fn byte_to_position(&self, byte_offset: usize) -> Position {
        let line = self
            .line_starts
            .binary_search(&byte_offset)
            .unwrap_or_else(|i| i - 1);

        Position::new(line, byte_offset - self.line_starts[line])
    }

    /// Convert a byte range to a [`Range`]
    pub fn byte_range_to_range(&self, range: &ByteRange<usize>) -> Range {
        Range::new(
            range.clone(),
            self.byte_to_position(range.start),
            self.byte_to_position(range.end),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_display_is_one_based() {
        assert_eq!(Position::new(0, 0).to_string(), "1:1");
        assert_eq!(Position::new(4, 9).to_string(), "5:10");
    }

    #[test]
    fn test_byte_to_position() {
        let source = "package main\n\nfunc f() {\n}\n";
        let locator = SourceLocation::new(source);

        assert_eq!(locator.byte_to_position(0), Position::new(0, 0));
        assert_eq!(locator.byte_to_position(12), Position::new(0, 12));
        assert_eq!(locator.byte_to_position(13), Position::new(1, 0));
        assert_eq!(locator.byte_to_position(14), Position::new(2, 0));
        assert_eq!(locator.byte_to_position(23), Position::new(2, 9));
    }

    #[test]
    fn test_columns_count_bytes_not_chars() {
        let source = "// héllo\nx";
        let locator = SourceLocation::new(source);
        // 'é' is two bytes, so the newline sits at byte 9
        assert_eq!(locator.byte_to_position(10), Position::new(1, 0));
        assert_eq!(locator.byte_to_position(8), Position::new(0, 8));
    }

    #[test]
    fn test_range_offset_and_display() {
        let source = "a\n/* one\ntwo */\n";
        let locator = SourceLocation::new(source);
        let range = locator.byte_range_to_range(&(2..15));

        assert_eq!(range.offset(), 2);
        assert_eq!(range.to_string(), "2:1..3:7");
    }
}
