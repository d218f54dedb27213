//! Byte ranges into the diagram source.

use std::ops::Range;

/// A half-open byte range in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    start: usize,
    end: usize,
}

impl Span {
    /// Create a span covering `range`.
    pub fn new(range: Range<usize>) -> Self {
        Self {
            start: range.start,
            end: range.end.max(range.start),
        }
    }

    /// Create a one-character span at a 1-based `row`/`col` text position.
    ///
    /// Columns count characters, not bytes. Positions past the end of a line
    /// or of the source are clamped to the nearest valid offset.
    pub fn at_position(source: &str, row: u32, col: u32) -> Self {
        let mut offset = 0;
        for line in source.split_inclusive('\n').take(row.saturating_sub(1) as usize) {
            offset += line.len();
        }

        let line = &source[offset..];
        let line = line.split('\n').next().unwrap_or_default();
        let column = line
            .char_indices()
            .nth(col.saturating_sub(1) as usize)
            .map(|(index, ch)| (index, ch.len_utf8()));

        match column {
            Some((index, width)) => Self::new(offset + index..offset + index + width),
            None => {
                let end = offset + line.len();
                Self::new(end..end)
            }
        }
    }

    /// Get the start offset of the span.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Get the end offset of the span.
    pub fn end(&self) -> usize {
        self.end
    }

    /// Get the length of the span.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if the span is empty.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_at_position_first_line() {
        let span = Span::at_position("<mxfile>", 1, 2);
        assert_eq!(span, Span::new(1..2));
    }

    #[test]
    fn test_at_position_later_line() {
        let source = "<a>\n  <b>\n</a>";
        let span = Span::at_position(source, 2, 3);
        assert_eq!(span.start(), 6);
        assert_eq!(span.len(), 1);
    }

    #[test]
    fn test_at_position_counts_characters() {
        let source = "<a v=\"é\" x>";
        let span = Span::at_position(source, 1, 9);
        assert_eq!(&source[span.start()..span.end()], " ");
    }

    #[test]
    fn test_at_position_clamps_past_end() {
        let source = "<a>\n<b";
        let span = Span::at_position(source, 2, 40);
        assert_eq!(span, Span::new(source.len()..source.len()));
        assert!(span.is_empty());

        let span = Span::at_position(source, 9, 1);
        assert_eq!(span.start(), source.len());
    }
}
