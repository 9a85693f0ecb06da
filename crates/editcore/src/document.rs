use ropey::LineType;
use ropey::Rope;
use sum_tree::Bias;

use crate::range::{Position, Range};

/// An immutable text snapshot with 1-based line numbers and UTF-16 columns.
/// Out-of-range positions clamp to the nearest valid offset.
#[derive(Clone, Debug)]
pub struct Document {
    rope: Rope,
}

impl Document {
    pub fn from_str(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rope.len() == 0
    }

    /// Number of lines, not counting the phantom line after a trailing
    /// newline. Empty text has zero lines.
    pub fn line_count(&self) -> usize {
        if self.is_empty() {
            return 0;
        }

        let mut count = self.rope.len_lines(LineType::LF);
        if self.rope.byte(self.rope.len() - 1) == b'\n' {
            count = count.saturating_sub(1);
        }

        count
    }

    /// The content of `line_number` without its line ending.
    pub fn line(&self, line_number: usize) -> Option<String> {
        if line_number == 0 || line_number > self.line_count() {
            return None;
        }
        // A line can straddle rope chunks, so the slice may not expose a
        // contiguous str.
        let line = self.rope.line(line_number - 1, LineType::LF).to_string();
        Some(trim_line_ending(&line).to_string())
    }

    pub fn lines(&self) -> Vec<String> {
        (1..=self.line_count())
            .filter_map(|line_number| self.line(line_number))
            .collect()
    }

    /// UTF-16 length of the line's content, without its line ending.
    pub fn line_len_utf16(&self, line_number: usize) -> usize {
        if line_number == 0 || line_number > self.line_count() {
            return 0;
        }
        let row = line_number - 1;
        let start = self.rope.line_to_byte_idx(row, LineType::LF);
        let end = self.line_content_end(row);
        self.rope.byte_to_utf16_idx(end) - self.rope.byte_to_utf16_idx(start)
    }

    /// Byte offset of `position`. Columns past the end of the line clamp to
    /// the line's content end; lines past the end clamp to the document end.
    pub fn byte_offset(&self, position: Position) -> usize {
        let row = position.line.saturating_sub(1);
        if row >= self.rope.len_lines(LineType::LF) {
            return self.rope.len();
        }

        let start = self.rope.line_to_byte_idx(row, LineType::LF);
        let end = self.line_content_end(row);
        let start_utf16 = self.rope.byte_to_utf16_idx(start);
        let end_utf16 = self.rope.byte_to_utf16_idx(end);
        let target = (start_utf16 + position.column.saturating_sub(1)).min(end_utf16);
        self.clip_offset(self.rope.utf16_to_byte_idx(target), Bias::Left)
    }

    /// The text covered by `range`.
    pub fn slice(&self, range: &Range) -> String {
        let start = self.byte_offset(range.start);
        let end = self.byte_offset(range.end);
        if end <= start {
            return String::new();
        }
        self.rope.slice(start..end).to_string()
    }

    pub fn to_string(&self) -> String {
        self.rope.to_string()
    }

    fn line_content_end(&self, row: usize) -> usize {
        let start = self.rope.line_to_byte_idx(row, LineType::LF);
        let mut end = start + self.rope.line(row, LineType::LF).len();
        if end > start && self.rope.byte(end - 1) == b'\n' {
            end -= 1;
        }
        if end > start && self.rope.byte(end - 1) == b'\r' {
            end -= 1;
        }
        end
    }

    fn clip_offset(&self, offset: usize, bias: Bias) -> usize {
        if offset > self.rope.len() {
            return self.rope.len();
        }
        if self.rope.is_char_boundary(offset) {
            return offset;
        }
        if bias == Bias::Left {
            self.rope.floor_char_boundary(offset)
        } else {
            self.rope.ceil_char_boundary(offset)
        }
    }
}

fn trim_line_ending(line: &str) -> &str {
    if let Some(stripped) = line.strip_suffix("\r\n") {
        return stripped;
    }
    let without_lf = line.strip_suffix('\n').unwrap_or(line);
    without_lf.strip_suffix('\r').unwrap_or(without_lf)
}

/// UTF-16 length of `text`, the unit columns are counted in.
pub fn utf16_len(text: &str) -> usize {
    text.encode_utf16().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_count_ignores_trailing_newline() {
        assert_eq!(Document::from_str("").line_count(), 0);
        assert_eq!(Document::from_str("a").line_count(), 1);
        assert_eq!(Document::from_str("a\n").line_count(), 1);
        assert_eq!(Document::from_str("a\nb").line_count(), 2);
        assert_eq!(Document::from_str("a\nb\n").line_count(), 2);
    }

    #[test]
    fn line_strips_line_endings() {
        let doc = Document::from_str("one\r\ntwo\nthree");
        assert_eq!(doc.line(1).as_deref(), Some("one"));
        assert_eq!(doc.line(2).as_deref(), Some("two"));
        assert_eq!(doc.line(3).as_deref(), Some("three"));
        assert_eq!(doc.line(4), None);
        assert_eq!(doc.line(0), None);
    }

    #[test]
    fn line_content_survives_large_documents() {
        // Enough text that lines land across several rope chunks.
        let lines: Vec<String> = (0..1000)
            .map(|index| format!("fn handler_{index}() {{ route({index}) }}"))
            .collect();
        let doc = Document::from_str(&lines.join("\n"));
        assert_eq!(doc.line_count(), 1000);
        for (index, expected) in lines.iter().enumerate() {
            assert_eq!(doc.line(index + 1).as_deref(), Some(expected.as_str()));
        }
        assert_eq!(doc.lines(), lines);
    }

    #[test]
    fn byte_offset_resolves_utf16_columns() {
        // U+10400 is one char, two UTF-16 units, four bytes.
        let doc = Document::from_str("a\u{10400}b\nnext");
        assert_eq!(doc.byte_offset(Position::new(1, 1)), 0);
        assert_eq!(doc.byte_offset(Position::new(1, 2)), 1);
        assert_eq!(doc.byte_offset(Position::new(1, 4)), 5);
        assert_eq!(doc.byte_offset(Position::new(1, 5)), 6);
        assert_eq!(doc.byte_offset(Position::new(2, 1)), 7);
    }

    #[test]
    fn byte_offset_clamps_past_line_and_document_end() {
        let doc = Document::from_str("ab\ncd");
        // Column past the line content stops before the newline.
        assert_eq!(doc.byte_offset(Position::new(1, 99)), 2);
        assert_eq!(doc.byte_offset(Position::new(9, 1)), 5);
    }

    #[test]
    fn slice_covers_multi_line_ranges() {
        let doc = Document::from_str("hello\nworld");
        let range = Range::new(Position::new(1, 4), Position::new(2, 3));
        assert_eq!(doc.slice(&range), "lo\nwo");
        assert_eq!(doc.slice(&Range::empty(Position::new(1, 3))), "");
    }

    #[test]
    fn line_len_counts_utf16_units() {
        let doc = Document::from_str("a\u{10400}b\nxyz");
        assert_eq!(doc.line_len_utf16(1), 4);
        assert_eq!(doc.line_len_utf16(2), 3);
        assert_eq!(doc.line_len_utf16(3), 0);
    }
}
