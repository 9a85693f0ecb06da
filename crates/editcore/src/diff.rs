use similar::{DiffTag, TextDiff};

use crate::document::{Document, utf16_len};
use crate::mapping::{InnerChange, LineRangeMapping};
use crate::range::{LineRange, Position, Range};

/// Computes the structured diff between two documents: one mapping per block
/// of changed lines, each carrying character-level inner changes. Equal
/// documents produce an empty diff.
pub fn compute_diff(original: &Document, modified: &Document) -> Vec<LineRangeMapping> {
    let original_lines = original.lines();
    let modified_lines = modified.lines();
    let original_refs: Vec<&str> = original_lines.iter().map(String::as_str).collect();
    let modified_refs: Vec<&str> = modified_lines.iter().map(String::as_str).collect();

    let diff = TextDiff::from_slices(&original_refs, &modified_refs);

    let mut mappings: Vec<LineRangeMapping> = Vec::new();
    for op in diff.ops() {
        if op.tag() == DiffTag::Equal {
            continue;
        }
        let original_range = LineRange::new(op.old_range().start + 1, op.old_range().end + 1);
        let modified_range = LineRange::new(op.new_range().start + 1, op.new_range().end + 1);
        match mappings.last_mut() {
            Some(last)
                if last.original.end == original_range.start
                    && last.modified.end == modified_range.start =>
            {
                last.original.end = original_range.end;
                last.modified.end = modified_range.end;
            }
            _ => mappings.push(LineRangeMapping::new(original_range, modified_range, Vec::new())),
        }
    }

    for mapping in &mut mappings {
        mapping.inner = inner_changes_for(mapping, &original_refs, &modified_refs);
    }

    mappings
}

fn inner_changes_for(
    mapping: &LineRangeMapping,
    original_lines: &[&str],
    modified_lines: &[&str],
) -> Vec<InnerChange> {
    let original_count = mapping.original.len();
    let modified_count = mapping.modified.len();
    let paired = original_count.min(modified_count);

    let mut inner = Vec::new();
    for index in 0..paired {
        let original_line = mapping.original.start + index;
        let modified_line = mapping.modified.start + index;
        inner.extend(line_pair_changes(
            original_line,
            original_lines[original_line - 1],
            modified_line,
            modified_lines[modified_line - 1],
        ));
    }

    if original_count > paired {
        // Deleted lines with no paired counterpart.
        let first = mapping.original.start + paired;
        let last = mapping.original.end - 1;
        let original = Range::new(
            Position::new(first, 1),
            Position::new(last, utf16_len(original_lines[last - 1]) + 1),
        );
        let anchor = if modified_count == 0 {
            Position::new(mapping.modified.start, 1)
        } else {
            let last_modified = mapping.modified.end - 1;
            Position::new(
                last_modified,
                utf16_len(modified_lines[last_modified - 1]) + 1,
            )
        };
        inner.push(InnerChange::new(original, Range::empty(anchor)));
    } else if modified_count > paired {
        // Inserted lines with no paired counterpart.
        let first = mapping.modified.start + paired;
        let last = mapping.modified.end - 1;
        let modified = Range::new(
            Position::new(first, 1),
            Position::new(last, utf16_len(modified_lines[last - 1]) + 1),
        );
        let anchor = if original_count == 0 {
            Position::new(mapping.original.start, 1)
        } else {
            let last_original = mapping.original.end - 1;
            Position::new(
                last_original,
                utf16_len(original_lines[last_original - 1]) + 1,
            )
        };
        inner.push(InnerChange::new(Range::empty(anchor), modified));
    }

    inner
}

/// Character-level changes between two paired lines, at the granularity of
/// identifier/whitespace/punctuation tokens.
fn line_pair_changes(
    original_line: usize,
    original_text: &str,
    modified_line: usize,
    modified_text: &str,
) -> Vec<InnerChange> {
    if original_text == modified_text {
        return Vec::new();
    }

    let original_tokens = tokenize(original_text);
    let modified_tokens = tokenize(modified_text);
    let original_starts = token_starts(&original_tokens);
    let modified_starts = token_starts(&modified_tokens);

    let diff = TextDiff::from_slices(&original_tokens, &modified_tokens);
    let mut inner = Vec::new();
    for op in diff.ops() {
        if op.tag() == DiffTag::Equal {
            continue;
        }
        inner.push(InnerChange::new(
            Range::new(
                Position::new(original_line, original_starts[op.old_range().start]),
                Position::new(original_line, original_starts[op.old_range().end]),
            ),
            Range::new(
                Position::new(modified_line, modified_starts[op.new_range().start]),
                Position::new(modified_line, modified_starts[op.new_range().end]),
            ),
        ));
    }
    inner
}

fn char_class(ch: char) -> u8 {
    if ch.is_alphanumeric() || ch == '_' {
        0
    } else if ch.is_whitespace() {
        1
    } else {
        2
    }
}

/// Splits a line into identifier runs, whitespace runs, and individual
/// punctuation characters.
fn tokenize(text: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut chars = text.char_indices().peekable();

    while let Some((start, ch)) = chars.next() {
        let class = char_class(ch);
        if class == 2 {
            tokens.push(&text[start..start + ch.len_utf8()]);
        } else {
            let mut end = start + ch.len_utf8();
            while let Some(&(_, next_ch)) = chars.peek() {
                if char_class(next_ch) == class {
                    end += next_ch.len_utf8();
                    chars.next();
                } else {
                    break;
                }
            }
            tokens.push(&text[start..end]);
        }
    }

    tokens
}

/// 1-based UTF-16 column of each token start, plus the end column.
fn token_starts(tokens: &[&str]) -> Vec<usize> {
    let mut starts = Vec::with_capacity(tokens.len() + 1);
    let mut column = 1;
    for token in tokens {
        starts.push(column);
        column += utf16_len(token);
    }
    starts.push(column);
    starts
}
