use serde::{Deserialize, Serialize};

use crate::range::{LineRange, Range};

/// One minimal character-level change inside a line mapping. An empty
/// original range is a pure insertion, an empty modified range a pure
/// deletion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InnerChange {
    pub original: Range,
    pub modified: Range,
}

impl InnerChange {
    pub fn new(original: Range, modified: Range) -> Self {
        Self { original, modified }
    }

    pub fn is_insertion(&self) -> bool {
        self.original.is_empty()
    }

    pub fn is_deletion(&self) -> bool {
        self.modified.is_empty()
    }
}

/// One contiguous block of changed lines, with the character-level changes
/// inside it. A diff is an ordered list of these, sorted by original
/// position, non-overlapping.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineRangeMapping {
    pub original: LineRange,
    pub modified: LineRange,
    pub inner: Vec<InnerChange>,
}

impl LineRangeMapping {
    pub fn new(original: LineRange, modified: LineRange, inner: Vec<InnerChange>) -> Self {
        Self {
            original,
            modified,
            inner,
        }
    }
}

/// Union of the original line ranges across `mappings`.
pub fn original_line_span(mappings: &[LineRangeMapping]) -> Option<LineRange> {
    let mut spans = mappings.iter().map(|mapping| mapping.original);
    let first = spans.next()?;
    Some(spans.fold(first, |joined, span| joined.join(&span)))
}

/// Union of the modified line ranges across `mappings`.
pub fn modified_line_span(mappings: &[LineRangeMapping]) -> Option<LineRange> {
    let mut spans = mappings.iter().map(|mapping| mapping.modified);
    let first = spans.next()?;
    Some(spans.fold(first, |joined, span| joined.join(&span)))
}
