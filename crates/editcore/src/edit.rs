use serde::{Deserialize, Serialize};

use crate::document::Document;
use crate::range::Range;

/// Replacement of the text covered by `range` with `text`. An empty range
/// inserts, empty text deletes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextReplacement {
    pub range: Range,
    pub text: String,
}

impl TextReplacement {
    pub fn new(range: Range, text: impl Into<String>) -> Self {
        Self {
            range,
            text: text.into(),
        }
    }

    pub fn is_insertion(&self) -> bool {
        self.range.is_empty()
    }
}

/// Applies `edits` to `document`, producing the edited text. Edits are
/// expected sorted ascending and non-overlapping; an edit starting before
/// the previous one ended is skipped.
pub fn apply_edits(document: &Document, edits: &[TextReplacement]) -> String {
    let source = document.to_string();
    let mut out = String::with_capacity(source.len());
    let mut cursor = 0;
    for edit in edits {
        let start = document.byte_offset(edit.range.start);
        let end = document.byte_offset(edit.range.end).max(start);
        if start < cursor {
            continue;
        }
        out.push_str(&source[cursor..start]);
        out.push_str(&edit.text);
        cursor = end;
    }
    out.push_str(&source[cursor..]);
    out
}
