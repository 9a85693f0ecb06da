use editcore::{Document, Position, Range, TextReplacement};

/// Extends each edit to cover whole words, so highlights do not cut through
/// identifiers. The predicate is an ASCII letter.
pub fn grow_to_word_boundary(
    edits: &[TextReplacement],
    original: &Document,
) -> Vec<TextReplacement> {
    grow_edits(edits, original, is_word_unit)
}

/// Extends each edit to the surrounding whitespace. Fallback for edits at
/// non-letter token boundaries, where word growth stays empty.
pub fn grow_to_whitespace_boundary(
    edits: &[TextReplacement],
    original: &Document,
) -> Vec<TextReplacement> {
    grow_edits(edits, original, is_non_whitespace_unit)
}

fn is_word_unit(unit: u16) -> bool {
    let Ok(byte) = u8::try_from(unit) else {
        return false;
    };
    byte.is_ascii_alphabetic()
}

fn is_non_whitespace_unit(unit: u16) -> bool {
    char::from_u32(u32::from(unit)).is_none_or(|ch| !ch.is_whitespace())
}

/// Widens every edit on its start line while the code unit at the edge
/// satisfies `keep_growing`, then merges grown edits that touch. Growth is
/// clipped at the neighboring edits, and the grown-over original text is
/// folded into the replacement: grown ranges stay disjoint and growing never
/// changes an edit's net effect. Edits spanning multiple lines pass through
/// unchanged.
fn grow_edits(
    edits: &[TextReplacement],
    original: &Document,
    keep_growing: impl Fn(u16) -> bool,
) -> Vec<TextReplacement> {
    let mut sorted: Vec<&TextReplacement> = edits.iter().collect();
    sorted.sort_by_key(|edit| edit.range.start);

    let mut grown: Vec<TextReplacement> = Vec::new();
    for index in 0..sorted.len() {
        let previous_end = grown.last().map(|last| last.range.end);
        let next_start = sorted.get(index + 1).map(|next| next.range.start);
        let widened = widen_edit(sorted[index], original, previous_end, next_start, &keep_growing);
        push_merged(&mut grown, widened, original);
    }
    grown
}

/// `previous_end` and `next_start` bound the growth, keeping grown ranges
/// from covering a neighboring edit's text twice.
fn widen_edit(
    edit: &TextReplacement,
    original: &Document,
    previous_end: Option<Position>,
    next_start: Option<Position>,
    keep_growing: &impl Fn(u16) -> bool,
) -> TextReplacement {
    if !edit.range.is_single_line() {
        return edit.clone();
    }

    let line_number = edit.range.start.line;
    let Some(line) = original.line(line_number) else {
        return edit.clone();
    };
    let units: Vec<u16> = line.encode_utf16().collect();

    let unit_at = |index: isize| -> Option<u16> {
        usize::try_from(index)
            .ok()
            .and_then(|index| units.get(index).copied())
    };

    // Index of the first covered unit, and of the last one. For an empty
    // range these straddle the insertion point.
    let start_index = edit.range.start.column as isize - 1;
    let end_index = edit.range.end.column as isize - 2;

    // Neighbor bounds never shrink the edit's own range.
    let floor = match previous_end {
        Some(end) if end.line == line_number => (end.column as isize - 1).min(start_index),
        Some(end) if end.line > line_number => start_index,
        _ => 0,
    };
    let ceiling = match next_start {
        Some(start) if start.line == line_number => (start.column as isize - 2).max(end_index),
        Some(start) if start.line < line_number => end_index,
        _ => units.len() as isize - 1,
    };

    let mut grown_start = start_index;
    let mut grown_end = end_index;

    if unit_at(start_index).is_some_and(|unit| keep_growing(unit)) {
        while grown_start > floor
            && unit_at(grown_start - 1).is_some_and(|unit| keep_growing(unit))
        {
            grown_start -= 1;
        }
    }
    if unit_at(end_index).is_some_and(|unit| keep_growing(unit)) {
        while grown_end < ceiling
            && unit_at(grown_end + 1).is_some_and(|unit| keep_growing(unit))
        {
            grown_end += 1;
        }
    }

    let mut text = decode_units(&units, grown_start, start_index);
    text.push_str(&edit.text);
    text.push_str(&decode_units(&units, end_index + 1, grown_end + 1));

    TextReplacement::new(
        Range::new(
            Position::new(line_number, (grown_start + 1) as usize),
            Position::new(line_number, (grown_end + 2) as usize),
        ),
        text,
    )
}

fn decode_units(units: &[u16], from: isize, to: isize) -> String {
    let from = from.clamp(0, units.len() as isize) as usize;
    let to = to.clamp(0, units.len() as isize) as usize;
    if from >= to {
        return String::new();
    }
    String::from_utf16_lossy(&units[from..to])
}

/// Appends `edit`, joining it with the previous one when their ranges touch
/// or intersect. The join keeps the original text between the two ranges.
fn push_merged(grown: &mut Vec<TextReplacement>, edit: TextReplacement, original: &Document) {
    if let Some(last) = grown.last_mut() {
        if last.range.touches(&edit.range) {
            let between = Range::new(last.range.end, edit.range.start.max(last.range.end));
            last.text.push_str(&original.slice(&between));
            last.text.push_str(&edit.text);
            last.range = last.range.union(&edit.range);
            return;
        }
    }
    grown.push(edit);
}
