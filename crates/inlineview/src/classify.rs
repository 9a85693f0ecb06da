use editcore::{InnerChange, Range, TextReplacement, utf16_len};

use crate::grow::{grow_to_whitespace_boundary, grow_to_word_boundary};
use crate::model::{CodeShifting, SideBySidePolicy, ViewContext, ViewKind};

/// Column span under which an edit still reads as a word-level change.
/// Shared with the long-insertion rejection after growing.
pub(crate) const MAX_COMPACT_COLUMNS: usize = 100;

/// Picks the presentation kind for a diff. Rules are checked in a fixed
/// order and the first match wins. Never returns `Collapsed`; collapsing is
/// an override the selector applies.
pub fn classify(ctx: &ViewContext) -> ViewKind {
    if ctx.display_location.is_some() {
        return ViewKind::Custom;
    }

    if let Some(kind) = single_line_insertion_kind(ctx) {
        return kind;
    }

    if is_deletion(ctx) {
        return ViewKind::Deletion;
    }

    if is_multi_line_insertion(ctx) {
        return ViewKind::InsertionMultiLine;
    }

    if word_replacements(ctx).is_some() {
        return ViewKind::WordReplacements;
    }

    if let Some(kind) = line_span_kind(ctx) {
        return kind;
    }

    ViewKind::SideBySide
}

fn inner_changes<'a>(ctx: &'a ViewContext<'_>) -> impl Iterator<Item = &'a InnerChange> {
    ctx.diff.iter().flat_map(|mapping| mapping.inner.iter())
}

fn single_inner_change<'a>(ctx: &'a ViewContext<'_>) -> Option<&'a InnerChange> {
    let mut changes = inner_changes(ctx);
    let first = changes.next()?;
    if changes.next().is_some() {
        return None;
    }
    Some(first)
}

/// A lone single-line insertion shows as ghost text, unless it sits before
/// the cursor on the cursor's line, where displacing the column the user is
/// typing at reads as flicker.
fn single_line_insertion_kind(ctx: &ViewContext) -> Option<ViewKind> {
    if ctx.policies.code_shifting == CodeShifting::Never {
        return None;
    }
    let inner = single_inner_change(ctx)?;
    if !inner.original.is_empty() || !inner.modified.is_single_line() {
        return None;
    }

    let at = inner.original.start;
    if at.line == ctx.cursor.line && at.column < ctx.cursor.column {
        return Some(ViewKind::LineReplacement);
    }
    Some(ViewKind::InsertionInline)
}

/// Every inner change only removes text: replacements are blank, originals
/// are not, and nothing blank is swapped for something longer.
fn is_deletion(ctx: &ViewContext) -> bool {
    let mut any = false;
    for inner in inner_changes(ctx) {
        any = true;
        let replacement = ctx.modified.slice(&inner.modified);
        if !replacement.trim().is_empty() {
            return false;
        }
        let original = ctx.original.slice(&inner.original);
        let original_len = utf16_len(&original);
        if original_len == 0 {
            return false;
        }
        if utf16_len(&replacement) >= original_len && original.trim().is_empty() {
            return false;
        }
    }
    any
}

fn is_multi_line_insertion(ctx: &ViewContext) -> bool {
    if !ctx.policies.multi_line_ghost || ctx.policies.code_shifting != CodeShifting::Always {
        return false;
    }
    let Some(inner) = single_inner_change(ctx) else {
        return false;
    };
    inner.original.is_empty() && !inner.modified.is_single_line()
}

/// The grown replacement list for compact single-line diffs, when the diff
/// qualifies for word-level rendering.
pub(crate) fn word_replacements(ctx: &ViewContext) -> Option<Vec<TextReplacement>> {
    single_inner_change(ctx)?;

    let original_span = editcore::original_line_span(ctx.diff)?;
    let modified_span = editcore::modified_line_span(ctx.diff)?;
    if original_span.len() != 1 || modified_span.len() != 1 {
        return None;
    }

    let mut edits = Vec::new();
    for inner in inner_changes(ctx) {
        if column_span(&inner.original) >= MAX_COMPACT_COLUMNS
            || column_span(&inner.modified) >= MAX_COMPACT_COLUMNS
        {
            return None;
        }
        edits.push(TextReplacement::new(
            inner.original,
            ctx.modified.slice(&inner.modified),
        ));
    }
    if edits.is_empty() {
        return None;
    }

    let mut grown = grow_to_word_boundary(&edits, ctx.original);
    if grown.iter().any(|edit| edit.range.is_empty()) {
        grown = grow_to_whitespace_boundary(&edits, ctx.original);
    }

    let oversized_insertion = grown
        .iter()
        .any(|edit| edit.range.is_empty() && utf16_len(&edit.text) > MAX_COMPACT_COLUMNS);
    if oversized_insertion {
        return None;
    }

    Some(grown)
}

fn column_span(range: &Range) -> usize {
    if range.is_single_line() {
        range.end.column.saturating_sub(range.start.column)
    } else {
        MAX_COMPACT_COLUMNS
    }
}

fn line_span_kind(ctx: &ViewContext) -> Option<ViewKind> {
    let original_span = editcore::original_line_span(ctx.diff)?;
    let modified_span = editcore::modified_line_span(ctx.diff)?;
    if original_span.is_empty() || modified_span.is_empty() {
        return None;
    }

    if original_span.len() == 1 && modified_span.len() == 1 {
        return Some(ViewKind::LineReplacement);
    }
    if ctx.policies.side_by_side == SideBySidePolicy::Auto && ctx.side_by_side_fits {
        return Some(ViewKind::SideBySide);
    }
    Some(ViewKind::LineReplacement)
}
