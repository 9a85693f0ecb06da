use editcore::{InnerChange, LineRange, Position, Range, TextReplacement};
use serde::{Deserialize, Serialize};

use crate::classify::word_replacements;
use crate::error::InvariantViolation;
use crate::model::{DisplayLocation, ViewContext, ViewKind};

/// Everything a rendering surface needs to paint one presentation, tagged by
/// kind. Kinds that paint from the live buffer carry no payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RenderState {
    Custom {
        display_location: DisplayLocation,
    },
    InsertionInline,
    InsertionMultiLine {
        position: Position,
        text: String,
    },
    SideBySide,
    Deletion {
        original_line_range: LineRange,
        deletions: Vec<Range>,
    },
    LineReplacement {
        original_line_range: LineRange,
        modified_line_range: LineRange,
        modified_lines: Vec<String>,
        replacements: Vec<InnerChange>,
    },
    WordReplacements {
        replacements: Vec<TextReplacement>,
    },
    Collapsed,
}

/// Builds the render state for `kind` from the same context the classifier
/// saw. Pure; fails when the diff cannot actually support the kind.
pub fn build_render_state(
    kind: ViewKind,
    ctx: &ViewContext,
) -> Result<RenderState, InvariantViolation> {
    match kind {
        ViewKind::Custom => {
            let Some(display_location) = ctx.display_location.clone() else {
                return Err(InvariantViolation::MissingDisplayLocation);
            };
            Ok(RenderState::Custom { display_location })
        }

        ViewKind::InsertionInline => Ok(RenderState::InsertionInline),

        ViewKind::InsertionMultiLine => {
            let mut changes = ctx.diff.iter().flat_map(|mapping| mapping.inner.iter());
            match (changes.next(), changes.next()) {
                (Some(inner), None) if inner.is_insertion() => {
                    Ok(RenderState::InsertionMultiLine {
                        position: inner.original.start,
                        text: ctx.modified.slice(&inner.modified),
                    })
                }
                _ => Err(InvariantViolation::NotSingleInsertion),
            }
        }

        ViewKind::SideBySide => Ok(RenderState::SideBySide),

        ViewKind::Deletion => {
            let deletions: Vec<Range> = ctx
                .diff
                .iter()
                .flat_map(|mapping| mapping.inner.iter())
                .map(|inner| inner.original)
                .collect();
            if deletions.is_empty() {
                return Err(InvariantViolation::NoDeletions);
            }
            let original_line_range =
                editcore::original_line_span(ctx.diff).ok_or(InvariantViolation::NoDeletions)?;
            Ok(RenderState::Deletion {
                original_line_range,
                deletions,
            })
        }

        ViewKind::LineReplacement => {
            let original_line_range =
                editcore::original_line_span(ctx.diff).unwrap_or(LineRange::new(1, 1));
            let modified_line_range =
                editcore::modified_line_span(ctx.diff).unwrap_or(LineRange::new(1, 1));
            let modified_lines = (modified_line_range.start..modified_line_range.end)
                .filter_map(|line_number| ctx.modified.line(line_number))
                .collect();
            let replacements = ctx
                .diff
                .iter()
                .flat_map(|mapping| mapping.inner.iter())
                .copied()
                .collect();
            Ok(RenderState::LineReplacement {
                original_line_range,
                modified_line_range,
                modified_lines,
                replacements,
            })
        }

        ViewKind::WordReplacements => {
            let replacements =
                word_replacements(ctx).ok_or(InvariantViolation::NoReplacements)?;
            Ok(RenderState::WordReplacements { replacements })
        }

        ViewKind::Collapsed => Ok(RenderState::Collapsed),
    }
}
