use std::time::Instant;

use editcore::{Document, LineRangeMapping, Position, Range};
use serde::{Deserialize, Serialize};

/// How a proposed edit is presented to the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewKind {
    /// Rendered at an out-of-band location supplied with the edit.
    Custom,
    /// Ghost text inside the current line.
    InsertionInline,
    /// A block of ghost lines.
    InsertionMultiLine,
    /// Original and modified text shown next to each other.
    SideBySide,
    /// Struck-through ranges, nothing added.
    Deletion,
    /// The affected lines are replaced wholesale.
    LineReplacement,
    /// Individual words highlighted and replaced in place.
    WordReplacements,
    /// Only a collapsed indicator is shown.
    Collapsed,
}

impl ViewKind {
    /// Kinds whose layout depends on the horizontal space available.
    pub fn is_width_sensitive(&self) -> bool {
        matches!(self, ViewKind::SideBySide | ViewKind::LineReplacement)
    }
}

/// Anchor for edits that are not shown at their textual position.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayLocation {
    pub range: Range,
    pub label: String,
}

/// Stable identity of a logical proposed edit, distinct from its rendering.
/// Reclassification is avoided while the identity stays the same.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EditIdentity(pub String);

impl EditIdentity {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

/// Whether an inline suggestion may displace the code that follows it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CodeShifting {
    Never,
    Horizontal,
    Always,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SideBySidePolicy {
    Auto,
    Never,
}

/// Host-configurable presentation policies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewPolicies {
    pub code_shifting: CodeShifting,
    pub multi_line_ghost: bool,
    pub side_by_side: SideBySidePolicy,
}

impl Default for ViewPolicies {
    fn default() -> Self {
        Self {
            code_shifting: CodeShifting::Always,
            multi_line_ghost: true,
            side_by_side: SideBySidePolicy::Auto,
        }
    }
}

/// Everything one classification decision depends on. Built fresh per render
/// from snapshots; the selector is the only component that keeps state
/// across calls.
#[derive(Debug)]
pub struct ViewContext<'a> {
    pub identity: EditIdentity,
    pub diff: &'a [LineRangeMapping],
    pub original: &'a Document,
    pub modified: &'a Document,
    pub cursor: Position,
    pub display_location: Option<DisplayLocation>,
    /// Current editor width, only compared for equality.
    pub editor_width: u32,
    /// Verdict of the geometry collaborator for side-by-side layout.
    pub side_by_side_fits: bool,
    pub policies: ViewPolicies,
}

/// The decision kept between renders of one edit session.
#[derive(Clone, Debug)]
pub struct CachedView {
    pub identity: EditIdentity,
    pub kind: ViewKind,
    pub editor_width: u32,
    /// Since when `kind` has been continuously displayed. Carried over on
    /// rewrites that keep the kind.
    pub shown_since: Instant,
}
