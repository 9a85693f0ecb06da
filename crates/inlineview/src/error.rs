use thiserror::Error;

/// A precondition the caller is responsible for was violated. These mark
/// programmer errors, not bad input; the render pass should drop the inline
/// rendering for the frame and surface the diagnostic.
#[derive(Debug, Error)]
pub enum InvariantViolation {
    #[error("custom view requested without a display location")]
    MissingDisplayLocation,

    #[error("word replacement view requested for a diff with no replacements")]
    NoReplacements,

    #[error("deletion view requested for a diff with no deleted ranges")]
    NoDeletions,

    #[error("multi-line insertion view requires exactly one pure insertion")]
    NotSingleInsertion,

    #[error("no view has been cached for this selector yet")]
    NothingCached,
}
