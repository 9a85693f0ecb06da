pub mod classify;
pub mod error;
pub mod grow;
pub mod model;
pub mod render;
pub mod select;

pub use classify::classify;
pub use error::InvariantViolation;
pub use grow::{grow_to_whitespace_boundary, grow_to_word_boundary};
pub use model::{
    CachedView, CodeShifting, DisplayLocation, EditIdentity, SideBySidePolicy, ViewContext,
    ViewKind, ViewPolicies,
};
pub use render::{RenderState, build_render_state};
pub use select::ViewSelector;
