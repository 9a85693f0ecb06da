pub mod diff;
pub mod document;
pub mod edit;
pub mod mapping;
pub mod range;

pub use diff::compute_diff;
pub use document::{Document, utf16_len};
pub use edit::{TextReplacement, apply_edits};
pub use mapping::{InnerChange, LineRangeMapping, modified_line_span, original_line_span};
pub use range::{LineRange, Position, Range};
