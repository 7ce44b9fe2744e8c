//! Core types shared by the highlighting pipeline: byte ranges, the style
//! palette and style spans.

/// Byte range and cursor types.
pub mod range;
/// Styled text spans.
pub mod span;
/// Style tags and their default colours.
pub mod style;

pub use range::{ByteIdx, ByteLen, Range};
pub use span::StyleSpan;
pub use style::{Color, StyleTag};
